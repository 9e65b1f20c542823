//! Carousel options
//!
//! `CarouselOptions` carries the required tile width plus `Option<T>`
//! overrides for everything else. Accessor methods fall back to the compiled
//! defaults in [`crate::constants`] when a field is `None`.

use serde::Deserialize;

use crate::constants::{affordance, env, geometry, measure, motion, overscan};
use crate::error::{CarouselError, Result};
use crate::layout::ViewportMetrics;

/// Easing function type for track motion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingKind {
    /// Constant velocity
    Linear = 0,
    /// Quadratic ease in
    EaseIn = 1,
    /// Quadratic ease out
    #[default]
    EaseOut = 2,
    /// Quadratic ease in and out
    EaseInOut = 3,
}

impl EasingKind {
    /// Decode the numeric easing kind used by the constants. Unknown values
    /// fall back to `EaseOut`.
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Linear,
            1 => Self::EaseIn,
            2 => Self::EaseOut,
            3 => Self::EaseInOut,
            _ => Self::EaseOut,
        }
    }

    /// Numeric form of this easing kind.
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Map linear progress `t` in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }

    /// Every easing kind, in numeric order.
    pub const ALL: [Self; 4] =
        [Self::Linear, Self::EaseIn, Self::EaseOut, Self::EaseInOut];
}

impl std::fmt::Display for EasingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::EaseIn => write!(f, "Ease In"),
            Self::EaseOut => write!(f, "Ease Out"),
            Self::EaseInOut => write!(f, "Ease In/Out"),
        }
    }
}

/// Configuration for one carousel instance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarouselOptions {
    /// Fixed width assumed for every tile (px). Required, must be > 0.
    pub element_width: f32,
    /// Width of each edge fade overlay (px)
    #[serde(default)]
    pub fade_distance: Option<f32>,
    /// Minimum gap used when counting how many tiles fit (px)
    #[serde(default)]
    pub min_padding: Option<f32>,
    /// Hidden tiles kept before the window
    #[serde(default)]
    pub overscan_before: Option<usize>,
    /// Hidden tiles kept after the window
    #[serde(default)]
    pub overscan_after: Option<usize>,
    /// Delay before the first measurement after attaching (ms)
    #[serde(default)]
    pub initial_measure_delay_ms: Option<u64>,
    /// Opacity of a navigation control at its boundary
    #[serde(default)]
    pub dimmed_opacity: Option<f32>,
    /// Track tween duration (ms)
    #[serde(default)]
    pub snap_duration_ms: Option<u64>,
    /// Track tween easing
    #[serde(default)]
    pub easing: Option<EasingKind>,
}

impl CarouselOptions {
    /// Options with the given tile width and every other setting defaulted.
    pub fn new(element_width: f32) -> Self {
        Self {
            element_width,
            fade_distance: None,
            min_padding: None,
            overscan_before: None,
            overscan_after: None,
            initial_measure_delay_ms: None,
            dimmed_opacity: None,
            snap_duration_ms: None,
            easing: None,
        }
    }

    /// Parse and validate options from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: Self = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Apply `TILESTRIP_*` environment overrides on top of these options.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides resolved through `lookup`, keyed by the variable names
    /// in [`crate::constants::env`].
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(env::FADE_DISTANCE) {
            self.fade_distance =
                Some(parse_override("fade_distance", &raw)?);
        }
        if let Some(raw) = lookup(env::MIN_PADDING) {
            self.min_padding = Some(parse_override("min_padding", &raw)?);
        }
        if let Some(raw) = lookup(env::INITIAL_MEASURE_DELAY_MS) {
            self.initial_measure_delay_ms =
                Some(parse_override("initial_measure_delay_ms", &raw)?);
        }
        self.validate()?;
        Ok(self)
    }

    pub fn with_fade_distance(mut self, fade_distance: f32) -> Self {
        self.fade_distance = Some(fade_distance);
        self
    }

    pub fn with_min_padding(mut self, min_padding: f32) -> Self {
        self.min_padding = Some(min_padding);
        self
    }

    pub fn with_overscan(mut self, before: usize, after: usize) -> Self {
        self.overscan_before = Some(before);
        self.overscan_after = Some(after);
        self
    }

    pub fn with_initial_measure_delay_ms(mut self, delay_ms: u64) -> Self {
        self.initial_measure_delay_ms = Some(delay_ms);
        self
    }

    pub fn with_motion(mut self, duration_ms: u64, easing: EasingKind) -> Self {
        self.snap_duration_ms = Some(duration_ms);
        self.easing = Some(easing);
        self
    }

    /// Check every option against its accepted range.
    pub fn validate(&self) -> Result<()> {
        if !self.element_width.is_finite() || self.element_width <= 0.0 {
            return Err(CarouselError::invalid(
                "element_width",
                format!("must be a finite width > 0, got {}", self.element_width),
            ));
        }
        non_negative("fade_distance", self.fade_distance())?;
        non_negative("min_padding", self.min_padding())?;

        let opacity = self.dimmed_opacity();
        if !(0.0..=1.0).contains(&opacity) {
            return Err(CarouselError::invalid(
                "dimmed_opacity",
                format!("must lie in [0, 1], got {opacity}"),
            ));
        }
        Ok(())
    }

    pub fn fade_distance(&self) -> f32 {
        self.fade_distance.unwrap_or(geometry::FADE_DISTANCE)
    }

    pub fn min_padding(&self) -> f32 {
        self.min_padding.unwrap_or(geometry::MIN_PADDING)
    }

    pub fn overscan_before(&self) -> usize {
        self.overscan_before.unwrap_or(overscan::BEFORE)
    }

    pub fn overscan_after(&self) -> usize {
        self.overscan_after.unwrap_or(overscan::AFTER)
    }

    pub fn initial_measure_delay_ms(&self) -> u64 {
        self.initial_measure_delay_ms
            .unwrap_or(measure::INITIAL_DELAY_MS)
    }

    pub fn dimmed_opacity(&self) -> f32 {
        self.dimmed_opacity.unwrap_or(affordance::DIMMED_OPACITY)
    }

    pub fn snap_duration_ms(&self) -> u64 {
        self.snap_duration_ms.unwrap_or(motion::SNAP_DURATION_MS)
    }

    pub fn easing(&self) -> EasingKind {
        self.easing
            .unwrap_or_else(|| EasingKind::from_u8(motion::EASING_KIND))
    }

    /// Payload for a `SetViewportWidth` action at the given container width.
    pub fn viewport_metrics(
        &self,
        container_width: f32,
        tile_count: usize,
    ) -> ViewportMetrics {
        ViewportMetrics {
            container_width,
            fade_distance: self.fade_distance(),
            tile_width: self.element_width,
            min_padding: self.min_padding(),
            tile_count,
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CarouselError::invalid(
            field,
            format!("must be finite and >= 0, got {value}"),
        ))
    }
}

fn parse_override<T: std::str::FromStr>(
    field: &'static str,
    raw: &str,
) -> Result<T> {
    raw.trim().parse().map_err(|_| {
        CarouselError::invalid(field, format!("cannot parse override {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_fall_back_to_constants() {
        let options = CarouselOptions::new(200.0);
        assert_eq!(options.fade_distance(), 100.0);
        assert_eq!(options.min_padding(), 0.0);
        assert_eq!(options.overscan_before(), 0);
        assert_eq!(options.overscan_after(), 1);
        assert_eq!(options.initial_measure_delay_ms(), 0);
        assert_eq!(options.dimmed_opacity(), 0.2);
        assert_eq!(options.easing(), EasingKind::EaseOut);
    }

    #[test]
    fn rejects_non_positive_tile_width() {
        for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let err = CarouselOptions::new(width).validate().unwrap_err();
            assert!(matches!(
                err,
                CarouselError::InvalidOption {
                    field: "element_width",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_negative_fade_and_padding() {
        let err = CarouselOptions::new(200.0)
            .with_fade_distance(-1.0)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("fade_distance"));

        let err = CarouselOptions::new(200.0)
            .with_min_padding(f32::NAN)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("min_padding"));
    }

    #[test]
    fn parses_toml() {
        let options = CarouselOptions::from_toml_str(
            r#"
            element_width = 180.0
            fade_distance = 60.0
            min_padding = 20.0
            easing = "ease-in-out"
            "#,
        )
        .unwrap();
        assert_eq!(options.element_width, 180.0);
        assert_eq!(options.fade_distance(), 60.0);
        assert_eq!(options.min_padding(), 20.0);
        assert_eq!(options.easing(), EasingKind::EaseInOut);
        assert_eq!(options.overscan_after(), 1);
    }

    #[test]
    fn toml_errors_are_reported() {
        let err = CarouselOptions::from_toml_str("fade_distance = 10.0")
            .unwrap_err();
        assert!(matches!(err, CarouselError::Config(_)));

        let err =
            CarouselOptions::from_toml_str("element_width = 0.0").unwrap_err();
        assert!(matches!(err, CarouselError::InvalidOption { .. }));
    }

    #[test]
    fn overrides_apply_and_validate() {
        let options = CarouselOptions::new(200.0)
            .with_overrides_from(|key| match key {
                env::FADE_DISTANCE => Some("40".into()),
                env::INITIAL_MEASURE_DELAY_MS => Some(" 16 ".into()),
                _ => None,
            })
            .unwrap();
        assert_eq!(options.fade_distance(), 40.0);
        assert_eq!(options.initial_measure_delay_ms(), 16);
        assert_eq!(options.min_padding(), 0.0);

        let err = CarouselOptions::new(200.0)
            .with_overrides_from(|key| {
                (key == env::MIN_PADDING).then(|| "wide".to_string())
            })
            .unwrap_err();
        assert!(err.to_string().contains("min_padding"));
    }

    #[test]
    fn easing_curves_hit_endpoints() {
        for kind in EasingKind::ALL {
            assert_eq!(kind.apply(0.0), 0.0);
            assert_eq!(kind.apply(1.0), 1.0);
            assert_eq!(EasingKind::from_u8(kind.to_u8()), kind);
        }
        assert!(EasingKind::EaseOut.apply(0.5) > 0.5);
        assert!(EasingKind::EaseIn.apply(0.5) < 0.5);
    }
}
