//! Time-based tween for the track translation and tile spacing
//!
//! Hosts with their own animation engine can ignore this and feed
//! `TrackStyle` targets straight into it.

use std::time::{Duration, Instant};

use tilestrip_core::{CarouselOptions, EasingKind};

use crate::frame::TrackStyle;

#[derive(Debug, Clone, Copy)]
struct Tween {
    start: f32,
    target: f32,
    started_at: Instant,
}

impl Tween {
    fn settled(value: f32, now: Instant) -> Self {
        Self {
            start: value,
            target: value,
            started_at: now,
        }
    }

    fn value_at(&self, t: f32) -> f32 {
        self.start + (self.target - self.start) * t
    }
}

/// Animates the track toward the latest [`TrackStyle`] target.
#[derive(Debug, Clone)]
pub struct TrackMotion {
    translate: Tween,
    spacing: Tween,
    duration: Duration,
    easing: EasingKind,
    active: bool,
    placed: bool,
}

impl TrackMotion {
    pub fn new(duration_ms: u64, easing: EasingKind) -> Self {
        let now = Instant::now();
        Self {
            translate: Tween::settled(0.0, now),
            spacing: Tween::settled(0.0, now),
            duration: Duration::from_millis(duration_ms),
            easing,
            active: false,
            placed: false,
        }
    }

    pub fn from_options(options: &CarouselOptions) -> Self {
        Self::new(options.snap_duration_ms(), options.easing())
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Style the track is heading toward.
    pub fn target(&self) -> TrackStyle {
        TrackStyle {
            translate_x: self.translate.target,
            spacing: self.spacing.target,
        }
    }

    /// Place the track at `style` without animating.
    pub fn jump_to(&mut self, style: TrackStyle) {
        let now = Instant::now();
        self.translate = Tween::settled(style.translate_x, now);
        self.spacing = Tween::settled(style.spacing, now);
        self.active = false;
        self.placed = true;
    }

    pub fn retarget(&mut self, target: TrackStyle) {
        self.retarget_at(target, Instant::now());
    }

    /// Start moving toward `target` from wherever the track is at `now`.
    /// The first target ever received is applied without animation.
    pub fn retarget_at(&mut self, target: TrackStyle, now: Instant) {
        if !self.placed {
            self.translate = Tween::settled(target.translate_x, now);
            self.spacing = Tween::settled(target.spacing, now);
            self.placed = true;
            return;
        }
        if target == self.target() {
            return;
        }
        let current = self.sample_at(now);
        self.translate = Tween {
            start: current.translate_x,
            target: target.translate_x,
            started_at: now,
        };
        self.spacing = Tween {
            start: current.spacing,
            target: target.spacing,
            started_at: now,
        };
        self.active = !self.duration.is_zero();
        if !self.active {
            self.translate = Tween::settled(target.translate_x, now);
            self.spacing = Tween::settled(target.spacing, now);
        }
    }

    /// Returns Some(style) while animating (the last call yields the exact
    /// target), or None when idle.
    pub fn tick(&mut self) -> Option<TrackStyle> {
        if !self.active {
            return None;
        }
        Some(self.sample_at(Instant::now()))
    }

    /// Style at `now`. Finishes the animation once its duration elapsed.
    pub fn sample_at(&mut self, now: Instant) -> TrackStyle {
        if !self.active {
            return self.target();
        }
        let elapsed = now.saturating_duration_since(self.translate.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return self.target();
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        TrackStyle {
            translate_x: self.translate.value_at(eased),
            spacing: self.spacing.value_at(eased),
        }
    }

    /// Stop where the track is right now.
    pub fn cancel(&mut self) {
        let current = self.sample_at(Instant::now());
        self.jump_to(current);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(translate_x: f32, spacing: f32) -> TrackStyle {
        TrackStyle {
            translate_x,
            spacing,
        }
    }

    #[test]
    fn first_target_is_placed_without_animation() {
        let mut motion = TrackMotion::new(200, EasingKind::Linear);
        motion.retarget(style(100.0, 40.0));
        assert!(!motion.is_active());
        assert_eq!(motion.tick(), None);
        assert_eq!(motion.target(), style(100.0, 40.0));
    }

    #[test]
    fn linear_tween_interpolates_both_channels() {
        let mut motion = TrackMotion::new(200, EasingKind::Linear);
        let t0 = Instant::now();
        motion.retarget_at(style(100.0, 0.0), t0);
        motion.retarget_at(style(-200.0, 100.0), t0);
        assert!(motion.is_active());

        let mid = motion.sample_at(t0 + Duration::from_millis(100));
        assert!((mid.translate_x - -50.0).abs() < 0.01);
        assert!((mid.spacing - 50.0).abs() < 0.01);

        let done = motion.sample_at(t0 + Duration::from_millis(250));
        assert_eq!(done, style(-200.0, 100.0));
        assert!(!motion.is_active());
    }

    #[test]
    fn retarget_mid_flight_starts_from_current_value() {
        let mut motion = TrackMotion::new(100, EasingKind::Linear);
        let t0 = Instant::now();
        motion.retarget_at(style(0.0, 0.0), t0);
        motion.retarget_at(style(100.0, 0.0), t0);

        let t1 = t0 + Duration::from_millis(50);
        motion.retarget_at(style(0.0, 0.0), t1);
        let start = motion.sample_at(t1);
        assert!((start.translate_x - 50.0).abs() < 0.01);
    }

    #[test]
    fn zero_duration_snaps() {
        let mut motion = TrackMotion::new(0, EasingKind::EaseOut);
        motion.jump_to(style(0.0, 0.0));
        motion.retarget(style(300.0, 10.0));
        assert!(!motion.is_active());
        assert_eq!(motion.tick(), None);
        assert_eq!(motion.target(), style(300.0, 10.0));
    }

    #[test]
    fn cancel_freezes_in_place() {
        let mut motion = TrackMotion::new(10_000, EasingKind::Linear);
        motion.jump_to(style(0.0, 0.0));
        motion.retarget(style(1000.0, 0.0));
        motion.cancel();
        assert!(!motion.is_active());
        assert!(motion.target().translate_x < 1000.0);
    }
}
