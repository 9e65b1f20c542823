//! Carousel constants
//!
//! Compiled defaults for every optional carousel setting. `CarouselOptions`
//! falls back to these when a field is left unset, so tuning happens here.

/// Geometry defaults used when laying out the tile track.
pub mod geometry {
    /// Width of the translucent overlay on each edge (px). Subtracted twice
    /// from the measured container width to get the usable width.
    pub const FADE_DISTANCE: f32 = 100.0;
    /// Minimum gap between tiles used when counting how many tiles fit (px).
    pub const MIN_PADDING: f32 = 0.0;
}

/// Visibility window around the tiles currently in view.
pub mod overscan {
    /// Hidden tiles kept alive before the first tile in view.
    pub const BEFORE: usize = 0;
    /// Hidden tiles kept alive after the last tile in view, so the next tile
    /// is already present when the track starts moving.
    pub const AFTER: usize = 1;
}

/// Measurement lifecycle defaults.
pub mod measure {
    /// Delay before the first width measurement after attaching (ms).
    /// Zero still defers to the next turn of the event loop, which lets the
    /// host finish its own layout (scrollbars appearing and the like).
    pub const INITIAL_DELAY_MS: u64 = 0;
}

/// Navigation affordance styling.
pub mod affordance {
    /// Opacity of a navigation control that cannot move any further.
    pub const DIMMED_OPACITY: f32 = 0.2;
    /// Opacity of an active navigation control.
    pub const ACTIVE_OPACITY: f32 = 1.0;
}

/// Track motion defaults.
pub mod motion {
    /// Duration of the tween toward a new track offset (ms).
    pub const SNAP_DURATION_MS: u64 = 240;
    /// Easing kind: 0=Linear, 1=EaseIn, 2=EaseOut, 3=EaseInOut.
    pub const EASING_KIND: u8 = 2;
}

/// Environment variables consulted by `CarouselOptions::with_env_overrides`.
pub mod env {
    /// Overrides the fade distance (px).
    pub const FADE_DISTANCE: &str = "TILESTRIP_FADE_DISTANCE";
    /// Overrides the minimum padding (px).
    pub const MIN_PADDING: &str = "TILESTRIP_MIN_PADDING";
    /// Overrides the initial measurement delay (ms).
    pub const INITIAL_MEASURE_DELAY_MS: &str =
        "TILESTRIP_INITIAL_MEASURE_DELAY_MS";
}
