//! Carousel controller for `tilestrip-core`.
//!
//! [`Carousel`] holds the layout state for a sequence of caller-owned tiles,
//! keeps it in sync with a [`ViewportHost`] through resize notifications and a
//! deferred first measurement, and hands the renderer a [`CarouselFrame`]
//! with per-tile visibility, spacing and the track translation.

pub mod controller;
pub mod frame;
pub mod motion;
pub mod viewport;

pub use controller::{BoundaryHook, BoundaryHooks, Carousel};
pub use frame::{
    Affordance, CarouselFrame, FadeOverlay, Side, TileAttributes, TrackStyle,
    derive_frame,
};
pub use motion::TrackMotion;
pub use viewport::{
    DeferredMeasure, HeadlessViewport, ResizeListener, ResizeSubscription,
    TokioViewport, ViewportHost,
};

pub use tilestrip_core;
