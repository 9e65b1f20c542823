//! Layout and navigation engine for horizontal tile carousels.
//!
//! Everything in this crate is pure: a [`LayoutState`] goes in together with
//! an [`Action`], and a [`Transition`] comes out. Measuring the viewport,
//! reacting to resize events and rendering tiles belong to the host (see the
//! `tilestrip-widget` crate).

pub mod constants;
pub mod error;
pub mod layout;
pub mod options;

pub use error::{CarouselError, Result};
pub use layout::{
    Action, ActionKind, Boundary, LayoutState, Transition, ViewportMetrics,
    transition,
};
pub use options::{CarouselOptions, EasingKind};
