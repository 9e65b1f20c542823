//! Carousel layout state machine
//!
//! The engine is a reducer: [`transition`] takes the previous
//! [`LayoutState`] and an [`Action`] and returns the next state together with
//! an optional [`Boundary`] notice. Boundary hooks are run by whoever owns
//! the state, never from inside the transition.

mod action;
mod engine;
mod state;

pub use action::{Action, ActionKind, Boundary, ViewportMetrics};
pub use engine::{Transition, transition};
pub use state::LayoutState;
