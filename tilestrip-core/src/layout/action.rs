//! Actions accepted by the layout engine

use std::fmt;
use std::str::FromStr;

use crate::error::CarouselError;

/// Inputs needed to recompute geometry after the viewport was measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    /// Measured width of the visible viewport (px)
    pub container_width: f32,
    /// Width of each edge fade overlay (px)
    pub fade_distance: f32,
    /// Fixed tile width (px)
    pub tile_width: f32,
    /// Minimum gap used when counting how many tiles fit (px)
    pub min_padding: f32,
    /// Length of the tile sequence, used to re-clamp `position`
    pub tile_count: usize,
}

/// Closed set of layout actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Shift the window one tile toward the start.
    NavigatePrevious,
    /// Shift the window one tile toward the end.
    NavigateNext {
        /// Length of the tile sequence
        tile_count: usize,
    },
    /// Recompute geometry for a freshly measured viewport.
    SetViewportWidth(ViewportMetrics),
}

impl Action {
    /// Tag of this action, without its payload.
    pub fn kind(&self) -> ActionKind {
        match self {
            Self::NavigatePrevious => ActionKind::NavigatePrevious,
            Self::NavigateNext { .. } => ActionKind::NavigateNext,
            Self::SetViewportWidth(_) => ActionKind::SetViewportWidth,
        }
    }
}

/// Payload-free action tags, for logs and host command bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// See [`Action::NavigatePrevious`]
    NavigatePrevious,
    /// See [`Action::NavigateNext`]
    NavigateNext,
    /// See [`Action::SetViewportWidth`]
    SetViewportWidth,
}

impl ActionKind {
    /// Every action kind the engine handles.
    pub const ALL: [Self; 3] = [
        Self::NavigatePrevious,
        Self::NavigateNext,
        Self::SetViewportWidth,
    ];

    /// Canonical command name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NavigatePrevious => "previous",
            Self::NavigateNext => "next",
            Self::SetViewportWidth => "set-viewport-width",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "previous" | "prev" => Ok(Self::NavigatePrevious),
            "next" => Ok(Self::NavigateNext),
            "set-viewport-width" | "resize" => Ok(Self::SetViewportWidth),
            other => Err(CarouselError::UnknownAction(other.to_string())),
        }
    }
}

/// Edge of the sequence a refused navigation ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// `NavigatePrevious` at position 0
    Start,
    /// `NavigateNext` with the last tile already in view
    End,
}
