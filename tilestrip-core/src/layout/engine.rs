//! Pure state transitions for the carousel layout

use tracing::{debug, trace};

use super::{Action, Boundary, LayoutState, ViewportMetrics};

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use]
pub struct Transition {
    /// The next state. Equal to the previous one when navigation was refused.
    pub state: LayoutState,
    /// Set when a navigation attempt hit an edge of the sequence.
    pub boundary: Option<Boundary>,
}

impl Transition {
    fn moved(state: LayoutState) -> Self {
        Self {
            state,
            boundary: None,
        }
    }

    fn refused(state: LayoutState, boundary: Boundary) -> Self {
        Self {
            state,
            boundary: Some(boundary),
        }
    }
}

/// Apply `action` to `state`.
///
/// Total over every action: degenerate geometry collapses to zero tiles
/// shown instead of failing. Navigation at an edge returns the unchanged
/// state plus a [`Boundary`] so the caller can run its boundary hook.
pub fn transition(state: &LayoutState, action: &Action) -> Transition {
    let result = match *action {
        Action::NavigatePrevious => {
            if state.can_go_previous() {
                Transition::moved(LayoutState {
                    position: state.position - 1,
                    ..*state
                })
            } else {
                Transition::refused(*state, Boundary::Start)
            }
        }
        Action::NavigateNext { tile_count } => {
            // Equivalent to `position < tile_count - elements_shown` with a
            // signed right side.
            if state.can_go_next(tile_count) {
                Transition::moved(LayoutState {
                    position: state.position + 1,
                    ..*state
                })
            } else {
                Transition::refused(*state, Boundary::End)
            }
        }
        Action::SetViewportWidth(metrics) => {
            Transition::moved(layout_viewport(state, &metrics))
        }
    };

    trace!(
        kind = %action.kind(),
        position = result.state.position,
        elements_shown = result.state.elements_shown,
        boundary = ?result.boundary,
        "carousel transition"
    );
    result
}

fn layout_viewport(
    state: &LayoutState,
    metrics: &ViewportMetrics,
) -> LayoutState {
    let usable_width = metrics.container_width - 2.0 * metrics.fade_distance;
    let elements_shown = fitting_tiles(
        usable_width,
        metrics.tile_width + metrics.min_padding,
    );
    if elements_shown == 0 {
        debug!(
            container_width = metrics.container_width,
            usable_width, "viewport too narrow for a single tile"
        );
    }

    let excess_space =
        usable_width - metrics.tile_width * elements_shown as f32;
    let spacing = if elements_shown < 2 {
        0.0
    } else {
        excess_space / (elements_shown - 1) as f32
    };

    let mut next = LayoutState {
        position: state.position,
        container_width: metrics.container_width,
        usable_width,
        elements_shown,
        excess_space,
        spacing,
    };
    // Re-clamp immediately so a shrinking viewport never leaves the window
    // hanging past the end of the sequence.
    next.position = next.position.min(next.max_position(metrics.tile_count));
    next
}

/// `floor(usable / stride)`, with negative and non-finite results mapped
/// to zero.
fn fitting_tiles(usable_width: f32, stride: f32) -> usize {
    if stride.is_nan() || stride <= 0.0 {
        return 0;
    }
    let raw = (usable_width / stride).floor();
    if raw.is_finite() && raw > 0.0 {
        raw as usize
    } else {
        0
    }
}
