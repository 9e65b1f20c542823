//! Render attributes derived from the layout state
//!
//! Nothing here is stored: a [`CarouselFrame`] is recomputed from the
//! current `LayoutState` whenever the host renders.

use tilestrip_core::constants::affordance::ACTIVE_OPACITY;
use tilestrip_core::{Action, CarouselOptions, LayoutState};

/// Which end of the carousel a control or overlay belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Leading edge, moves the window toward the first tile
    Previous,
    /// Trailing edge, moves the window toward the last tile
    Next,
}

impl Side {
    /// Navigation action triggered by activating this side.
    pub fn action(self, tile_count: usize) -> Action {
        match self {
            Side::Previous => Action::NavigatePrevious,
            Side::Next => Action::NavigateNext { tile_count },
        }
    }
}

/// Per-tile render attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileAttributes {
    pub index: usize,
    /// Whether the tile should be rendered at all (window plus overscan)
    pub visible: bool,
    /// Gap after this tile; zero after the last tile
    pub trailing_spacing: f32,
}

/// Track-level style. Tiles sit at fixed offsets on the track and the whole
/// track is translated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackStyle {
    pub translate_x: f32,
    pub spacing: f32,
}

/// Navigation control descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affordance {
    pub side: Side,
    /// Activating would only hit the boundary
    pub disabled: bool,
    pub opacity: f32,
    /// Width of the hit zone, equal to the fade distance
    pub hit_width: f32,
}

/// Translucent overlay hinting that more tiles lie beyond an edge. The
/// gradient runs from opaque at the edge to transparent toward the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeOverlay {
    pub side: Side,
    pub width: f32,
}

/// Everything the renderer needs for one pass.
#[derive(Debug)]
pub struct CarouselFrame<'a, T> {
    pub track: TrackStyle,
    pub tiles: Vec<(&'a T, TileAttributes)>,
    pub previous: Affordance,
    pub next: Affordance,
    pub overlays: [FadeOverlay; 2],
}

impl<'a, T> CarouselFrame<'a, T> {
    /// Tiles flagged visible, in sequence order.
    pub fn visible_tiles(
        &self,
    ) -> impl Iterator<Item = &(&'a T, TileAttributes)> + '_ {
        self.tiles.iter().filter(|(_, attrs)| attrs.visible)
    }

    pub fn affordance(&self, side: Side) -> &Affordance {
        match side {
            Side::Previous => &self.previous,
            Side::Next => &self.next,
        }
    }
}

/// Derive the frame for `tiles` under `state`.
pub fn derive_frame<'a, T>(
    tiles: &'a [T],
    state: &LayoutState,
    options: &CarouselOptions,
) -> CarouselFrame<'a, T> {
    let tile_count = tiles.len();
    let window = state.visible_range(
        tile_count,
        options.overscan_before(),
        options.overscan_after(),
    );

    let attributes = tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| {
            let attrs = TileAttributes {
                index,
                visible: window.contains(&index),
                trailing_spacing: if index + 1 < tile_count {
                    state.spacing
                } else {
                    0.0
                },
            };
            (tile, attrs)
        })
        .collect();

    let fade_distance = options.fade_distance();
    CarouselFrame {
        track: TrackStyle {
            translate_x: state
                .track_offset(fade_distance, options.element_width),
            spacing: state.spacing,
        },
        tiles: attributes,
        previous: affordance(
            Side::Previous,
            !state.can_go_previous(),
            options,
        ),
        next: affordance(Side::Next, !state.can_go_next(tile_count), options),
        overlays: [
            FadeOverlay {
                side: Side::Previous,
                width: fade_distance,
            },
            FadeOverlay {
                side: Side::Next,
                width: fade_distance,
            },
        ],
    }
}

fn affordance(
    side: Side,
    disabled: bool,
    options: &CarouselOptions,
) -> Affordance {
    Affordance {
        side,
        disabled,
        opacity: if disabled {
            options.dimmed_opacity()
        } else {
            ACTIVE_OPACITY
        },
        hit_width: options.fade_distance(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilestrip_core::transition;

    fn options() -> CarouselOptions {
        CarouselOptions::new(200.0)
            .with_fade_distance(100.0)
            .with_min_padding(20.0)
    }

    fn state_at(
        container_width: f32,
        tiles: usize,
        position: usize,
    ) -> LayoutState {
        let opts = options();
        let laid_out = transition(
            &LayoutState::ZERO,
            &Action::SetViewportWidth(
                opts.viewport_metrics(container_width, tiles),
            ),
        )
        .state;
        LayoutState {
            position,
            ..laid_out
        }
    }

    #[test]
    fn window_plus_trailing_overscan_is_visible() {
        let tiles: Vec<u32> = (0..8).collect();
        let state = state_at(1000.0, tiles.len(), 2);
        let frame = derive_frame(&tiles, &state, &options());

        let visible: Vec<usize> =
            frame.visible_tiles().map(|(_, a)| a.index).collect();
        assert_eq!(visible, vec![2, 3, 4, 5]);
    }

    #[test]
    fn spacing_trails_every_tile_but_the_last() {
        let tiles = ["a", "b", "c"];
        let state = state_at(1000.0, tiles.len(), 0);
        let frame = derive_frame(&tiles, &state, &options());

        let gaps: Vec<f32> =
            frame.tiles.iter().map(|(_, a)| a.trailing_spacing).collect();
        assert_eq!(gaps, vec![100.0, 100.0, 0.0]);
    }

    #[test]
    fn track_translation_is_uniform() {
        let tiles: Vec<u32> = (0..8).collect();
        let state = state_at(1000.0, tiles.len(), 3);
        let frame = derive_frame(&tiles, &state, &options());
        assert_eq!(frame.track.translate_x, 100.0 - 300.0 * 3.0);
        assert_eq!(frame.track.spacing, 100.0);
    }

    #[test]
    fn affordances_dim_at_boundaries() {
        let tiles: Vec<u32> = (0..5).collect();
        let opts = options();

        let start = derive_frame(&tiles, &state_at(1000.0, 5, 0), &opts);
        assert!(start.previous.disabled);
        assert_eq!(start.previous.opacity, 0.2);
        assert!(!start.next.disabled);
        assert_eq!(start.next.opacity, 1.0);

        let end = derive_frame(&tiles, &state_at(1000.0, 5, 2), &opts);
        assert!(!end.previous.disabled);
        assert!(end.affordance(Side::Next).disabled);
        assert_eq!(end.next.hit_width, 100.0);
    }

    #[test]
    fn degenerate_viewport_renders_nothing() {
        let tiles: Vec<u32> = (0..5).collect();
        let state = state_at(150.0, tiles.len(), 0);
        let frame = derive_frame(&tiles, &state, &options());
        assert_eq!(frame.visible_tiles().count(), 0);
        assert!(frame.track.translate_x.is_finite());
    }

    #[test]
    fn side_maps_to_navigation() {
        assert_eq!(Side::Previous.action(4), Action::NavigatePrevious);
        assert_eq!(
            Side::Next.action(4),
            Action::NavigateNext { tile_count: 4 }
        );
    }
}
