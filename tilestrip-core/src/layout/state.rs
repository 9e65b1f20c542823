//! LayoutState: the carousel's single source of truth

use std::ops::Range;

/// Geometry and position of the carousel window.
///
/// Replaced wholesale on every transition. `position` always satisfies
/// `0 <= position <= max(0, tile_count - elements_shown)` for the tile count
/// the state was last laid out or navigated with.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutState {
    /// Index of the first fully visible tile
    pub position: usize,
    /// Last measured width of the visible viewport (px)
    pub container_width: f32,
    /// `container_width - 2 * fade_distance`; negative for narrow viewports
    pub usable_width: f32,
    /// Whole tiles that fit in `usable_width`
    pub elements_shown: usize,
    /// Pixels left after placing `elements_shown` tiles edge to edge
    pub excess_space: f32,
    /// Gap between adjacent visible tiles (px), 0 when fewer than 2 fit
    pub spacing: f32,
}

impl LayoutState {
    /// The state before any measurement: nothing fits, nothing moves.
    pub const ZERO: Self = Self {
        position: 0,
        container_width: 0.0,
        usable_width: 0.0,
        elements_shown: 0,
        excess_space: 0.0,
        spacing: 0.0,
    };

    /// Highest valid `position` for a sequence of `tile_count` tiles.
    #[inline]
    pub fn max_position(&self, tile_count: usize) -> usize {
        tile_count.saturating_sub(self.elements_shown)
    }

    /// Whether a `NavigatePrevious` would move the window.
    #[inline]
    pub fn can_go_previous(&self) -> bool {
        self.position > 0
    }

    /// Whether a `NavigateNext` would move the window.
    #[inline]
    pub fn can_go_next(&self, tile_count: usize) -> bool {
        self.position.saturating_add(self.elements_shown) < tile_count
    }

    /// Distance between the leading edges of adjacent tiles (px).
    #[inline]
    pub fn stride(&self, tile_width: f32) -> f32 {
        tile_width + self.spacing
    }

    /// Track translation for the current position (px). Tiles sit at fixed
    /// offsets on the track; only this value moves.
    #[inline]
    pub fn track_offset(&self, fade_distance: f32, tile_width: f32) -> f32 {
        fade_distance - self.stride(tile_width) * self.position as f32
    }

    /// Indices rendered for the current window, including overscan.
    /// Empty when no whole tile fits.
    pub fn visible_range(
        &self,
        tile_count: usize,
        overscan_before: usize,
        overscan_after: usize,
    ) -> Range<usize> {
        if self.elements_shown == 0 {
            return 0..0;
        }
        let start = self.position.saturating_sub(overscan_before);
        let end = self
            .position
            .saturating_add(self.elements_shown)
            .saturating_add(overscan_after)
            .min(tile_count);
        start.min(end)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(position: usize, elements_shown: usize) -> LayoutState {
        LayoutState {
            position,
            elements_shown,
            ..LayoutState::ZERO
        }
    }

    #[test]
    fn zero_state_matches_default() {
        assert_eq!(LayoutState::ZERO, LayoutState::default());
    }

    #[test]
    fn visible_range_overscans_trailing_edge() {
        let state = shown(2, 3);
        // position - 1 < i < position + shown + 1
        assert_eq!(state.visible_range(10, 0, 1), 2..6);
        assert_eq!(state.visible_range(10, 1, 1), 1..6);
        assert_eq!(state.visible_range(5, 0, 1), 2..5);
    }

    #[test]
    fn visible_range_empty_when_nothing_fits() {
        assert_eq!(shown(0, 0).visible_range(5, 0, 1), 0..0);
        assert_eq!(shown(0, 3).visible_range(0, 0, 1), 0..0);
    }

    #[test]
    fn next_blocked_when_room_exceeds_tiles() {
        let state = shown(0, 4);
        assert!(!state.can_go_next(2));
        assert_eq!(state.max_position(2), 0);
    }

    #[test]
    fn track_offset_moves_by_stride() {
        let state = LayoutState {
            position: 2,
            spacing: 100.0,
            ..LayoutState::ZERO
        };
        assert_eq!(state.track_offset(100.0, 200.0), 100.0 - 300.0 * 2.0);
    }
}
