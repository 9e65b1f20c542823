//! Carousel controller
//!
//! Owns the `LayoutState` cell, wires the measurement lifecycle to a
//! [`ViewportHost`], runs boundary hooks after refused navigation, and
//! derives render frames for the host.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tilestrip_core::{
    Action, Boundary, CarouselOptions, LayoutState, Result, transition,
};

use crate::frame::{CarouselFrame, Side, derive_frame};
use crate::motion::TrackMotion;
use crate::viewport::{ResizeSubscription, ViewportHost};

/// Hook run with the unchanged state when navigation hits an edge.
pub type BoundaryHook = Rc<dyn Fn(&LayoutState)>;

/// Optional hooks for refused navigation.
#[derive(Clone, Default)]
pub struct BoundaryHooks {
    pub on_reach_start: Option<BoundaryHook>,
    pub on_reach_end: Option<BoundaryHook>,
}

impl BoundaryHooks {
    pub fn on_reach_start(
        mut self,
        hook: impl Fn(&LayoutState) + 'static,
    ) -> Self {
        self.on_reach_start = Some(Rc::new(hook));
        self
    }

    pub fn on_reach_end(
        mut self,
        hook: impl Fn(&LayoutState) + 'static,
    ) -> Self {
        self.on_reach_end = Some(Rc::new(hook));
        self
    }

    fn hook_for(&self, boundary: Boundary) -> Option<&BoundaryHook> {
        match boundary {
            Boundary::Start => self.on_reach_start.as_ref(),
            Boundary::End => self.on_reach_end.as_ref(),
        }
    }
}

impl fmt::Debug for BoundaryHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryHooks")
            .field("on_reach_start", &self.on_reach_start.is_some())
            .field("on_reach_end", &self.on_reach_end.is_some())
            .finish()
    }
}

/// State shared with host callbacks. Callbacks only hold a `Weak` to it.
#[derive(Debug)]
struct LayoutCell {
    state: LayoutState,
    options: CarouselOptions,
    tile_count: usize,
    /// Bumped on every attach and detach; callbacks from an older
    /// attachment compare against it and bail out.
    generation: u64,
}

impl LayoutCell {
    fn apply(&mut self, action: &Action) -> Option<Boundary> {
        let result = transition(&self.state, action);
        self.state = result.state;
        result.boundary
    }

    fn apply_width(&mut self, container_width: f32) {
        // NaN.max(0.0) is 0.0
        let width = container_width.max(0.0);
        let metrics = self.options.viewport_metrics(width, self.tile_count);
        self.apply(&Action::SetViewportWidth(metrics));
    }

    fn relayout(&mut self) {
        let width = self.state.container_width;
        self.apply_width(width);
    }
}

struct Attachment {
    host: Box<dyn ViewportHost>,
    // Held for its Drop, which deregisters the resize listener.
    _resize: ResizeSubscription,
}

/// Horizontal carousel over caller-owned tiles.
///
/// ```ignore
/// let viewport = HeadlessViewport::new(1000.0);
/// let mut carousel = Carousel::new(posters, CarouselOptions::new(200.0))?;
/// carousel.attach(viewport.clone());
/// viewport.run_deferred();
/// carousel.next();
/// let frame = carousel.frame();
/// ```
pub struct Carousel<T> {
    tiles: Vec<T>,
    cell: Rc<RefCell<LayoutCell>>,
    hooks: BoundaryHooks,
    attachment: Option<Attachment>,
}

impl<T> Carousel<T> {
    /// Create a detached carousel in the zero state.
    pub fn new(tiles: Vec<T>, options: CarouselOptions) -> Result<Self> {
        options.validate()?;
        let cell = LayoutCell {
            state: LayoutState::ZERO,
            options,
            tile_count: tiles.len(),
            generation: 0,
        };
        Ok(Self {
            tiles,
            cell: Rc::new(RefCell::new(cell)),
            hooks: BoundaryHooks::default(),
            attachment: None,
        })
    }

    pub fn with_hooks(mut self, hooks: BoundaryHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn set_hooks(&mut self, hooks: BoundaryHooks) {
        self.hooks = hooks;
    }

    pub fn state(&self) -> LayoutState {
        self.cell.borrow().state
    }

    pub fn options(&self) -> CarouselOptions {
        self.cell.borrow().options.clone()
    }

    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }

    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Start observing `host`: register the resize listener and schedule the
    /// deferred first measurement. An existing attachment is released first.
    pub fn attach(&mut self, host: impl ViewportHost + 'static) {
        self.attach_boxed(Box::new(host));
    }

    fn attach_boxed(&mut self, host: Box<dyn ViewportHost>) {
        self.detach();

        let generation = {
            let mut cell = self.cell.borrow_mut();
            cell.generation += 1;
            cell.generation
        };

        let resize = host.subscribe_resize(Rc::new(measurement(
            Rc::downgrade(&self.cell),
            generation,
        )));

        let delay = Duration::from_millis(
            self.cell.borrow().options.initial_measure_delay_ms(),
        );
        let initial = measurement(Rc::downgrade(&self.cell), generation);
        host.defer_measure(delay, Box::new(initial));

        log::debug!(
            "carousel attached (generation {generation}, first measure in {delay:?})"
        );
        self.attachment = Some(Attachment {
            host,
            _resize: resize,
        });
    }

    /// Stop observing the host. The resize listener is removed and any
    /// pending deferred measurement becomes a no-op.
    pub fn detach(&mut self) {
        if let Some(attachment) = self.attachment.take() {
            drop(attachment);
            let mut cell = self.cell.borrow_mut();
            cell.generation += 1;
            log::debug!("carousel detached (generation {})", cell.generation);
        }
    }

    /// Swap in new options. Geometry is recomputed right away from the last
    /// measured width, and an attached carousel re-attaches to its host so
    /// the listener and first measurement use the new configuration.
    pub fn reconfigure(&mut self, options: CarouselOptions) -> Result<()> {
        options.validate()?;
        {
            let mut cell = self.cell.borrow_mut();
            cell.options = options;
            cell.relayout();
        }
        if let Some(attachment) = self.attachment.take() {
            let Attachment {
                host,
                _resize: resize,
            } = attachment;
            // Release before acquiring so the host never sees two listeners.
            drop(resize);
            self.attach_boxed(host);
        }
        Ok(())
    }

    /// Replace the tile sequence. Position is re-clamped for the new length.
    pub fn set_tiles(&mut self, tiles: Vec<T>) {
        self.tiles = tiles;
        let mut cell = self.cell.borrow_mut();
        cell.tile_count = self.tiles.len();
        cell.relayout();
    }

    /// Apply `action` and run the matching boundary hook if it was refused.
    pub fn dispatch(&self, action: Action) -> LayoutState {
        let (state, boundary) = {
            let mut cell = self.cell.borrow_mut();
            let boundary = cell.apply(&action);
            (cell.state, boundary)
        };

        if let Some(boundary) = boundary {
            log::debug!(
                "{} refused at {boundary:?} (position {})",
                action.kind(),
                state.position
            );
            // The cell is no longer borrowed, so hooks may dispatch again.
            if let Some(hook) = self.hooks.hook_for(boundary) {
                hook(&state);
            }
        } else {
            log::trace!("{} -> position {}", action.kind(), state.position);
        }
        state
    }

    pub fn previous(&self) -> LayoutState {
        self.dispatch(Action::NavigatePrevious)
    }

    pub fn next(&self) -> LayoutState {
        self.dispatch(Action::NavigateNext {
            tile_count: self.tiles.len(),
        })
    }

    /// Entry point for the navigation controls.
    pub fn activate(&self, side: Side) -> LayoutState {
        self.dispatch(side.action(self.tiles.len()))
    }

    /// Measure the host now instead of waiting for a resize event.
    pub fn remeasure(&self) {
        if let Some(attachment) = &self.attachment {
            let width = attachment.host.measure();
            self.cell.borrow_mut().apply_width(width);
        }
    }

    /// Render attributes for the current state.
    pub fn frame(&self) -> CarouselFrame<'_, T> {
        let cell = self.cell.borrow();
        derive_frame(&self.tiles, &cell.state, &cell.options)
    }

    /// Default track tween configured from the current options.
    pub fn track_motion(&self) -> TrackMotion {
        TrackMotion::from_options(&self.cell.borrow().options)
    }
}

impl<T> fmt::Debug for Carousel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("tile_count", &self.tiles.len())
            .field("state", &self.state())
            .field("attached", &self.is_attached())
            .field("hooks", &self.hooks)
            .finish()
    }
}

/// Callback that feeds a measured width into the cell, as long as the
/// carousel is alive and still on the attachment `generation`.
fn measurement(
    cell: Weak<RefCell<LayoutCell>>,
    generation: u64,
) -> impl Fn(f32) + 'static {
    move |width| {
        let Some(cell) = cell.upgrade() else {
            log::debug!("viewport measurement after carousel teardown ignored");
            return;
        };
        let mut cell = cell.borrow_mut();
        if cell.generation != generation {
            log::debug!(
                "stale measurement from generation {generation} ignored (now {})",
                cell.generation
            );
            return;
        }
        cell.apply_width(width);
    }
}
