#![forbid(unsafe_code)]

//! The list controller: composition of store, throttle, animator, and
//! windowing math.
//!
//! # Data flow
//!
//! Inbound, the host forwards every raw scroll notification to
//! [`ListController::on_scroll`]; the trailing-edge throttle collapses
//! bursts, and [`ListController::tick`] recomputes the window from each
//! delivered position. Outbound, navigation commands start an eased
//! animation whose per-frame positions are both recorded as the
//! controller's scroll state and pushed to the [`ViewportHost`]; the
//! host's own notification for that programmatic move then re-enters the
//! inbound path, so an animated scroll produces a stream of throttled
//! window recomputations while it runs, not a single one at the end.
//!
//! Both re-entry sources (throttle flush, animation frame) are drained
//! inside `tick` on the host's frame scheduler; when they interleave, the
//! later write to the scroll offset wins.

use std::ops::Range;

use rowpane_core::{ViewportConfig, Window};
use rowpane_runtime::{AnimationTiming, Animator, ScrollThrottle};
use web_time::{Duration, Instant};

use crate::host::ViewportHost;
use crate::store::RowStore;

/// What one frame of [`ListController::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    /// The materialized window changed; the host should re-render.
    pub window_changed: bool,
    /// Work remains (animation in flight or flush pending); the host
    /// should schedule another frame.
    pub needs_frame: bool,
}

/// One row of the currently visible slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleRow<'a, T> {
    /// Absolute index in the row collection.
    pub index: usize,
    /// Vertical offset of the row, `index * row_height`.
    pub offset: f64,
    /// The row record.
    pub row: &'a T,
}

/// Windowed-list state machine for one viewport.
///
/// Owns the scroll state, the current window, and the navigation
/// animation; lives as long as the viewport does. The host drives it with
/// `on_scroll` for every raw notification and `tick` once per frame.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    rows: RowStore<T>,
    config: ViewportConfig,
    throttle: ScrollThrottle,
    animator: Animator,
    scroll_offset: f64,
    window: Window,
}

impl<T> ListController<T> {
    /// Controller over an empty owned row collection.
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self::with_store(RowStore::default(), config)
    }

    /// Controller owning the given rows.
    #[must_use]
    pub fn with_rows(rows: Vec<T>, config: ViewportConfig) -> Self {
        Self::with_store(RowStore::owned(rows), config)
    }

    /// Controller over host-owned rows of which only the count is known.
    #[must_use]
    pub fn external(len: usize, config: ViewportConfig) -> Self {
        Self::with_store(RowStore::external(len), config)
    }

    fn with_store(rows: RowStore<T>, config: ViewportConfig) -> Self {
        Self {
            rows,
            config,
            throttle: ScrollThrottle::default(),
            animator: Animator::default(),
            scroll_offset: 0.0,
            window: config.window_at(0.0),
        }
    }

    /// Override the throttle interval (default 25ms).
    #[must_use]
    pub fn with_throttle_interval(mut self, interval: Duration) -> Self {
        self.throttle = ScrollThrottle::new(interval);
        self
    }

    /// Override the navigation animation timing (default 800ms, quartic
    /// ease-out).
    #[must_use]
    pub fn with_animation_timing(mut self, timing: AnimationTiming) -> Self {
        self.animator = Animator::new(timing);
        self
    }

    // -----------------------------------------------------------------
    // Inbound: scroll notifications and the frame drive
    // -----------------------------------------------------------------

    /// Record a raw scroll notification from the viewport host.
    ///
    /// Positions stream through the trailing-edge throttle; only the
    /// most recent one per interval reaches the window recompute.
    pub fn on_scroll(&mut self, position: f64, now: Instant) {
        self.throttle.offer(position, now);
    }

    /// Advance one cooperative frame.
    ///
    /// Drains both asynchronous sources in a fixed order: the animation
    /// frame first (recording the position and commanding `host`), then
    /// the throttle flush (recomputing the window from the delivered
    /// position). The host keeps scheduling frames while
    /// [`Tick::needs_frame`] is set.
    pub fn tick(&mut self, host: &mut dyn ViewportHost, now: Instant) -> Tick {
        let mut window_changed = false;

        if let Some(position) = self.animator.tick(now) {
            self.scroll_offset = position;
            host.set_scroll_position(position);
        }

        if let Some(position) = self.throttle.poll(now) {
            self.scroll_offset = position;
            window_changed = self.recompute_window();
        }

        Tick {
            window_changed,
            needs_frame: self.animator.is_animating() || self.throttle.is_pending(),
        }
    }

    // -----------------------------------------------------------------
    // Outbound: navigation and growth
    // -----------------------------------------------------------------

    /// Animate to the top of the list.
    pub fn scroll_to_start(&mut self, now: Instant) {
        self.animator.start(self.scroll_offset, 0.0, now);
    }

    /// Animate to the bottom of the list.
    ///
    /// The target is the content extent for the row count *at this
    /// call*; rows appended later do not retarget an animation already
    /// in flight.
    pub fn scroll_to_end(&mut self, now: Instant) {
        let target = self.content_extent();
        self.animator.start(self.scroll_offset, target, now);
    }

    /// Animate until the row at `index` sits at the top of the viewport.
    pub fn scroll_to_row(&mut self, index: usize, now: Instant) {
        let target = self.config.row_offset(index);
        self.animator.start(self.scroll_offset, target, now);
    }

    /// Append a row at the tail and bring it into view.
    ///
    /// Appending always ends with a scroll-to-end animation: growing the
    /// list means "show me what I just added". Ignored (with a debug log)
    /// for external storage, where the host appends on its side and calls
    /// [`ListController::set_external_len`].
    pub fn append(&mut self, row: T, now: Instant) {
        if !self.rows.push(row) {
            tracing::debug!(
                target: "rowpane.controller",
                "append ignored: storage is external"
            );
            return;
        }
        tracing::debug!(target: "rowpane.controller", rows = self.rows.len(), "row appended");
        self.recompute_window();
        self.scroll_to_end(now);
    }

    /// Report a new row count for host-owned storage.
    pub fn set_external_len(&mut self, len: usize) {
        if self.rows.set_external_len(len) {
            self.recompute_window();
        }
    }

    /// Replace the viewport configuration.
    ///
    /// The window (and with it the lookahead buffer) is recomputed from
    /// the new dimensions immediately; nothing from the old config is
    /// cached.
    pub fn set_config(&mut self, config: ViewportConfig) {
        self.config = config;
        self.recompute_window();
    }

    /// Cancel pending throttle and animation work.
    ///
    /// Call when the viewport is torn down; afterwards no flush or frame
    /// remains scheduled.
    pub fn detach(&mut self) {
        self.throttle.cancel();
        self.animator.cancel();
        tracing::debug!(target: "rowpane.controller", "detached");
    }

    // -----------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------

    /// The currently materialized slice, with absolute indices and
    /// vertical offsets.
    ///
    /// Empty for external storage; use [`ListController::visible_range`]
    /// there and slice host-side.
    pub fn visible(&self) -> impl Iterator<Item = VisibleRow<'_, T>> {
        let range = self.visible_range();
        let first = range.start;
        let row_height = self.config.row_height();
        self.rows
            .slice(range)
            .iter()
            .enumerate()
            .map(move |(i, row)| VisibleRow {
                index: first + i,
                offset: (first + i) as f64 * row_height,
                row,
            })
    }

    /// The current window clamped to the collection, as a slice range.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        self.window.clamp(self.rows.len())
    }

    /// The current (unclamped) window.
    #[must_use]
    pub fn window(&self) -> Window {
        self.window
    }

    /// The controller's view of the scroll position.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    /// Total content height, for sizing the host's scroll track.
    #[must_use]
    pub fn content_extent(&self) -> f64 {
        self.config.content_extent(self.rows.len())
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `index` (owned storage only).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(index)
    }

    /// The active viewport configuration.
    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    /// Whether a navigation animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    fn recompute_window(&mut self) -> bool {
        let next = self.config.window_at(self.scroll_offset);
        if next == self.window {
            return false;
        }
        tracing::debug!(
            target: "rowpane.controller",
            start = next.start,
            end = next.end,
            offset = self.scroll_offset,
            "window recomputed"
        );
        self.window = next;
        true
    }
}
