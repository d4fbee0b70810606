#![forbid(unsafe_code)]

//! The windowing computation: scroll offset to materialized index range.
//!
//! Given a scroll offset, a uniform row height, and a viewport height,
//! [`compute_window`] returns the half-open index range `[start, end)` of
//! rows that must exist for scrolling to stay gap-free until the next
//! recompute. The window holds a buffer of rows on *both* sides of the
//! anchor (the row at the viewport's top edge), sized so that scrolling a
//! full viewport in either direction stays covered.
//!
//! # Design
//!
//! The computation is a total pure function of its arguments. It knows
//! nothing about the actual collection length: a window may extend past
//! the end of the data, and [`Window::clamp`] truncates it at slice time.
//! Keeping length out of the function means it can be exercised
//! exhaustively without a row source, and a stale window is never an
//! error, only a shorter slice.
//!
//! # Invariants
//!
//! - `start <= end` for every input.
//! - `start` never underflows; offsets below zero behave like zero.
//! - Increasing the scroll offset never moves `start` or `end` backwards.

use std::ops::Range;

/// How many viewports' worth of rows to keep on each side of the anchor.
///
/// A factor of 2 means the window holds twice the rows the viewport can
/// show, above and below, so a one-viewport scroll in either direction
/// never exposes an unrendered gap before the next recompute lands.
pub const DEFAULT_BUFFER_FACTOR: usize = 2;

/// A half-open range `[start, end)` of row indices to materialize.
///
/// `end` may exceed the collection length; [`Window::clamp`] truncates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    /// First materialized row index (inclusive).
    pub start: usize,
    /// One past the last materialized row index (exclusive).
    pub end: usize,
}

impl Window {
    /// Number of rows the window spans, before clamping.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the window spans no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Clamp the window against a collection of `len` rows.
    ///
    /// Always yields a valid slice range: out-of-bounds ends truncate
    /// silently, an empty collection yields `0..0`.
    #[must_use]
    pub fn clamp(&self, len: usize) -> Range<usize> {
        self.start.min(len)..self.end.min(len)
    }

    /// Whether `index` falls inside the (unclamped) window.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Rows needed to fill one viewport: `ceil(viewport_height / row_height)`.
///
/// `row_height` must be positive (enforced at configuration time, not
/// here).
#[must_use]
pub fn rows_per_viewport(row_height: f64, viewport_height: f64) -> usize {
    (viewport_height.max(0.0) / row_height).ceil() as usize
}

/// Index of the row aligned with the viewport's top edge.
#[must_use]
pub fn anchor_row(scroll_offset: f64, row_height: f64) -> usize {
    (scroll_offset.max(0.0) / row_height).floor() as usize
}

/// Compute the window with the default buffer factor.
///
/// See [`compute_window_with`] for the arithmetic.
#[must_use]
pub fn compute_window(scroll_offset: f64, row_height: f64, viewport_height: f64) -> Window {
    compute_window_with(
        scroll_offset,
        row_height,
        viewport_height,
        DEFAULT_BUFFER_FACTOR,
    )
}

/// Compute the window with an explicit buffer factor.
///
/// - `anchor = floor(scroll_offset / row_height)`
/// - `buffer = ceil(viewport_height / row_height) * buffer_factor`
/// - result: `[anchor - buffer, anchor + buffer)`, start clamped at zero
///
/// Offsets past the physical scroll extent are accepted as-is; the
/// resulting `end` simply truncates at slice time.
#[must_use]
pub fn compute_window_with(
    scroll_offset: f64,
    row_height: f64,
    viewport_height: f64,
    buffer_factor: usize,
) -> Window {
    let buffer = rows_per_viewport(row_height, viewport_height).saturating_mul(buffer_factor);
    let anchor = anchor_row(scroll_offset, row_height);

    Window {
        start: anchor.saturating_sub(buffer),
        end: anchor.saturating_add(buffer),
    }
}
