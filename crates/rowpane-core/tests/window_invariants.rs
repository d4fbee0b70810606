//! Property-based invariant tests for the windowing computation.
//!
//! These must hold for any non-degenerate input:
//!
//! 1. `start <= end`, always.
//! 2. Increasing the scroll offset never moves `start` or `end` backwards.
//! 3. The computation is referentially transparent.
//! 4. Clamping yields a valid slice of at most `len` rows and never panics.
//! 5. The anchor row is always inside `[start, end]`.

use proptest::prelude::*;
use rowpane_core::window::{anchor_row, compute_window_with};

fn row_heights() -> impl Strategy<Value = f64> {
    0.5f64..500.0
}

fn viewport_heights() -> impl Strategy<Value = f64> {
    0.0f64..5000.0
}

fn offsets() -> impl Strategy<Value = f64> {
    0.0f64..1.0e7
}

proptest! {
    #[test]
    fn start_never_exceeds_end(
        offset in offsets(),
        row_height in row_heights(),
        viewport_height in viewport_heights(),
        factor in 1usize..5,
    ) {
        let w = compute_window_with(offset, row_height, viewport_height, factor);
        prop_assert!(w.start <= w.end);
    }

    #[test]
    fn window_is_monotonic_in_offset(
        offset in offsets(),
        delta in 0.0f64..1.0e6,
        row_height in row_heights(),
        viewport_height in viewport_heights(),
    ) {
        let before = compute_window_with(offset, row_height, viewport_height, 2);
        let after = compute_window_with(offset + delta, row_height, viewport_height, 2);
        prop_assert!(after.start >= before.start);
        prop_assert!(after.end >= before.end);
    }

    #[test]
    fn recomputation_is_idempotent(
        offset in offsets(),
        row_height in row_heights(),
        viewport_height in viewport_heights(),
    ) {
        let first = compute_window_with(offset, row_height, viewport_height, 2);
        let second = compute_window_with(offset, row_height, viewport_height, 2);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn clamped_slice_fits_the_collection(
        offset in offsets(),
        row_height in row_heights(),
        viewport_height in viewport_heights(),
        len in 0usize..200_000,
    ) {
        let range = compute_window_with(offset, row_height, viewport_height, 2).clamp(len);
        prop_assert!(range.start <= range.end);
        prop_assert!(range.end <= len);
        // Slicing a real collection with the clamped range cannot panic.
        let rows = vec![0u8; len.min(4096)];
        let clamped = compute_window_with(offset, row_height, viewport_height, 2)
            .clamp(rows.len());
        prop_assert_eq!(rows[clamped.clone()].len(), clamped.len());
    }

    #[test]
    fn anchor_stays_inside_the_window(
        offset in offsets(),
        row_height in row_heights(),
        viewport_height in 1.0f64..5000.0,
    ) {
        let w = compute_window_with(offset, row_height, viewport_height, 2);
        let anchor = anchor_row(offset, row_height);
        prop_assert!(anchor >= w.start);
        prop_assert!(anchor <= w.end);
    }
}
