#![forbid(unsafe_code)]

//! The boundary to the host's scroll surface.

/// A scrollable surface the engine can command.
///
/// The host owns the physical scroll position. The engine moves it only
/// through this trait (during animated navigation), and learns about
/// movement, its own or the user's, through
/// [`ListController::on_scroll`](crate::ListController::on_scroll).
/// A programmatic move is expected to surface back through the same
/// notification path as a manual one; that echo is what keeps the window
/// updating while an animation is in flight.
pub trait ViewportHost {
    /// Move the scroll surface to `offset` (non-negative, in the same
    /// units as the row height).
    fn set_scroll_position(&mut self, offset: f64);
}
