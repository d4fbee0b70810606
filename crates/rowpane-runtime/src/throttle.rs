#![forbid(unsafe_code)]

//! Trailing-edge throttling of raw scroll notifications.
//!
//! A scroll surface can report position changes far faster than a window
//! recompute is worth doing. [`ScrollThrottle`] bounds that stream to at
//! most one delivery per interval, keeping only the most recent position
//! of each burst.
//!
//! # Design
//!
//! An explicit two-state machine instead of timer callbacks:
//!
//! - `Idle`: nothing buffered.
//! - `Pending`: a flush deadline is armed and the latest position is
//!   buffered; newer notifications overwrite the buffer without moving
//!   the deadline.
//!
//! [`ScrollThrottle::poll`] delivers the buffered position once the
//! deadline passes (trailing edge only: the first notification of a burst
//! is never forwarded early). The final event of a burst is always
//! eventually delivered as long as the host keeps polling; intermediate
//! positions are intentionally dropped.
//!
//! Teardown is [`ScrollThrottle::cancel`]: the pending flush is discarded
//! and nothing remains scheduled.

use web_time::{Duration, Instant};

/// Default delivery interval between throttled notifications.
pub const DEFAULT_THROTTLE_INTERVAL: Duration = Duration::from_millis(25);

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Pending { flush_at: Instant, latest: f64 },
}

/// Rate limiter for a stream of scroll positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThrottle {
    interval: Duration,
    state: State,
}

impl Default for ScrollThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_THROTTLE_INTERVAL)
    }
}

impl ScrollThrottle {
    /// Create a throttle with the given delivery interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: State::Idle,
        }
    }

    /// The configured delivery interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Record a raw scroll notification.
    ///
    /// The first notification while idle arms a flush one interval from
    /// `now`; notifications during a burst only replace the buffered
    /// position.
    pub fn offer(&mut self, position: f64, now: Instant) {
        match &mut self.state {
            State::Idle => {
                self.state = State::Pending {
                    flush_at: now + self.interval,
                    latest: position,
                };
                tracing::trace!(target: "rowpane.throttle", position, "flush armed");
            }
            State::Pending { latest, .. } => {
                *latest = position;
            }
        }
    }

    /// Deliver the buffered position if the flush deadline has passed.
    ///
    /// Returns the position at most once per armed interval; afterwards
    /// the throttle is idle again and the next `offer` starts a new
    /// interval.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        match self.state {
            State::Pending { flush_at, latest } if now >= flush_at => {
                self.state = State::Idle;
                tracing::trace!(target: "rowpane.throttle", position = latest, "flush delivered");
                Some(latest)
            }
            _ => None,
        }
    }

    /// When the next flush is due, if one is armed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.state {
            State::Pending { flush_at, .. } => Some(flush_at),
            State::Idle => None,
        }
    }

    /// Whether a flush is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    /// Discard any pending flush. Nothing remains scheduled afterwards.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            tracing::trace!(target: "rowpane.throttle", "pending flush discarded");
        }
        self.state = State::Idle;
    }
}
