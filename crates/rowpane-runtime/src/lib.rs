#![forbid(unsafe_code)]

//! Frame-paced state machines for rowpane.
//!
//! Nothing in this crate schedules its own callbacks or reads a hidden
//! clock: the host's frame loop passes an explicit [`web_time::Instant`]
//! into `offer`/`poll`/`tick`, which keeps every component deterministic
//! under test and single-threaded by construction.

pub mod animate;
pub mod throttle;

pub use animate::{AnimationTiming, Animator, DEFAULT_ANIMATION_DURATION, ScrollAnimation};
pub use throttle::{DEFAULT_THROTTLE_INTERVAL, ScrollThrottle};
