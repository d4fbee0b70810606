#![forbid(unsafe_code)]

//! Windowed-row virtualization for very large ordered collections.
//!
//! `rowpane` decides which contiguous slice of a row collection has to be
//! materialized for a fixed-height scrollable viewport, throttles the
//! host's raw scroll notifications, and drives smooth programmatic
//! navigation (scroll to start/end/row, grow-on-append).
//!
//! The engine renders nothing and owns no scroll surface. The host brings
//! both and connects them through two seams:
//!
//! - [`ViewportHost`]: the engine's outbound commands to the real scroll
//!   surface.
//! - [`ListController::on_scroll`] / [`ListController::tick`]: the
//!   inbound notification stream and the per-frame drive.
//!
//! See the crate-level README for a usage sketch; the demo crate runs a
//! complete scripted session.

pub mod controller;
pub mod host;
pub mod store;

pub use controller::{ListController, Tick, VisibleRow};
pub use host::ViewportHost;
pub use store::RowStore;

pub use rowpane_core::{
    ConfigError, DEFAULT_BUFFER_FACTOR, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, Easing, Row,
    RowId, ViewportConfig, Window, compute_window, compute_window_with,
};
pub use rowpane_runtime::{
    AnimationTiming, Animator, DEFAULT_ANIMATION_DURATION, DEFAULT_THROTTLE_INTERVAL,
    ScrollAnimation, ScrollThrottle,
};

pub use web_time;
