#![forbid(unsafe_code)]

//! Pure building blocks for windowed row virtualization.
//!
//! Everything in this crate is deterministic arithmetic: no clocks, no
//! I/O, no interior mutability. The time-driven pieces (throttling,
//! animation) live in `rowpane-runtime`; composition lives in `rowpane`.

pub mod config;
pub mod easing;
pub mod row;
pub mod window;

pub use config::{ConfigError, DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT, ViewportConfig};
pub use easing::Easing;
pub use row::{Row, RowId};
pub use window::{DEFAULT_BUFFER_FACTOR, Window, compute_window, compute_window_with};
