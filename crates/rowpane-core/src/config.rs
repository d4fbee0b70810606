#![forbid(unsafe_code)]

//! Viewport configuration with fail-fast validation.
//!
//! The windowing math divides by the row height on every recompute, so
//! the dimensions are validated once here, at construction, and never on
//! the hot path. A config is immutable; hosts swap in a new one between
//! render passes and the window is recomputed from the new values rather
//! than from anything cached.

use crate::window::{self, DEFAULT_BUFFER_FACTOR, Window};

/// Default row height in viewport units (pixels, cells, ...).
pub const DEFAULT_ROW_HEIGHT: f64 = 85.0;

/// Default viewport height in the same units.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 420.0;

/// Validated viewport dimensions plus the window buffer factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    row_height: f64,
    viewport_height: f64,
    buffer_factor: usize,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            buffer_factor: DEFAULT_BUFFER_FACTOR,
        }
    }
}

impl ViewportConfig {
    /// Create a config with the default buffer factor.
    ///
    /// # Errors
    ///
    /// Rejects a row height that is not positive and finite, and a
    /// viewport height that is negative or not finite.
    pub fn new(row_height: f64, viewport_height: f64) -> Result<Self, ConfigError> {
        if !row_height.is_finite() || row_height <= 0.0 {
            return Err(ConfigError::InvalidRowHeight(row_height));
        }
        if !viewport_height.is_finite() || viewport_height < 0.0 {
            return Err(ConfigError::InvalidViewportHeight(viewport_height));
        }
        Ok(Self {
            row_height,
            viewport_height,
            buffer_factor: DEFAULT_BUFFER_FACTOR,
        })
    }

    /// Replace the buffer factor (viewports of rows kept on each side of
    /// the anchor).
    ///
    /// # Errors
    ///
    /// Rejects a factor of zero, which would leave nothing rendered.
    pub fn with_buffer_factor(mut self, buffer_factor: usize) -> Result<Self, ConfigError> {
        if buffer_factor == 0 {
            return Err(ConfigError::InvalidBufferFactor(buffer_factor));
        }
        self.buffer_factor = buffer_factor;
        Ok(self)
    }

    /// Row height in viewport units.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Viewport height in viewport units.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Viewports of rows buffered on each side of the anchor.
    #[must_use]
    pub fn buffer_factor(&self) -> usize {
        self.buffer_factor
    }

    /// Rows needed to fill one viewport.
    #[must_use]
    pub fn rows_per_viewport(&self) -> usize {
        window::rows_per_viewport(self.row_height, self.viewport_height)
    }

    /// The window to materialize at `scroll_offset`.
    #[must_use]
    pub fn window_at(&self, scroll_offset: f64) -> Window {
        window::compute_window_with(
            scroll_offset,
            self.row_height,
            self.viewport_height,
            self.buffer_factor,
        )
    }

    /// Total content height for `total_rows` rows, for sizing the host's
    /// scroll track.
    #[must_use]
    pub fn content_extent(&self, total_rows: usize) -> f64 {
        self.row_height * total_rows as f64
    }

    /// Vertical offset of the row at `index`.
    #[must_use]
    pub fn row_offset(&self, index: usize) -> f64 {
        self.row_height * index as f64
    }
}

/// Errors raised by [`ViewportConfig`] construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Row height must be positive and finite.
    InvalidRowHeight(f64),
    /// Viewport height must be non-negative and finite.
    InvalidViewportHeight(f64),
    /// Buffer factor must be at least 1.
    InvalidBufferFactor(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRowHeight(h) => {
                write!(f, "row height must be positive and finite, got {h}")
            }
            Self::InvalidViewportHeight(h) => {
                write!(f, "viewport height must be non-negative and finite, got {h}")
            }
            Self::InvalidBufferFactor(n) => {
                write!(f, "buffer factor must be at least 1, got {n}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
