#![forbid(unsafe_code)]

//! Easing curves for animated scrolling.
//!
//! An easing function maps elapsed-time progress `t` in [0, 1] to motion
//! progress in [0, 1], so animated movement decelerates (or accelerates)
//! instead of moving linearly. The scroll animator samples one of these
//! curves once per frame.

/// Easing function applied by the scroll animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Quartic ease-out: fast start, long deceleration. The default for
    /// scroll navigation.
    #[default]
    QuartOut,
    /// Quartic ease-in: slow start, fast finish.
    QuartIn,
    /// Quartic S-curve.
    QuartInOut,
}

impl Easing {
    /// Apply the curve to a progress value.
    ///
    /// Input is clamped to [0, 1]; output is always in [0, 1] with
    /// `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuartOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv * inv
            }
            Self::QuartIn => t * t * t * t,
            Self::QuartInOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv * inv / 2.0
                }
            }
        }
    }
}
