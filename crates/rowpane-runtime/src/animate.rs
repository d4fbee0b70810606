#![forbid(unsafe_code)]

//! Smooth-scroll animation driven by wall-clock sampling.
//!
//! A [`ScrollAnimation`] interpolates a scroll position from an origin to
//! a target over a fixed duration, sampled once per frame with an eased
//! curve. The [`Animator`] owns at most one animation at a time: starting
//! a new one *replaces* the old one, so a superseded run can never keep
//! writing positions behind the newer command's back.
//!
//! # Invariants
//!
//! - The frame sequence always terminates: progress is keyed on elapsed
//!   wall-clock time against a fixed duration, so a delayed or skipped
//!   frame only jumps the animation to completion.
//! - The last value delivered is the target, exactly. Past the deadline
//!   the curve is never evaluated; the sample short-circuits to the
//!   target instead of an interpolated approximation of it.

use rowpane_core::Easing;
use web_time::{Duration, Instant};

/// Default duration of a programmatic scroll animation.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(800);

/// Duration and easing curve for scroll animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTiming {
    /// Total animation duration.
    pub duration: Duration,
    /// Curve mapping elapsed-time progress to motion progress.
    pub easing: Easing,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::QuartOut,
        }
    }
}

/// One in-flight scroll animation. Sampling is pure in `now`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    origin: f64,
    target: f64,
    started_at: Instant,
    timing: AnimationTiming,
}

impl ScrollAnimation {
    /// Begin an animation from `origin` to `target` at `started_at`.
    #[must_use]
    pub fn new(origin: f64, target: f64, started_at: Instant, timing: AnimationTiming) -> Self {
        Self {
            origin,
            target,
            started_at,
            timing,
        }
    }

    /// Final scroll position.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// The interpolated position at `now`.
    ///
    /// At or past the deadline this is the target exactly, whatever the
    /// curve would have produced.
    #[must_use]
    pub fn position_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.timing.duration {
            return self.target;
        }
        let t = elapsed.as_secs_f64() / self.timing.duration.as_secs_f64();
        self.origin + (self.target - self.origin) * self.timing.easing.apply(t)
    }

    /// Whether the deadline has passed at `now`.
    #[must_use]
    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.timing.duration
    }
}

/// Owner of the single in-flight scroll animation.
///
/// `tick` once per frame: while a run is active it yields the position to
/// apply; on the first tick at or past the deadline it yields the target
/// and retires the run. A `start` while a run is in flight supersedes it.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    timing: AnimationTiming,
    current: Option<ScrollAnimation>,
}

impl Animator {
    /// Create an animator with the given timing for every run.
    #[must_use]
    pub fn new(timing: AnimationTiming) -> Self {
        Self {
            timing,
            current: None,
        }
    }

    /// Timing applied to each run.
    #[must_use]
    pub fn timing(&self) -> AnimationTiming {
        self.timing
    }

    /// Start a run from `from` to `to` at `now`.
    ///
    /// Any in-flight run is dropped first; its remaining frames simply
    /// never happen.
    pub fn start(&mut self, from: f64, to: f64, now: Instant) {
        if self.current.is_some() {
            tracing::debug!(target: "rowpane.animate", to, "superseding in-flight animation");
        } else {
            tracing::debug!(target: "rowpane.animate", from, to, "animation started");
        }
        self.current = Some(ScrollAnimation::new(from, to, now, self.timing));
    }

    /// Advance one frame.
    ///
    /// `Some(position)` while a run is active; the final call yields the
    /// target exactly, after which the animator is idle and returns
    /// `None`.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let animation = self.current?;
        if animation.is_finished_at(now) {
            self.current = None;
            tracing::debug!(
                target: "rowpane.animate",
                position = animation.target(),
                "animation completed"
            );
            return Some(animation.target());
        }
        Some(animation.position_at(now))
    }

    /// Drop the in-flight run, if any.
    pub fn cancel(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!(target: "rowpane.animate", "animation cancelled");
        }
    }

    /// Whether a run is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn animator() -> (Animator, Instant) {
        (Animator::new(AnimationTiming::default()), Instant::now())
    }

    #[test]
    fn idle_animator_yields_nothing() {
        let (mut animator, t0) = animator();
        assert_eq!(animator.tick(t0), None);
        assert!(!animator.is_animating());
    }

    #[test]
    fn interpolates_with_the_eased_curve() {
        let (mut animator, t0) = animator();
        animator.start(0.0, 1000.0, t0);

        // Halfway through 800ms, quartic ease-out is at 0.9375.
        let mid = animator.tick(t0 + Duration::from_millis(400)).unwrap();
        assert!((mid - 937.5).abs() < 1e-9);
    }

    #[test]
    fn first_frame_starts_at_the_origin() {
        let (mut animator, t0) = animator();
        animator.start(250.0, 1000.0, t0);
        assert_eq!(animator.tick(t0), Some(250.0));
    }

    #[test]
    fn final_frame_is_the_target_exactly() {
        let (mut animator, t0) = animator();
        animator.start(0.0, 333.333, t0);

        let mut now = t0;
        let mut last = None;
        // 800ms at 16ms frames needs ~51 ticks; 200 is a hard stop well
        // past any legitimate run.
        for _ in 0..200 {
            now += FRAME;
            match animator.tick(now) {
                Some(position) => last = Some(position),
                None => break,
            }
        }
        assert_eq!(last, Some(333.333));
        assert!(!animator.is_animating());
    }

    #[test]
    fn delayed_frame_jumps_to_completion() {
        let (mut animator, t0) = animator();
        animator.start(0.0, 500.0, t0);

        // The host stalled well past the deadline; the next frame pins
        // the target instead of extrapolating.
        assert_eq!(animator.tick(t0 + Duration::from_secs(10)), Some(500.0));
        assert_eq!(animator.tick(t0 + Duration::from_secs(11)), None);
    }

    #[test]
    fn zero_duration_completes_on_the_first_tick() {
        let timing = AnimationTiming {
            duration: Duration::ZERO,
            ..AnimationTiming::default()
        };
        let mut animator = Animator::new(timing);
        let t0 = Instant::now();
        animator.start(10.0, 90.0, t0);
        assert_eq!(animator.tick(t0), Some(90.0));
        assert_eq!(animator.tick(t0), None);
    }

    #[test]
    fn start_supersedes_the_in_flight_run() {
        let (mut animator, t0) = animator();
        animator.start(0.0, 1000.0, t0);

        let t1 = t0 + Duration::from_millis(200);
        let position = animator.tick(t1).unwrap();
        animator.start(position, 0.0, t1);

        // Only the newer run produces frames from here on.
        let settled = animator.tick(t1 + Duration::from_secs(1)).unwrap();
        assert_eq!(settled, 0.0);
        assert_eq!(animator.tick(t1 + Duration::from_secs(2)), None);
    }

    #[test]
    fn cancel_drops_the_run_without_a_final_frame() {
        let (mut animator, t0) = animator();
        animator.start(0.0, 1000.0, t0);
        animator.cancel();
        assert!(!animator.is_animating());
        assert_eq!(animator.tick(t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn animating_toward_a_smaller_offset_works() {
        let (mut animator, t0) = animator();
        animator.start(1000.0, 0.0, t0);

        let mid = animator.tick(t0 + Duration::from_millis(400)).unwrap();
        assert!(mid < 1000.0);
        assert!(mid > 0.0);
        assert_eq!(animator.tick(t0 + Duration::from_secs(1)), Some(0.0));
    }

    #[test]
    fn sampling_is_pure_in_now() {
        let t0 = Instant::now();
        let animation =
            ScrollAnimation::new(0.0, 100.0, t0, AnimationTiming::default());
        let at = t0 + Duration::from_millis(300);
        assert_eq!(animation.position_at(at), animation.position_at(at));
    }

    #[test]
    fn position_before_the_start_is_the_origin() {
        let t0 = Instant::now() + Duration::from_secs(1);
        let animation =
            ScrollAnimation::new(40.0, 100.0, t0, AnimationTiming::default());
        // A frame timestamped before the start clamps elapsed to zero.
        assert_eq!(animation.position_at(t0 - Duration::from_millis(500)), 40.0);
    }

    #[test]
    fn default_timing_is_800ms_quart_out() {
        let timing = AnimationTiming::default();
        assert_eq!(timing.duration, Duration::from_millis(800));
        assert_eq!(timing.easing, Easing::QuartOut);
    }
}
