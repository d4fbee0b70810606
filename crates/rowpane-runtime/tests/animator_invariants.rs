//! Property-based invariant tests for the scroll animator.
//!
//! For any origin, target, duration, and frame cadence:
//!
//! 1. The frame sequence is finite.
//! 2. The last delivered value equals the target, exactly.
//! 3. Once retired, the animator stays idle.
//! 4. Every sampled position lies between origin and target (the quartic
//!    curves do not overshoot).

use proptest::prelude::*;
use rowpane_runtime::{AnimationTiming, Animator};
use web_time::{Duration, Instant};

proptest! {
    #[test]
    fn every_run_terminates_on_the_target(
        origin in -1.0e6f64..1.0e6,
        target in -1.0e6f64..1.0e6,
        duration_ms in 0u64..2000,
        frame_ms in 1u64..50,
    ) {
        let timing = AnimationTiming {
            duration: Duration::from_millis(duration_ms),
            ..AnimationTiming::default()
        };
        let mut animator = Animator::new(timing);
        let t0 = Instant::now();
        animator.start(origin, target, t0);

        let (lo, hi) = if origin <= target { (origin, target) } else { (target, origin) };
        let max_frames = (duration_ms / frame_ms + 2) as usize;
        let mut now = t0;
        let mut last = None;
        let mut frames = 0usize;

        while let Some(position) = animator.tick(now) {
            prop_assert!(position >= lo && position <= hi, "overshoot: {position}");
            last = Some(position);
            frames += 1;
            prop_assert!(frames <= max_frames, "run did not terminate");
            now += Duration::from_millis(frame_ms);
        }

        prop_assert_eq!(last, Some(target));
        prop_assert!(!animator.is_animating());
        prop_assert_eq!(animator.tick(now + Duration::from_secs(1)), None);
    }
}
