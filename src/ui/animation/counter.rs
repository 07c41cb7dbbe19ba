//! Count-up animation for the raised-amount display
//!
//! The displayed value advances from a start to an end amount over a fixed
//! duration with an exponential ease-out, so it races through the early
//! digits and settles slowly into the final figure.

use iced::time::Instant;

use crate::utils::format_grouped;

/// Exponential ease-out. `ease_out_expo(1)` is exactly `1`, which pins the
/// terminal frame at the target value rather than an approximation of it.
pub fn ease_out_expo(x: f64) -> f64 {
    if x >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * x)
    }
}

/// An eased count-up between two amounts.
///
/// The start timestamp is recorded on the first frame tick after the
/// animator is (re)started, not at construction, so a counter created long
/// before it is shown still animates from the beginning.
#[derive(Debug, Clone)]
pub struct CountUp {
    from: f64,
    to: f64,
    duration_secs: f64,
    prefix: String,
    suffix: String,
    started: Option<Instant>,
}

impl CountUp {
    pub const DEFAULT_DURATION_SECS: f64 = 2.0;

    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            duration_secs: Self::DEFAULT_DURATION_SECS,
            prefix: String::new(),
            suffix: String::new(),
            started: None,
        }
    }

    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[allow(dead_code)]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Record the start timestamp on the first frame after a (re)start.
    pub fn tick(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// Restart from scratch on the next frame. Changing the animated range
    /// goes through here as well: no blending with the in-flight value.
    pub fn restart(&mut self) {
        self.started = None;
    }

    /// Replace the animated range and restart.
    #[allow(dead_code)]
    pub fn retarget(&mut self, from: f64, to: f64, duration_secs: f64) {
        self.from = from;
        self.to = to;
        self.duration_secs = duration_secs;
        self.started = None;
    }

    /// Normalized progress in `[0, 1]`. A non-finite or non-positive
    /// duration completes immediately instead of dividing by zero.
    pub fn progress(&self, now: Instant) -> f64 {
        let Some(started) = self.started else {
            return 0.0;
        };
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f64();
        (elapsed / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Current interpolated value.
    pub fn value(&self, now: Instant) -> f64 {
        self.from + (self.to - self.from) * ease_out_expo(self.progress(now))
    }

    /// Formatted display string: prefix + grouped integer part + suffix.
    pub fn label(&self, now: Instant) -> String {
        format!(
            "{}{}{}",
            self.prefix,
            format_grouped(self.value(now).floor() as i64),
            self.suffix
        )
    }

    /// Whether the counter still needs frame updates. True before the first
    /// tick, since the start timestamp has yet to be recorded.
    pub fn is_running(&self, now: Instant) -> bool {
        match self.started {
            None => true,
            Some(_) => self.progress(now) < 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn milestone_counter() -> CountUp {
        CountUp::new(1_800_000.0, 2_000_000.0)
            .duration_secs(2.5)
            .prefix("$")
    }

    mod property_terminal_exactness {
        use super::*;

        #[test]
        fn value_at_duration_equals_target_exactly() {
            let mut counter = milestone_counter();
            let t0 = Instant::now();
            counter.tick(t0);
            let at_end = t0 + Duration::from_secs_f64(2.5);
            assert_eq!(counter.value(at_end), 2_000_000.0);
            assert_eq!(counter.label(at_end), "$2,000,000");
        }

        #[test]
        fn value_past_duration_stays_pinned() {
            let mut counter = milestone_counter();
            let t0 = Instant::now();
            counter.tick(t0);
            for secs in [3, 10, 60] {
                let t = t0 + Duration::from_secs(secs);
                assert_eq!(counter.value(t), 2_000_000.0);
                assert!(!counter.is_running(t));
            }
        }

        #[test]
        fn easing_endpoints_are_exact() {
            assert_eq!(ease_out_expo(0.0), 0.0);
            assert_eq!(ease_out_expo(1.0), 1.0);
            assert_eq!(ease_out_expo(2.0), 1.0);
        }
    }

    mod property_monotonicity {
        use super::*;

        #[test]
        fn displayed_value_never_decreases() {
            let mut counter = milestone_counter();
            let t0 = Instant::now();
            counter.tick(t0);
            let mut last = counter.value(t0);
            for ms in (0..=3000).step_by(50) {
                let value = counter.value(t0 + Duration::from_millis(ms));
                assert!(
                    value >= last,
                    "value regressed at t={}ms: {} < {}",
                    ms,
                    value,
                    last
                );
                last = value;
            }
        }

        #[test]
        fn easing_is_monotonic_on_unit_interval() {
            let mut last = 0.0;
            for i in 0..=100 {
                let eased = ease_out_expo(i as f64 / 100.0);
                assert!(eased >= last);
                assert!((0.0..=1.0).contains(&eased));
                last = eased;
            }
        }
    }

    mod property_first_frame {
        use super::*;

        #[test]
        fn first_frame_starts_at_from() {
            let mut counter = milestone_counter();
            let t0 = Instant::now();
            counter.tick(t0);
            assert_eq!(counter.value(t0), 1_800_000.0);
            assert_eq!(counter.label(t0), "$1,800,000");
        }

        #[test]
        fn values_stay_within_range() {
            let mut counter = milestone_counter();
            let t0 = Instant::now();
            counter.tick(t0);
            for ms in (0..=3000).step_by(100) {
                let value = counter.value(t0 + Duration::from_millis(ms));
                assert!((1_800_000.0..=2_000_000.0).contains(&value));
            }
        }

        #[test]
        fn untick_counter_reports_zero_progress() {
            let counter = milestone_counter();
            let now = Instant::now();
            assert_eq!(counter.progress(now), 0.0);
            assert!(counter.is_running(now));
        }
    }

    mod property_degenerate_duration {
        use super::*;

        #[test]
        fn zero_duration_jumps_to_target() {
            let mut counter = CountUp::new(0.0, 500.0).duration_secs(0.0);
            let t0 = Instant::now();
            counter.tick(t0);
            assert_eq!(counter.value(t0), 500.0);
            assert!(!counter.is_running(t0));
        }

        #[test]
        fn negative_duration_jumps_to_target() {
            let mut counter = CountUp::new(0.0, 500.0).duration_secs(-3.0);
            let t0 = Instant::now();
            counter.tick(t0);
            assert_eq!(counter.value(t0), 500.0);
        }

        #[test]
        fn non_finite_duration_jumps_to_target() {
            for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
                let mut counter = CountUp::new(0.0, 500.0).duration_secs(bad);
                let t0 = Instant::now();
                counter.tick(t0);
                assert_eq!(counter.value(t0), 500.0, "duration {bad} should jump");
            }
        }
    }

    mod property_restart {
        use super::*;

        #[test]
        fn restart_discards_inflight_progress() {
            let mut counter = milestone_counter();
            let t0 = Instant::now();
            counter.tick(t0);
            let mid = t0 + Duration::from_secs(1);
            assert!(counter.progress(mid) > 0.0);

            counter.restart();
            assert_eq!(counter.progress(mid), 0.0);
            assert!(counter.is_running(mid));

            // The next tick establishes a fresh start timestamp.
            counter.tick(mid);
            assert_eq!(counter.value(mid), 1_800_000.0);
        }

        #[test]
        fn retarget_restarts_from_new_range() {
            let mut counter = milestone_counter();
            let t0 = Instant::now();
            counter.tick(t0);
            counter.retarget(0.0, 100.0, 1.0);
            let t1 = t0 + Duration::from_secs(1);
            counter.tick(t1);
            assert_eq!(counter.value(t1), 0.0);
            assert_eq!(counter.value(t1 + Duration::from_secs(1)), 100.0);
        }
    }
}
