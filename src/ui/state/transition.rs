// SPDX-License-Identifier: MPL-2.0
//! Time-based one-shot transitions.
//!
//! A [`Transition`] maps the time elapsed since it started onto a progress
//! value in `[0, 1]`. Views read the progress on every frame tick; nothing is
//! stored per frame.

use std::time::{Duration, Instant};

/// A transition from 0 to 1 over a fixed duration, optionally delayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    starts_at: Instant,
    duration: Duration,
}

impl Transition {
    /// Starts a transition at `now`.
    #[must_use]
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self::start_after(now, Duration::ZERO, duration)
    }

    /// Starts a transition that stays at 0 for `delay`, then runs for
    /// `duration`.
    #[must_use]
    pub fn start_after(now: Instant, delay: Duration, duration: Duration) -> Self {
        Self {
            starts_at: now + delay,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn linear(&self, now: Instant) -> f32 {
        if now <= self.starts_at {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.duration_since(self.starts_at).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress in `[0, 1]` (cubic ease-out, close to CSS `ease`).
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        ease_out_cubic(self.linear(now))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now >= self.starts_at + self.duration
    }
}

/// Cubic ease-out: fast start, gentle landing.
#[must_use]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn progress_runs_from_zero_to_one() {
        let now = Instant::now();
        let transition = Transition::start(now, ms(600));

        assert_eq!(transition.progress(now), 0.0);
        assert!(transition.progress(now + ms(300)) > 0.5);
        assert_eq!(transition.progress(now + ms(600)), 1.0);
        assert_eq!(transition.progress(now + ms(5000)), 1.0);
    }

    #[test]
    fn delayed_transition_holds_zero_until_start() {
        let now = Instant::now();
        let transition = Transition::start_after(now, ms(200), ms(1000));

        assert_eq!(transition.linear(now + ms(199)), 0.0);
        assert!((transition.linear(now + ms(700)) - 0.5).abs() < 1e-3);
        assert!(!transition.is_finished(now + ms(1000)));
        assert!(transition.is_finished(now + ms(1200)));
    }

    #[test]
    fn zero_duration_completes_immediately_after_start() {
        let now = Instant::now();
        let transition = Transition::start(now, Duration::ZERO);
        assert!(transition.is_finished(now));
        assert_eq!(transition.linear(now + ms(1)), 1.0);
    }

    #[test]
    fn easing_is_monotonic_and_bounded() {
        let mut previous = 0.0;
        for step in 0..=20 {
            let value = ease_out_cubic(step as f32 / 20.0);
            assert!(value >= previous);
            assert!((0.0..=1.0).contains(&value));
            previous = value;
        }
        assert_eq!(ease_out_cubic(1.5), 1.0);
    }
}
