// SPDX-License-Identifier: MPL-2.0
//! Count-up animation for the stats row.

use crate::config::STATS_COUNT_STEPS;

/// Counts from 0 to `target` in [`STATS_COUNT_STEPS`] equal increments.
///
/// The counter is one-shot: once started it runs to completion and can
/// never be restarted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    target: u32,
    step: u32,
    started: bool,
}

impl CountUp {
    #[must_use]
    pub fn new(target: u32) -> Self {
        Self {
            target,
            step: 0,
            started: false,
        }
    }

    /// Starts counting. Returns `false` if the counter had already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Advances one increment while running.
    pub fn tick(&mut self) {
        if self.is_running() {
            self.step += 1;
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started && self.step < STATS_COUNT_STEPS
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.started && self.step >= STATS_COUNT_STEPS
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Current value, `target * step / steps`.
    ///
    /// Computed from the step count rather than accumulated so the final
    /// step lands exactly on the target.
    #[must_use]
    pub fn current(&self) -> f64 {
        f64::from(self.target) * f64::from(self.step) / f64::from(STATS_COUNT_STEPS)
    }

    /// Text shown for the stat: `floor(current)+"+"`, `target+"+"` once done.
    #[must_use]
    pub fn label(&self) -> String {
        if self.is_finished() {
            format!("{}+", self.target)
        } else {
            format!("{}+", self.current().floor() as u64)
        }
    }
}
