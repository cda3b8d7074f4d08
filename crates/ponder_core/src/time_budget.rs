//! Wall-clock budget for time-bounded search.
//!
//! The budget is a polling check, not a preemptive interrupt: the
//! iterative-deepening search asks `expired` at every recursive call
//! entry and unwinds cooperatively once the answer is yes.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct TimeBudget {
    started: Instant,
    limit: Option<Duration>,
}

impl TimeBudget {
    pub fn unlimited() -> TimeBudget {
        TimeBudget {
            started: Instant::now(),
            limit: None,
        }
    }

    pub fn limited(limit: Duration) -> TimeBudget {
        TimeBudget {
            started: Instant::now(),
            limit: Some(limit),
        }
    }

    pub fn new(limit: Option<Duration>) -> TimeBudget {
        TimeBudget {
            started: Instant::now(),
            limit,
        }
    }

    /// Reset the clock; call when a search begins.
    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    pub fn expired(&self) -> bool {
        match self.limit {
            Some(limit) => self.started.elapsed() >= limit,
            None => false,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
#[path = "time_budget_tests.rs"]
mod time_budget_tests;
