use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::error::ContractViolation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrialOutcome {
    Success,
    Failed(String),
}

/// A single timed sort invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    pub elapsed: Duration,
    pub outcome: TrialOutcome,
}

impl TrialResult {
    pub fn success(elapsed: Duration) -> Self {
        Self {
            elapsed,
            outcome: TrialOutcome::Success,
        }
    }

    pub fn failed(elapsed: Duration, message: impl Into<String>) -> Self {
        Self {
            elapsed,
            outcome: TrialOutcome::Failed(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == TrialOutcome::Success
    }
}

/// Times exactly `f`. A panic escaping `f` is caught and recorded as a failed trial.
///
/// A [`ContractViolation`] is not a trial failure, it keeps unwinding out of this function.
pub fn measure_trial<F: FnOnce()>(f: F) -> TrialResult {
    let start = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    let elapsed = start.elapsed();

    match result {
        Ok(()) => TrialResult::success(elapsed),
        Err(payload) if payload.is::<ContractViolation>() => panic::resume_unwind(payload),
        Err(payload) => TrialResult::failed(elapsed, panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Aggregate of all trials of one algorithm and ordering at one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampaignSummary {
    pub trials: usize,
    pub failures: usize,
    pub total: Duration,
}

impl CampaignSummary {
    pub fn from_trials(trials: &[TrialResult]) -> Self {
        Self {
            trials: trials.len(),
            failures: trials.iter().filter(|trial| !trial.is_success()).count(),
            total: trials.iter().map(|trial| trial.elapsed).sum(),
        }
    }

    /// Summed elapsed time in whole milliseconds.
    pub fn total_ms(&self) -> u128 {
        self.total.as_millis()
    }

    /// `total_ms / trials`, rounded down. Failed trials are part of the divisor.
    pub fn mean_ms(&self) -> u128 {
        if self.trials == 0 {
            return 0;
        }

        self.total_ms() / self.trials as u128
    }
}
