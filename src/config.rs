use std::path::PathBuf;

use crate::error::BenchError;

pub const DEFAULT_SIZES: [usize; 4] = [62_500, 125_000, 250_000, 375_000];
pub const DEFAULT_TRIALS: usize = 50;
pub const DEFAULT_MAX_VALUE: i32 = 1_000_000;
pub const DEFAULT_PROBE_SIZE: usize = 10_000;
pub const DEFAULT_PROBE_TRIALS: usize = 10;

/// Everything a benchmark run consumes. Read-only once a [`Runner`](crate::Runner) owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Dataset sizes of the algorithm comparison campaign.
    pub sizes: Vec<usize>,
    /// Trials per algorithm and size in the algorithm comparison campaign.
    pub trials: usize,
    /// Inclusive upper bound of generated values, the lower bound is 1.
    pub max_value: i32,
    /// Dataset size of the quicksort ordering sensitivity campaign.
    pub probe_size: usize,
    /// Trials per ordering in the quicksort ordering sensitivity campaign.
    pub probe_trials: usize,
    /// Makes dataset generation reproducible. `None` draws every dataset from fresh entropy.
    pub seed: Option<u64>,
    /// Check every sorted dataset for order after the timed interval.
    pub verify: bool,
    /// Directory the report files are appended to.
    pub output_dir: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            max_value: DEFAULT_MAX_VALUE,
            probe_size: DEFAULT_PROBE_SIZE,
            probe_trials: DEFAULT_PROBE_TRIALS,
            seed: None,
            verify: true,
            output_dir: PathBuf::from("."),
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one dataset size is required".into(),
            ));
        }

        if self.sizes.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "dataset sizes must be positive".into(),
            ));
        }

        if self.trials == 0 {
            return Err(BenchError::InvalidConfig(
                "trials per size must be positive".into(),
            ));
        }

        if self.max_value < 1 {
            return Err(BenchError::InvalidConfig(format!(
                "max value must be at least 1, got {}",
                self.max_value
            )));
        }

        if self.probe_size == 0 {
            return Err(BenchError::InvalidConfig(
                "quicksort probe size must be positive".into(),
            ));
        }

        if self.probe_trials == 0 {
            return Err(BenchError::InvalidConfig(
                "quicksort trials must be positive".into(),
            ));
        }

        Ok(())
    }
}
