//! Benchmark harness for classic comparison sorts.
//!
//! Generates integer datasets, times selection sort, merge sort and quicksort over repeated
//! trials, aggregates the timings and appends plain text reports keyed by dataset size.

pub use sort_test_tools::Sort;

/// Panics with a [`ContractViolation`](crate::error::ContractViolation) payload unless `$cond`
/// holds.
macro_rules! contract {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            std::panic::panic_any($crate::error::ContractViolation::new(format!($($arg)+)));
        }
    };
}

/// Generates a `SortImpl` type implementing [`Sort`] by forwarding to the `sort` and `sort_by`
/// functions of the module it is invoked in.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod stable;
pub mod unstable;

pub mod campaign;
pub mod config;
pub mod error;
pub mod measure;
pub mod patterns;
pub mod report;

pub use campaign::{CampaignSelection, Runner};
pub use config::BenchConfig;
pub use error::{BenchError, ContractViolation};
pub use report::{FileSink, MemorySink, Report, ReportKey, ResultsSink};
