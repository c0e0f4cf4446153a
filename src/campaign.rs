//! The two benchmark campaigns and the trial loop they share.
//!
//! Everything runs sequentially on the calling thread. Every trial sorts its own freshly generated
//! dataset, and only the sort call itself is inside the timed interval.

use clap::ValueEnum;
use log::{error, info};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::measure::{measure_trial, CampaignSummary, TrialOutcome, TrialResult};
use crate::patterns::{DatasetGenerator, InputOrder};
use crate::report::{Report, ReportKey, ResultsSink};
use crate::stable::mergesort;
use crate::unstable::{quicksort, selection_sort};
use crate::Sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CampaignSelection {
    /// Both campaigns, comparison first.
    All,
    /// Selection sort against merge sort across all configured sizes.
    Comparison,
    /// Quicksort on random against pre-sorted input at the probe size.
    Ordering,
}

pub struct Runner<K: ResultsSink> {
    config: BenchConfig,
    generator: DatasetGenerator,
    sink: K,
}

impl<K: ResultsSink> Runner<K> {
    pub fn new(config: BenchConfig, sink: K) -> Result<Self, BenchError> {
        config.validate()?;

        Ok(Self {
            generator: DatasetGenerator::new(config.seed),
            config,
            sink,
        })
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Runs the selected campaigns one after another and returns every report they emitted.
    pub fn run(&mut self, selection: CampaignSelection) -> Vec<Report> {
        let mut reports = Vec::new();

        if matches!(selection, CampaignSelection::All | CampaignSelection::Comparison) {
            reports.extend(self.run_algorithm_comparison());
        }

        if matches!(selection, CampaignSelection::All | CampaignSelection::Ordering) {
            reports.push(self.run_ordering_sensitivity());
        }

        reports
    }

    /// Times selection sort and merge sort on random input at every configured size and emits one
    /// report per size.
    pub fn run_algorithm_comparison(&mut self) -> Vec<Report> {
        let sizes = self.config.sizes.clone();
        let trials = self.config.trials;

        info!(
            "Comparing {} and {} over sizes {sizes:?}, {trials} trials each",
            selection_sort::SortImpl::name(),
            mergesort::SortImpl::name()
        );

        sizes
            .into_iter()
            .map(|size| {
                let selection =
                    self.run_trials::<selection_sort::SortImpl>(InputOrder::Random, size, trials);
                let merge = self.run_trials::<mergesort::SortImpl>(InputOrder::Random, size, trials);

                let report = Report::new(ReportKey::AlgorithmComparison { size })
                    .with_entry(
                        selection_sort::SortImpl::name(),
                        CampaignSummary::from_trials(&selection),
                    )
                    .with_entry(
                        mergesort::SortImpl::name(),
                        CampaignSummary::from_trials(&merge),
                    );

                self.persist(&report);
                report
            })
            .collect()
    }

    /// Times quicksort on random and on pre-sorted input at the probe size and emits one report.
    pub fn run_ordering_sensitivity(&mut self) -> Report {
        let size = self.config.probe_size;
        let trials = self.config.probe_trials;

        info!("Probing quicksort ordering sensitivity at {size} elements, {trials} trials each");

        let mut report = Report::new(ReportKey::OrderingSensitivity { size });
        for order in [InputOrder::Random, InputOrder::Sorted] {
            let results = self.run_trials::<quicksort::SortImpl>(order, size, trials);
            report = report.with_entry(
                format!("{} on {} input", quicksort::SortImpl::name(), order.name()),
                CampaignSummary::from_trials(&results),
            );
        }

        self.persist(&report);
        report
    }

    /// Runs `trials` independent trials of `S`. A failing trial is logged and the loop continues.
    pub fn run_trials<S: Sort>(
        &mut self,
        order: InputOrder,
        size: usize,
        trials: usize,
    ) -> Vec<TrialResult> {
        let max_value = self.config.max_value;

        (1..=trials)
            .map(|trial| {
                let mut v = self.generator.generate(order, size, max_value);

                let mut result = measure_trial(|| S::sort(&mut v));

                if self.config.verify && result.is_success() && !is_sorted(&v) {
                    result.outcome = TrialOutcome::Failed("output is not sorted".into());
                }

                match &result.outcome {
                    TrialOutcome::Success => info!(
                        "Trial {trial} of {} on {size} {} elements succeeded in {:?}",
                        S::name(),
                        order.name(),
                        result.elapsed
                    ),
                    TrialOutcome::Failed(message) => error!(
                        "{}",
                        BenchError::AlgorithmFailure {
                            algorithm: S::name(),
                            size,
                            trial,
                            message: message.clone(),
                        }
                    ),
                }

                result
            })
            .collect()
    }

    fn persist(&mut self, report: &Report) {
        match self.sink.append(report) {
            Ok(()) => info!("Saved execution times for {:?}", report.key),
            Err(err) => error!("{err}"),
        }
    }
}

fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}
