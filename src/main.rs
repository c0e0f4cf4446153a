use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};

use sort_bench_rs::config::BenchConfig;
use sort_bench_rs::{CampaignSelection, FileSink, Runner};

/// Times selection sort, merge sort and quicksort on generated integer datasets.
///
/// Every flag is optional, the defaults reproduce the reference campaigns.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Campaigns to run.
    #[arg(long, value_enum, default_value_t = CampaignSelection::All)]
    campaign: CampaignSelection,

    /// Directory the execution time reports are appended to.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Dataset sizes of the selection vs merge sort comparison.
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Trials per algorithm and size.
    #[arg(long)]
    trials: Option<usize>,

    /// Inclusive upper bound of generated values.
    #[arg(long)]
    max_value: Option<i32>,

    /// Dataset size of the quicksort ordering probe.
    #[arg(long)]
    probe_size: Option<usize>,

    /// Trials per ordering of the quicksort ordering probe.
    #[arg(long)]
    probe_trials: Option<usize>,

    /// Seed for reproducible datasets.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip checking that every sorted dataset is in order.
    #[arg(long)]
    no_verify: bool,

    /// Pin the benchmark thread to this core id.
    #[arg(long)]
    pin_core: Option<usize>,
}

impl Cli {
    fn into_config(self) -> BenchConfig {
        let defaults = BenchConfig::default();

        BenchConfig {
            sizes: self.sizes.unwrap_or(defaults.sizes),
            trials: self.trials.unwrap_or(defaults.trials),
            max_value: self.max_value.unwrap_or(defaults.max_value),
            probe_size: self.probe_size.unwrap_or(defaults.probe_size),
            probe_trials: self.probe_trials.unwrap_or(defaults.probe_trials),
            seed: self.seed.or(defaults.seed),
            verify: !self.no_verify,
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
        }
    }
}

fn pin_thread_to_core(core_id: usize) {
    let Some(core_ids) = core_affinity::get_core_ids() else {
        warn!("Unable to query core ids, running unpinned");
        return;
    };

    match core_ids.into_iter().find(|core| core.id == core_id) {
        Some(core) if core_affinity::set_for_current(core) => {
            info!("Pinned benchmark thread to core {core_id}")
        }
        Some(_) => warn!("Failed to pin benchmark thread to core {core_id}, running unpinned"),
        None => warn!("Core {core_id} does not exist, running unpinned"),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let selection = cli.campaign;

    if let Some(core_id) = cli.pin_core {
        pin_thread_to_core(core_id);
    }

    let config = cli.into_config();
    let sink = FileSink::from_config(&config);

    let mut runner = match Runner::new(config, sink) {
        Ok(runner) => runner,
        Err(err) => {
            error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let reports = runner.run(selection);
    info!("Finished {} campaign report(s)", reports.len());

    ExitCode::SUCCESS
}
