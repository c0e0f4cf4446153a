use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use log::debug;

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::measure::CampaignSummary;

/// Identifies the campaign and dataset size a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKey {
    AlgorithmComparison { size: usize },
    OrderingSensitivity { size: usize },
}

impl ReportKey {
    pub fn file_name(self) -> String {
        match self {
            Self::AlgorithmComparison { size } => format!("execution_times_{size}.txt"),
            Self::OrderingSensitivity { size } => format!("execution_times_quicksort_{size}.txt"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub label: String,
    pub summary: CampaignSummary,
}

/// Timing summaries of one campaign run, written as a single append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub key: ReportKey,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(key: ReportKey) -> Self {
        Self {
            key,
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, label: impl Into<String>, summary: CampaignSummary) -> Self {
        self.entries.push(ReportEntry {
            label: label.into(),
            summary,
        });
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "Total execution time of {}: {} ms",
                entry.label,
                entry.summary.total_ms()
            )?;
            writeln!(
                f,
                "Mean execution time of {}: {} ms",
                entry.label,
                entry.summary.mean_ms()
            )?;
        }
        Ok(())
    }
}

/// Durable destination for campaign reports. Appends only.
pub trait ResultsSink {
    fn append(&mut self, report: &Report) -> Result<(), BenchError>;
}

/// Appends every report to a text file named after its [`ReportKey`] inside one directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Sink writing into the configured output directory.
    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.output_dir.clone())
    }

    pub fn path_for(&self, key: ReportKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl ResultsSink for FileSink {
    fn append(&mut self, report: &Report) -> Result<(), BenchError> {
        let path = self.path_for(report.key);
        let persistence = |source: io::Error| BenchError::Persistence {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(persistence)?;

        // The handle is dropped at the end of this scope, on the error paths as well.
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(persistence)?;
        file.write_all(report.to_string().as_bytes())
            .map_err(persistence)?;
        file.flush().map_err(persistence)?;

        debug!("Appended execution times to {}", path.display());
        Ok(())
    }
}

/// Keeps reports in memory instead of writing them anywhere.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub reports: Vec<Report>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultsSink for MemorySink {
    fn append(&mut self, report: &Report) -> Result<(), BenchError> {
        self.reports.push(report.clone());
        Ok(())
    }
}
