//! The fixed load → filter → save → sample → save sequence.
//!
//! Each stage runs only if the previous one produced a non-empty table.
//! Nothing is retried; the furthest stage reached is recorded in the
//! returned [`PipelineReport`].

use std::path::PathBuf;

use log::{info, warn};

use crate::data::filter::{filter_data_by_year_range, YearRange};
use crate::data::loader::load_csv_file;
use crate::data::model::Table;
use crate::data::sample::{random_sample_data, SampleSpec};
use crate::data::writer::save_csv_file;

pub const INPUT_FILE: &str = "Data set 1.csv";
pub const FILTERED_FILE: &str = "filtered_data_2013_2019.csv";
pub const SAMPLED_FILE: &str = "sampled_data_10k.csv";
pub const FINAL_FILE: &str = "final_processed_data.csv";

/// File names, directory and stage parameters for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory all file names are resolved against.
    pub work_dir: PathBuf,
    pub input_file: String,
    pub filtered_file: String,
    pub sampled_file: String,
    pub final_file: String,
    pub year_range: YearRange,
    pub sample: SampleSpec,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            input_file: INPUT_FILE.to_string(),
            filtered_file: FILTERED_FILE.to_string(),
            sampled_file: SAMPLED_FILE.to_string(),
            final_file: FINAL_FILE.to_string(),
            year_range: YearRange::default(),
            sample: SampleSpec::default(),
        }
    }
}

impl PipelineConfig {
    /// Default configuration rooted at `work_dir`.
    pub fn in_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    pub fn input_path(&self) -> PathBuf {
        self.path(&self.input_file)
    }

    pub fn filtered_path(&self) -> PathBuf {
        self.path(&self.filtered_file)
    }

    pub fn sampled_path(&self) -> PathBuf {
        self.path(&self.sampled_file)
    }

    pub fn final_path(&self) -> PathBuf {
        self.path(&self.final_file)
    }
}

/// Furthest stage a run completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Input missing, unreadable or empty.
    NotLoaded,
    Loaded,
    /// Filter kept at least one row; its save was attempted.
    Filtered,
    /// Sample drawn and its save attempted.
    Sampled,
    /// Save under the final name attempted. See
    /// [`PipelineReport::files_written`] for which saves succeeded.
    Finished,
}

/// Row counts per stage, `None` for stages that did not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub stage: Stage,
    pub rows_loaded: Option<usize>,
    pub rows_filtered: Option<usize>,
    pub rows_sampled: Option<usize>,
    /// Output files that were actually written, in write order.
    pub files_written: Vec<PathBuf>,
}

impl PipelineReport {
    fn new() -> Self {
        Self {
            stage: Stage::NotLoaded,
            rows_loaded: None,
            rows_filtered: None,
            rows_sampled: None,
            files_written: Vec::new(),
        }
    }

    fn save(&mut self, table: &Table, path: PathBuf) {
        if save_csv_file(table, &path) {
            self.files_written.push(path);
        }
    }
}

/// Run the whole sequence. Never fails; problems are logged and stop the run.
pub fn run_pipeline(config: &PipelineConfig) -> PipelineReport {
    let mut report = PipelineReport::new();

    let input_path = config.input_path();
    let Some(data) = load_csv_file(&input_path) else {
        return report;
    };
    report.rows_loaded = Some(data.len());
    if data.is_empty() {
        warn!("{} has no rows, stopping", input_path.display());
        return report;
    }
    report.stage = Stage::Loaded;

    let range = &config.year_range;
    let filtered = filter_data_by_year_range(&data, range.start, range.end, &range.column);
    report.rows_filtered = Some(filtered.len());
    if filtered.is_empty() {
        warn!("No rows left after filtering, stopping");
        return report;
    }
    report.save(&filtered, config.filtered_path());
    report.stage = Stage::Filtered;

    let sampled = random_sample_data(&filtered, config.sample);
    report.rows_sampled = Some(sampled.len());
    if sampled.is_empty() {
        warn!("Sample is empty, stopping");
        return report;
    }
    report.save(&sampled, config.sampled_path());
    report.stage = Stage::Sampled;

    let final_path = config.final_path();
    report.save(&sampled, final_path.clone());
    info!("Final processed data saved to {}", final_path.display());
    report.stage = Stage::Finished;

    report
}
