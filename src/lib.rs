//! year-sampler - load a CSV table, keep rows within a year range, and draw
//! a reproducible random sample.
//!
//! Every stage logs its outcome through the `log` facade and falls back to a
//! benign value instead of returning an error:
//! - missing or unparsable input → `None`
//! - failed save → logged no-op
//! - failed filter → the unfiltered input
//! - undersized sample → all rows

pub mod data;
pub mod error;
pub mod pipeline;

pub use data::filter::{filter_data_by_year_range, try_filter_by_year_range, YearRange};
pub use data::loader::{load_csv_file, try_load_csv};
pub use data::model::{Row, Table, Value};
pub use data::sample::{random_sample_data, SampleSpec};
pub use data::writer::{save_csv_file, try_save_csv};
pub use error::TableError;
pub use pipeline::{run_pipeline, PipelineConfig, PipelineReport, Stage};
