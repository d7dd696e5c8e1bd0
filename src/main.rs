use anyhow::{Context, Result};
use log::info;

use year_sampler::{run_pipeline, PipelineConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let work_dir = std::env::current_dir().context("resolving current directory")?;
    let report = run_pipeline(&PipelineConfig::in_dir(work_dir));
    info!("Pipeline stopped at {:?}", report.stage);

    Ok(())
}
