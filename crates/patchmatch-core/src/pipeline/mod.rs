pub mod config;
mod orchestrator;
mod types;

pub use config::DetectionConfig;
pub use orchestrator::{run_pipeline, run_pipeline_reported};
pub use types::{DetectionOutput, PipelineStage, ProgressReporter};
