use std::path::PathBuf;

use crate::detection::ForgeryMask;
use crate::field::{DistanceField, NnField};
use crate::io::visualize::FieldMapPaths;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Reading,
    Searching,
    DistanceField,
    Masking,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reading => write!(f, "Reading image"),
            Self::Searching => write!(f, "Searching matches"),
            Self::DistanceField => write!(f, "Distance field"),
            Self::Masking => write!(f, "Extracting mask"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Everything a detection run produces.
#[derive(Clone, Debug)]
pub struct DetectionOutput {
    pub nnf: NnField,
    pub distance_field: DistanceField,
    pub mask: ForgeryMask,
    pub maps: FieldMapPaths,
    pub mask_path: PathBuf,
}

/// Thread-safe progress reporting for the pipeline.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new pipeline stage has started. `total_items` is the number of
    /// work items in this stage (e.g., iteration count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` work items of the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
