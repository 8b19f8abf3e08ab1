use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::detection::extract_mask;
use crate::error::Result;
use crate::io::image_io::load_image;
use crate::io::visualize::{save_field_maps, save_mask};
use crate::patchmatch::PatchMatch;

use super::config::DetectionConfig;
use super::types::{DetectionOutput, NoOpReporter, PipelineStage, ProgressReporter};

/// Run the full detection pipeline with a thread-safe progress reporter.
///
/// Load -> nearest-neighbor field search -> distance field -> mask -> write maps.
pub fn run_pipeline_reported(
    config: &DetectionConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<DetectionOutput> {
    config.validate()?;

    reporter.begin_stage(PipelineStage::Reading, None);
    let frame = load_image(&config.input, config.channels)?;
    info!(
        width = frame.width(),
        height = frame.height(),
        channels = frame.channels(),
        "Image loaded"
    );
    reporter.finish_stage();

    let engine = PatchMatch::new(&frame, config.patch_match.clone())?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        field_height = engine.height(),
        field_width = engine.width(),
        patch_size = config.patch_match.patch_size,
        distance = %config.patch_match.distance,
        iterations = config.iterations,
        seed = ?config.seed,
        "Searching nearest-neighbor field"
    );

    reporter.begin_stage(PipelineStage::Searching, Some(config.iterations));
    let nnf = engine
        .run_with_progress(config.iterations, false, &mut rng, |done, total| {
            debug!(iteration = done, total, "Iteration complete");
            reporter.advance(done);
        })?
        .nnf;
    reporter.finish_stage();
    debug!(zero_offsets = nnf.count_zero_offsets(), "Search complete");

    reporter.begin_stage(PipelineStage::DistanceField, None);
    let distance_field = engine.distance_field(&nnf)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Masking, None);
    let mask = extract_mask(&nnf, &distance_field, &config.mask)?;
    info!(
        threshold = mask.threshold,
        regions = mask.regions.len(),
        coverage = mask.coverage(),
        "Suspicious regions extracted"
    );
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing, None);
    let maps = save_field_maps(&nnf, Some(&distance_field), &config.output)?;
    let mask_path = config.output.join("mask.png");
    save_mask(&mask.mask, &mask_path)?;
    info!(output = %config.output.display(), "Maps saved");
    reporter.finish_stage();

    Ok(DetectionOutput {
        nnf,
        distance_field,
        mask,
        maps,
        mask_path,
    })
}

/// Run the full detection pipeline without progress reporting.
pub fn run_pipeline(config: &DetectionConfig) -> Result<DetectionOutput> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}
