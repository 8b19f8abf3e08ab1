use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use patchmatch_core::consts::{
    DEFAULT_ITERATIONS, DEFAULT_MIN_OFFSET, DEFAULT_MIN_REGION_AREA, DEFAULT_PATCH_SIZE,
    DEFAULT_SIGMA_MULTIPLIER,
};
use patchmatch_core::detection::{MaskConfig, ThresholdMethod};
use patchmatch_core::frame::ChannelMode;
use patchmatch_core::metric::DistanceKind;
use patchmatch_core::pipeline::{
    run_pipeline_reported, DetectionConfig, PipelineStage, ProgressReporter,
};
use patchmatch_core::PatchMatchConfig;
use tracing::info;

use crate::summary::{print_regions, print_run_summary};

#[derive(Clone, ValueEnum)]
pub enum ThresholdArg {
    Otsu,
    MeanSigma,
}

#[derive(Args)]
pub struct RunArgs {
    /// Input image
    pub file: PathBuf,

    /// Detection config file (TOML); replaces every flag below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Patch side length in pixels
    #[arg(long, default_value_t = DEFAULT_PATCH_SIZE)]
    pub patch_size: usize,

    /// Number of propagation + random search iterations
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Patch distance (l1 or l2)
    #[arg(long, default_value = "l1", value_parser = str::parse::<DistanceKind>)]
    pub distance: DistanceKind,

    /// Width of the border ring held at the zero offset (0 or 1)
    #[arg(long, default_value_t = 0)]
    pub border_size: usize,

    /// Let the zero offset compete during the search
    #[arg(long)]
    pub allow_zero: bool,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Decode the image as single-channel luminance
    #[arg(long)]
    pub gray: bool,

    /// Thresholding method for the distance field
    #[arg(long, value_enum, default_value = "otsu")]
    pub threshold: ThresholdArg,

    /// Sigma multiplier for the mean-sigma threshold
    #[arg(long, default_value_t = DEFAULT_SIGMA_MULTIPLIER)]
    pub sigma: f64,

    /// Fixed threshold in distance units; overrides --threshold
    #[arg(long)]
    pub fixed_threshold: Option<f64>,

    /// Minimum |di| + |dj| of a reported match
    #[arg(long, default_value_t = DEFAULT_MIN_OFFSET)]
    pub min_offset: usize,

    /// Minimum area of a reported region, in representative pixels
    #[arg(long, default_value_t = DEFAULT_MIN_REGION_AREA)]
    pub min_area: usize,

    /// Skip the morphological opening of the raw mask
    #[arg(long)]
    pub no_opening: bool,

    /// Output directory for the maps and the mask
    #[arg(short, long, default_value = "patchmatch-out")]
    pub output: PathBuf,
}

/// Progress bar driven by pipeline stages.
struct BarReporter {
    bar: ProgressBar,
}

impl BarReporter {
    fn new() -> Result<Self> {
        let bar = ProgressBar::new(1);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg:20} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        Ok(Self { bar })
    }
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.bar.set_length(total_items.unwrap_or(1) as u64);
        self.bar.set_position(0);
        self.bar.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            self.bar.set_position(len);
        }
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        let mut config: DetectionConfig =
            toml::from_str(&contents).context("Invalid detection config")?;
        config.input = args.file.clone();
        config
    } else {
        build_config_from_args(args)
    };

    print_run_summary(&config);

    let reporter = Arc::new(BarReporter::new()?);
    let output = run_pipeline_reported(&config, reporter.clone())
        .with_context(|| format!("Detection failed on {}", config.input.display()))?;
    reporter.bar.finish_with_message("Done");
    info!(regions = output.mask.regions.len(), "Detection finished");

    print_regions(&output);
    println!("\nMaps saved to {}", config.output.display());

    Ok(())
}

fn build_config_from_args(args: &RunArgs) -> DetectionConfig {
    let threshold_method = match (args.fixed_threshold, &args.threshold) {
        (Some(t), _) => ThresholdMethod::Fixed(t),
        (None, ThresholdArg::Otsu) => ThresholdMethod::Otsu,
        (None, ThresholdArg::MeanSigma) => ThresholdMethod::MeanMinusSigma,
    };

    DetectionConfig {
        input: args.file.clone(),
        output: args.output.clone(),
        channels: if args.gray {
            ChannelMode::Gray
        } else {
            ChannelMode::Rgb
        },
        iterations: args.iterations,
        seed: args.seed,
        patch_match: PatchMatchConfig {
            patch_size: args.patch_size,
            distance: args.distance,
            border_size: args.border_size,
            non_zero_nnf: !args.allow_zero,
        },
        mask: MaskConfig {
            threshold_method,
            sigma_multiplier: args.sigma,
            min_offset: args.min_offset,
            opening: !args.no_opening,
            min_area: args.min_area,
        },
    }
}
