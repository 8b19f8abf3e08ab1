use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ITERATIONS, MAX_BORDER_SIZE};
use crate::detection::{MaskConfig, ThresholdMethod};
use crate::error::{PatchMatchError, Result};
use crate::frame::ChannelMode;
use crate::patchmatch::PatchMatchConfig;

/// Full configuration of a copy-move detection run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Source image.
    pub input: PathBuf,
    /// Directory receiving the rendered maps and the mask.
    pub output: PathBuf,
    /// Channel layout the image is decoded into.
    #[serde(default)]
    pub channels: ChannelMode,
    /// Number of propagation + random search iterations.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Seed of the random generator; a fresh entropy seed when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub patch_match: PatchMatchConfig,
    #[serde(default)]
    pub mask: MaskConfig,
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("patchmatch-out"),
            channels: ChannelMode::default(),
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            patch_match: PatchMatchConfig::default(),
            mask: MaskConfig::default(),
        }
    }
}

impl DetectionConfig {
    /// Checks that do not need the image; patch-size checks happen when the
    /// engine is built.
    pub fn validate(&self) -> Result<()> {
        if self.patch_match.patch_size == 0 {
            return Err(PatchMatchError::config("patch_size must be at least 1"));
        }
        if self.patch_match.border_size > MAX_BORDER_SIZE {
            return Err(PatchMatchError::config(format!(
                "border_size can be either 0 or 1, not {}",
                self.patch_match.border_size
            )));
        }
        if !self.mask.sigma_multiplier.is_finite() || self.mask.sigma_multiplier < 0.0 {
            return Err(PatchMatchError::config(
                "sigma_multiplier must be a non-negative number",
            ));
        }
        if let ThresholdMethod::Fixed(t) = self.mask.threshold_method {
            if !t.is_finite() || t < 0.0 {
                return Err(PatchMatchError::config(
                    "fixed threshold must be a non-negative number",
                ));
            }
        }
        Ok(())
    }
}
