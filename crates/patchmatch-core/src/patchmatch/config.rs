use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PATCH_SIZE, MAX_BORDER_SIZE};
use crate::error::{PatchMatchError, Result};
use crate::frame::Frame;
use crate::metric::DistanceKind;

/// Construction parameters of a [`PatchMatch`](super::PatchMatch) engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatchMatchConfig {
    /// Side length of the square patches (default: 16).
    #[serde(default = "default_patch_size")]
    pub patch_size: usize,
    /// Patch distance norm (default: l1).
    #[serde(default)]
    pub distance: DistanceKind,
    /// Width of the outer ring pinned to the zero offset, 0 or 1 (default: 0).
    #[serde(default)]
    pub border_size: usize,
    /// Forbid cells from matching themselves (default: true).
    #[serde(default = "default_non_zero_nnf")]
    pub non_zero_nnf: bool,
}

fn default_patch_size() -> usize {
    DEFAULT_PATCH_SIZE
}
fn default_non_zero_nnf() -> bool {
    true
}

impl Default for PatchMatchConfig {
    fn default() -> Self {
        Self {
            patch_size: DEFAULT_PATCH_SIZE,
            distance: DistanceKind::L1,
            border_size: 0,
            non_zero_nnf: true,
        }
    }
}

impl PatchMatchConfig {
    /// Check the configuration against the frame it will run on.
    pub fn validate(&self, frame: &Frame) -> Result<()> {
        if frame.height() == 0 || frame.width() == 0 || frame.channels() == 0 {
            return Err(PatchMatchError::config("image is empty"));
        }
        if self.patch_size == 0 {
            return Err(PatchMatchError::config("patch_size must be at least 1"));
        }
        if self.patch_size > frame.height() || self.patch_size > frame.width() {
            return Err(PatchMatchError::config(format!(
                "patch_size {} is too large for a {}x{} image",
                self.patch_size,
                frame.width(),
                frame.height()
            )));
        }
        if self.border_size > MAX_BORDER_SIZE {
            return Err(PatchMatchError::config(format!(
                "border_size can be either 0 or 1, not {}",
                self.border_size
            )));
        }
        Ok(())
    }
}
