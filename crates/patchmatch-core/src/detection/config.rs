use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MIN_OFFSET, DEFAULT_MIN_REGION_AREA, DEFAULT_SIGMA_MULTIPLIER};

/// Method used to separate matched (low-distance) cells from the rest.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum ThresholdMethod {
    /// Threshold = mean - sigma_multiplier * stddev of the distance field.
    MeanMinusSigma,
    /// Otsu's method on the distance field scaled by its maximum.
    #[default]
    Otsu,
    /// User-specified threshold, in distance units.
    Fixed(f64),
}

impl std::fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MeanMinusSigma => write!(f, "Mean - Sigma"),
            Self::Otsu => write!(f, "Otsu"),
            Self::Fixed(v) => write!(f, "Fixed ({v})"),
        }
    }
}

/// Configuration for turning a nearest-neighbor field into a suspicious-region mask.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Thresholding method applied to the distance field.
    #[serde(default)]
    pub threshold_method: ThresholdMethod,
    /// Sigma multiplier for the MeanMinusSigma method.
    #[serde(default = "default_sigma_multiplier")]
    pub sigma_multiplier: f64,
    /// Minimum |di| + |dj| of a match; shorter offsets are near-self matches.
    #[serde(default = "default_min_offset")]
    pub min_offset: usize,
    /// Apply a 3x3 morphological opening to the raw mask.
    #[serde(default = "default_opening")]
    pub opening: bool,
    /// Minimum connected region area (cells) to keep.
    #[serde(default = "default_min_area")]
    pub min_area: usize,
}

fn default_sigma_multiplier() -> f64 {
    DEFAULT_SIGMA_MULTIPLIER
}
fn default_min_offset() -> usize {
    DEFAULT_MIN_OFFSET
}
fn default_opening() -> bool {
    true
}
fn default_min_area() -> usize {
    DEFAULT_MIN_REGION_AREA
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            threshold_method: ThresholdMethod::default(),
            sigma_multiplier: DEFAULT_SIGMA_MULTIPLIER,
            min_offset: DEFAULT_MIN_OFFSET,
            opening: true,
            min_area: DEFAULT_MIN_REGION_AREA,
        }
    }
}
