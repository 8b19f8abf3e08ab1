use std::str::FromStr;

use ndarray::{ArrayView3, Zip};
use serde::{Deserialize, Serialize};

use crate::error::PatchMatchError;

/// Dissimilarity between two equally shaped patches.
///
/// Implementations must be symmetric, non-negative and return zero for
/// identical patches.
pub trait PatchDistance: Send + Sync + std::fmt::Debug {
    fn distance(&self, a: &ArrayView3<f64>, b: &ArrayView3<f64>) -> f64;
}

/// Built-in patch distance norms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceKind {
    /// Sum of absolute differences.
    #[default]
    L1,
    /// Euclidean (Frobenius) norm of the difference.
    L2,
}

impl DistanceKind {
    pub fn metric(self) -> Box<dyn PatchDistance> {
        match self {
            Self::L1 => Box::new(L1Distance),
            Self::L2 => Box::new(L2Distance),
        }
    }
}

impl std::fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L1 => write!(f, "l1"),
            Self::L2 => write!(f, "l2"),
        }
    }
}

impl FromStr for DistanceKind {
    type Err = PatchMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l1" => Ok(Self::L1),
            "l2" => Ok(Self::L2),
            other => Err(PatchMatchError::config(format!(
                "unsupported distance measure '{other}' (expected 'l1' or 'l2')"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct L1Distance;

impl PatchDistance for L1Distance {
    fn distance(&self, a: &ArrayView3<f64>, b: &ArrayView3<f64>) -> f64 {
        let mut sum = 0.0_f64;
        Zip::from(a).and(b).for_each(|&x, &y| {
            sum += (x - y).abs();
        });
        sum
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct L2Distance;

impl PatchDistance for L2Distance {
    fn distance(&self, a: &ArrayView3<f64>, b: &ArrayView3<f64>) -> f64 {
        let mut sum = 0.0_f64;
        Zip::from(a).and(b).for_each(|&x, &y| {
            let d = x - y;
            sum += d * d;
        });
        sum.sqrt()
    }
}
