//! Post-processing of a nearest-neighbor field into a copy-move mask.

pub mod components;
pub mod config;
pub mod mask;
pub mod morphology;
pub mod threshold;

pub use config::{MaskConfig, ThresholdMethod};
pub use mask::{extract_mask, ForgeryMask, SuspiciousRegion};
