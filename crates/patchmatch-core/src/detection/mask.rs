use std::collections::HashMap;

use ndarray::Array2;

use crate::error::{PatchMatchError, Result};
use crate::field::{NnField, Offset};

use super::components::connected_components;
use super::config::MaskConfig;
use super::morphology::morphological_opening;
use super::threshold::compute_threshold;

/// A connected group of cells whose patches have a close copy elsewhere.
#[derive(Clone, Debug, PartialEq)]
pub struct SuspiciousRegion {
    /// Number of cells.
    pub area: usize,
    /// Bounding box: (min_row, max_row, min_col, max_col), inclusive.
    pub bbox: (usize, usize, usize, usize),
    /// Most frequent offset inside the region, i.e. where the copy lies.
    pub offset: Offset,
    /// Fraction of the region's cells that carry `offset`.
    pub coherence: f64,
}

/// Binary suspicious-region map derived from a nearest-neighbor field.
#[derive(Clone, Debug)]
pub struct ForgeryMask {
    pub mask: Array2<bool>,
    /// Distance threshold actually applied.
    pub threshold: f64,
    /// Regions sorted by area, largest first.
    pub regions: Vec<SuspiciousRegion>,
}

impl ForgeryMask {
    /// Fraction of cells flagged.
    pub fn coverage(&self) -> f64 {
        if self.mask.is_empty() {
            return 0.0;
        }
        self.mask.iter().filter(|&&v| v).count() as f64 / self.mask.len() as f64
    }
}

/// Threshold the distance field into a mask of copied cells.
///
/// Pipeline: threshold -> drop near-self offsets -> optional opening ->
/// connected components -> drop small regions.
pub fn extract_mask(nnf: &NnField, df: &Array2<f64>, config: &MaskConfig) -> Result<ForgeryMask> {
    if nnf.dim() != df.dim() {
        return Err(PatchMatchError::Configuration(format!(
            "distance field is {:?} but the offset field is {:?}",
            df.dim(),
            nnf.dim()
        )));
    }

    let threshold = compute_threshold(df, &config.threshold_method, config.sigma_multiplier);

    let raw = Array2::from_shape_fn(nnf.dim(), |(i, j)| {
        df[[i, j]] <= threshold && nnf.get(i, j).l1_norm() >= config.min_offset
    });
    let cleaned = if config.opening {
        morphological_opening(&raw)
    } else {
        raw
    };

    let mut mask = Array2::from_elem(nnf.dim(), false);
    let mut regions = Vec::new();
    for component in connected_components(&cleaned) {
        if component.area < config.min_area {
            continue;
        }
        for &(i, j) in &component.cells {
            mask[[i, j]] = true;
        }
        let (offset, count) = dominant_offset(nnf, &component.cells);
        regions.push(SuspiciousRegion {
            area: component.area,
            bbox: component.bbox,
            offset,
            coherence: count as f64 / component.area as f64,
        });
    }

    Ok(ForgeryMask {
        mask,
        threshold,
        regions,
    })
}

/// Most frequent offset among `cells`, ties broken by first occurrence.
fn dominant_offset(nnf: &NnField, cells: &[(usize, usize)]) -> (Offset, usize) {
    let mut counts: HashMap<Offset, (usize, usize)> = HashMap::new();
    for (order, &(i, j)) in cells.iter().enumerate() {
        counts.entry(nnf.get(i, j)).or_insert((0, order)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
        .map(|(offset, (count, _))| (offset, count))
        .unwrap_or((Offset::ZERO, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_offset_prefers_majority() {
        let nnf = NnField::from_fn(1, 4, |_, j| {
            if j == 0 {
                Offset::new(0, 1)
            } else {
                Offset::new(5, 5)
            }
        });
        let cells = [(0, 0), (0, 1), (0, 2), (0, 3)];
        assert_eq!(dominant_offset(&nnf, &cells), (Offset::new(5, 5), 3));
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        let nnf = NnField::zeros(3, 3);
        let df = Array2::<f64>::zeros((3, 4));
        assert!(extract_mask(&nnf, &df, &MaskConfig::default()).is_err());
    }
}
