use crate::consts::PREDICTOR_REACH;
use crate::error::Result;
use crate::field::{NnField, Offset};

use super::{PatchMatch, Sweep};

impl PatchMatch<'_> {
    /// One propagation sweep over `nnf`, direction chosen by `iter` parity.
    ///
    /// Only cells with two already-visited neighbors along both axes are
    /// updated: `i, j >= 2` going forward, `i <= h - 3, j <= w - 3` going
    /// backward. Each update is written immediately.
    pub fn propagate(&self, nnf: &mut NnField, iter: usize) -> Result<()> {
        self.check_shape(nnf)?;
        let (h, w) = (self.height(), self.width());

        match Sweep::for_iteration(iter) {
            Sweep::Forward => {
                for i in PREDICTOR_REACH..h {
                    for j in PREDICTOR_REACH..w {
                        self.propagate_cell(nnf, i, j, Sweep::Forward)?;
                    }
                }
            }
            Sweep::Backward => {
                for i in (0..h.saturating_sub(PREDICTOR_REACH)).rev() {
                    for j in (0..w.saturating_sub(PREDICTOR_REACH)).rev() {
                        self.propagate_cell(nnf, i, j, Sweep::Backward)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn propagate_cell(&self, nnf: &mut NnField, i: usize, j: usize, sweep: Sweep) -> Result<()> {
        if self.is_pinned(i, j) {
            return Ok(());
        }

        let (near_i, far_i) = visited_neighbors(i, sweep);
        let (near_j, far_j) = visited_neighbors(j, sweep);

        let phi1 = self.first_order_predictor(i, j, nnf.get(near_i, j), nnf.get(far_i, j));
        let phi2 = self.first_order_predictor(i, j, nnf.get(i, near_j), nnf.get(i, far_j));
        let phi3 = nnf.get(i, j);

        let d1 = self.score(i, j, phi1)?;
        let d2 = self.score(i, j, phi2)?;
        let d3 = self.patch_distance(i, j, phi3)?;

        let best = if d1 <= d2.min(d3) {
            phi1
        } else if d2 <= d1.min(d3) {
            phi2
        } else {
            phi3
        };
        nnf.set(i, j, best);
        Ok(())
    }

    /// Linear extrapolation `2 * near - far`, falling back to `near` when the
    /// extrapolated target leaves the region.
    fn first_order_predictor(&self, i: usize, j: usize, near: Offset, far: Offset) -> Offset {
        let phi = near.scaled(2) - far;
        if self.patches.is_inside(i, j, phi) {
            phi
        } else {
            near
        }
    }
}

/// Indices of the adjacent and second neighbor already visited by `sweep`.
fn visited_neighbors(k: usize, sweep: Sweep) -> (usize, usize) {
    match sweep {
        Sweep::Forward => (k - 1, k - 2),
        Sweep::Backward => (k + 1, k + 2),
    }
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;

    use crate::frame::Frame;
    use crate::patchmatch::PatchMatchConfig;

    use super::*;

    fn gradient_frame(h: usize, w: usize) -> Frame {
        Frame::from_gray(&Array2::from_shape_fn((h, w), |(r, c)| (r * 31 + c * 7) as f32))
    }

    #[test]
    fn predictor_extrapolates_linearly() {
        let frame = gradient_frame(10, 10);
        let pm = PatchMatch::new(
            &frame,
            PatchMatchConfig {
                patch_size: 1,
                ..Default::default()
            },
        )
        .unwrap();
        let phi = pm.first_order_predictor(5, 5, Offset::new(1, 2), Offset::new(0, 1));
        assert_eq!(phi, Offset::new(2, 3));
    }

    #[test]
    fn predictor_degrades_to_adjacent_neighbor() {
        let frame = gradient_frame(10, 10);
        let pm = PatchMatch::new(
            &frame,
            PatchMatchConfig {
                patch_size: 1,
                ..Default::default()
            },
        )
        .unwrap();
        // 2 * (3, 0) - (-2, 0) = (8, 0) leaves the 10-row field from row 5.
        let phi = pm.first_order_predictor(5, 5, Offset::new(3, 0), Offset::new(-2, 0));
        assert_eq!(phi, Offset::new(3, 0));
    }

    #[test]
    fn visited_neighbors_follow_sweep() {
        assert_eq!(visited_neighbors(4, Sweep::Forward), (3, 2));
        assert_eq!(visited_neighbors(4, Sweep::Backward), (5, 6));
    }
}
