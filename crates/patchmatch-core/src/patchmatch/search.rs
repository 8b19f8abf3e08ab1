use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::field::{NnField, Offset};

use super::{PatchMatch, Sweep};

impl PatchMatch<'_> {
    /// One random search sweep over `nnf`, direction chosen by `iter` parity.
    pub fn random_search<R: Rng + ?Sized>(
        &self,
        nnf: &mut NnField,
        iter: usize,
        rng: &mut R,
    ) -> Result<()> {
        self.check_shape(nnf)?;
        let (h, w) = (self.height(), self.width());

        match Sweep::for_iteration(iter) {
            Sweep::Forward => {
                for i in 0..h {
                    for j in 0..w {
                        self.search_cell(nnf, i, j, rng)?;
                    }
                }
            }
            Sweep::Backward => {
                for i in (0..h).rev() {
                    for j in (0..w).rev() {
                        self.search_cell(nnf, i, j, rng)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Keep the best-scoring candidate; on exact ties the earlier one wins.
    fn search_cell<R: Rng + ?Sized>(
        &self,
        nnf: &mut NnField,
        i: usize,
        j: usize,
        rng: &mut R,
    ) -> Result<()> {
        if self.is_pinned(i, j) {
            return Ok(());
        }

        let candidates = self.candidates(nnf.get(i, j), i, j, rng);
        let mut best = candidates[0];
        let mut best_dist = f64::INFINITY;
        for &candidate in &candidates {
            let dist = self.score(i, j, candidate)?;
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }

        nnf.set(i, j, best);
        Ok(())
    }

    /// `current`, followed by `current + 2^k * d` for k = 0, 1, 2, ... where
    /// `d` is drawn among the principal directions that keep the target
    /// inside the region. Stops at the first scale with no such direction.
    pub(crate) fn candidates<R: Rng + ?Sized>(
        &self,
        current: Offset,
        i: usize,
        j: usize,
        rng: &mut R,
    ) -> Vec<Offset> {
        let mut candidates = vec![current];
        let mut space = Vec::with_capacity(self.directions.len());
        let mut scale: isize = 1;

        loop {
            space.clear();
            space.extend(
                self.directions
                    .iter()
                    .map(|&d| current + d.scaled(scale))
                    .filter(|&c| self.patches.is_inside(i, j, c)),
            );
            match space.choose(rng) {
                Some(&c) => candidates.push(c),
                None => break,
            }
            scale *= 2;
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::frame::Frame;
    use crate::patchmatch::PatchMatchConfig;

    use super::*;

    #[test]
    fn candidates_grow_geometrically_from_current() {
        let frame = Frame::from_gray(&Array2::<f32>::zeros((40, 40)));
        let pm = PatchMatch::new(
            &frame,
            PatchMatchConfig {
                patch_size: 1,
                ..Default::default()
            },
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let current = Offset::new(3, -4);

        for _ in 0..10 {
            let cands = pm.candidates(current, 20, 20, &mut rng);
            assert_eq!(cands[0], current);
            assert!(cands.len() > 1);
            for (k, c) in cands.iter().enumerate().skip(1) {
                let step = *c - current;
                let radius = step.di.unsigned_abs().max(step.dj.unsigned_abs());
                assert_eq!(radius, 1 << (k - 1));
                assert!(pm.patches.is_inside(20, 20, *c));
            }
        }
    }

    #[test]
    fn candidates_on_single_cell_field_is_just_current() {
        let frame = Frame::from_gray(&Array2::<f32>::zeros((2, 2)));
        let pm = PatchMatch::new(
            &frame,
            PatchMatchConfig {
                patch_size: 2,
                ..Default::default()
            },
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pm.candidates(Offset::ZERO, 0, 0, &mut rng), vec![Offset::ZERO]);
    }
}
