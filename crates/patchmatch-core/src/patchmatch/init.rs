use rand::Rng;

use crate::field::{NnField, Offset};

use super::PatchMatch;

impl PatchMatch<'_> {
    /// Draw the initial field: every cell points at a uniformly random
    /// representative pixel.
    ///
    /// With `non_zero_nnf`, a drawn self-match is replaced by the nearest
    /// valid diagonal neighbor, preferring `(1, 1)` then `(-1, -1)`, then any
    /// other principal direction. The zero offset only survives on a 1x1
    /// field. The border ring, if any, is then forced to zero.
    pub fn initialize<R: Rng + ?Sized>(&self, rng: &mut R) -> NnField {
        let (h, w) = (self.height(), self.width());

        let mut nnf = NnField::from_fn(h, w, |i, j| {
            let u = rng.gen_range(0..h);
            let v = rng.gen_range(0..w);
            Offset::new(u as isize - i as isize, v as isize - j as isize)
        });

        if self.config.non_zero_nnf {
            for i in 0..h {
                for j in 0..w {
                    if nnf.get(i, j).is_zero() {
                        nnf.set(i, j, self.non_zero_fallback(i, j));
                    }
                }
            }
        }

        if self.config.border_size > 0 {
            for i in 0..h {
                for j in 0..w {
                    if self.is_pinned(i, j) {
                        nnf.set(i, j, Offset::ZERO);
                    }
                }
            }
        }

        nnf
    }

    fn non_zero_fallback(&self, i: usize, j: usize) -> Offset {
        [Offset::new(1, 1), Offset::new(-1, -1)]
            .into_iter()
            .chain(self.directions)
            .find(|&o| self.patches.is_inside(i, j, o))
            .unwrap_or(Offset::ZERO)
    }
}
