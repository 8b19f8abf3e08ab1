use std::ops::{Add, Sub};

use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

/// Per-cell patch distance under a nearest-neighbor field.
pub type DistanceField = Array2<f64>;

/// Integer displacement from one representative pixel to another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    /// Row displacement.
    pub di: isize,
    /// Column displacement.
    pub dj: isize,
}

impl Offset {
    pub const ZERO: Offset = Offset { di: 0, dj: 0 };

    pub const fn new(di: isize, dj: isize) -> Self {
        Self { di, dj }
    }

    pub fn is_zero(self) -> bool {
        self.di == 0 && self.dj == 0
    }

    /// Both components multiplied by `k`.
    pub fn scaled(self, k: isize) -> Self {
        Self::new(self.di * k, self.dj * k)
    }

    /// |di| + |dj|
    pub fn l1_norm(self) -> usize {
        self.di.unsigned_abs() + self.dj.unsigned_abs()
    }

    /// The 8 principal unit directions, row-major, without (0, 0).
    pub fn principal_directions() -> [Offset; 8] {
        let mut dirs = [Offset::ZERO; 8];
        let mut n = 0;
        for di in -1..=1 {
            for dj in -1..=1 {
                if di == 0 && dj == 0 {
                    continue;
                }
                dirs[n] = Offset::new(di, dj);
                n += 1;
            }
        }
        dirs
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.di + rhs.di, self.dj + rhs.dj)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.di - rhs.di, self.dj - rhs.dj)
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.di, self.dj)
    }
}

/// Nearest-neighbor field: one offset per representative pixel.
///
/// Every stored offset points at another representative pixel of the same
/// `height x width` region. Only the engine writes into a field after it has
/// been built; callers get read access and whole-field constructors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NnField {
    offsets: Array2<Offset>,
}

impl NnField {
    /// A field of zero offsets.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            offsets: Array2::from_elem((height, width), Offset::ZERO),
        }
    }

    /// Build a field cell by cell. Offsets are taken as given; use
    /// [`NnField::is_valid`] to check them against the region.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Offset,
    {
        Self {
            offsets: Array2::from_shape_fn((height, width), |(i, j)| f(i, j)),
        }
    }

    pub fn height(&self) -> usize {
        self.offsets.nrows()
    }

    pub fn width(&self) -> usize {
        self.offsets.ncols()
    }

    pub fn dim(&self) -> (usize, usize) {
        self.offsets.dim()
    }

    pub fn get(&self, i: usize, j: usize) -> Offset {
        self.offsets[[i, j]]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, offset: Offset) {
        self.offsets[[i, j]] = offset;
    }

    pub fn offsets(&self) -> &Array2<Offset> {
        &self.offsets
    }

    /// Whether `(i, j) + offset` is a representative pixel of this field.
    pub fn is_inside(&self, i: usize, j: usize, offset: Offset) -> bool {
        is_inside(self.height(), self.width(), i, j, offset)
    }

    /// Whether every cell points inside the field.
    pub fn is_valid(&self) -> bool {
        self.offsets
            .indexed_iter()
            .all(|((i, j), &o)| self.is_inside(i, j, o))
    }

    /// Number of cells mapped onto themselves.
    pub fn count_zero_offsets(&self) -> usize {
        self.offsets.iter().filter(|o| o.is_zero()).count()
    }

    /// Export as an integer array of shape (height, width, 2): `[.., .., 0]`
    /// holds row offsets, `[.., .., 1]` column offsets.
    pub fn to_array(&self) -> Array3<i64> {
        let (h, w) = self.dim();
        Array3::from_shape_fn((h, w, 2), |(i, j, k)| {
            let o = self.offsets[[i, j]];
            if k == 0 {
                o.di as i64
            } else {
                o.dj as i64
            }
        })
    }

    /// |di| per cell.
    pub fn abs_rows(&self) -> Array2<f32> {
        self.offsets.mapv(|o| o.di.unsigned_abs() as f32)
    }

    /// |dj| per cell.
    pub fn abs_cols(&self) -> Array2<f32> {
        self.offsets.mapv(|o| o.dj.unsigned_abs() as f32)
    }

    /// |di| + |dj| per cell.
    pub fn l1_norms(&self) -> Array2<f32> {
        self.offsets.mapv(|o| o.l1_norm() as f32)
    }
}

/// Region-level bounds check shared by the field and the patch accessor.
pub(crate) fn is_inside(height: usize, width: usize, i: usize, j: usize, offset: Offset) -> bool {
    let ti = i as isize + offset.di;
    let tj = j as isize + offset.dj;
    ti >= 0 && ti < height as isize && tj >= 0 && tj < width as isize
}
