use ndarray::{s, ArrayView3};

use crate::error::{PatchMatchError, Result};
use crate::field::{is_inside, Offset};
use crate::frame::Frame;

/// Read-only access to the square patches of a frame.
///
/// A patch is addressed by its top-left representative pixel. The valid
/// representative pixels form a `height x width` region with
/// `height = frame.height - patch_size + 1` (same for width), so every patch
/// lies fully inside the frame.
#[derive(Clone, Copy, Debug)]
pub struct PatchAccessor<'a> {
    frame: &'a Frame,
    patch_size: usize,
    height: usize,
    width: usize,
}

impl<'a> PatchAccessor<'a> {
    /// Returns `None` if `patch_size` is zero or does not fit in the frame.
    pub fn new(frame: &'a Frame, patch_size: usize) -> Option<Self> {
        if patch_size == 0 || patch_size > frame.height() || patch_size > frame.width() {
            return None;
        }
        Some(Self {
            frame,
            patch_size,
            height: frame.height() - patch_size + 1,
            width: frame.width() - patch_size + 1,
        })
    }

    pub fn patch_size(&self) -> usize {
        self.patch_size
    }

    /// Height of the representative-pixel region.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Width of the representative-pixel region.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `(i, j) + offset` is a valid representative pixel.
    pub fn is_inside(&self, i: usize, j: usize, offset: Offset) -> bool {
        is_inside(self.height, self.width, i, j, offset)
    }

    /// Patch anchored at `(row, col)`.
    pub fn get(&self, row: isize, col: isize) -> Result<ArrayView3<'a, f64>> {
        if row < 0 || col < 0 || row >= self.height as isize || col >= self.width as isize {
            return Err(PatchMatchError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        let (r, c) = (row as usize, col as usize);
        let p = self.patch_size;
        Ok(self.frame.data.slice(s![r..r + p, c..c + p, ..]))
    }

    /// Patch anchored at `(i, j) + offset`.
    pub fn get_shifted(&self, i: usize, j: usize, offset: Offset) -> Result<ArrayView3<'a, f64>> {
        self.get(i as isize + offset.di, j as isize + offset.dj)
    }
}
