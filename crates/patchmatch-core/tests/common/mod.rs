use std::path::Path;

use image::{GrayImage, Luma};
use ndarray::Array2;
use patchmatch_core::frame::Frame;
use patchmatch_core::PatchMatchConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform noise in [0, 1), reproducible from `seed`.
pub fn noise(height: usize, width: usize, seed: u64) -> Array2<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array2::from_shape_fn((height, width), |_| rng.gen::<f32>())
}

/// Copy the `size x size` block at `src` onto `dst` (top-left corners).
pub fn copy_block(img: &mut Array2<f32>, src: (usize, usize), dst: (usize, usize), size: usize) {
    for x in 0..size {
        for y in 0..size {
            img[[dst.0 + x, dst.1 + y]] = img[[src.0 + x, src.1 + y]];
        }
    }
}

/// Noise frame with one copy-moved block.
pub fn noise_with_copy(
    height: usize,
    width: usize,
    src: (usize, usize),
    dst: (usize, usize),
    size: usize,
    seed: u64,
) -> Frame {
    let mut img = noise(height, width, seed);
    copy_block(&mut img, src, dst, size);
    Frame::from_gray(&img)
}

/// Single-channel frame of one value.
pub fn constant_frame(height: usize, width: usize, value: f32) -> Frame {
    Frame::from_gray(&Array2::from_elem((height, width), value))
}

/// Engine configuration with the given patch size and defaults elsewhere.
pub fn config(patch_size: usize) -> PatchMatchConfig {
    PatchMatchConfig {
        patch_size,
        ..Default::default()
    }
}

/// Write an 8-bit grayscale PNG.
pub fn write_gray_png(data: &Array2<u8>, path: &Path) {
    let (h, w) = data.dim();
    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &v) in data.indexed_iter() {
        img.put_pixel(col as u32, row as u32, Luma([v]));
    }
    img.save(path).unwrap();
}

/// 8-bit noise with one copy-moved block.
pub fn noise_u8_with_copy(
    height: usize,
    width: usize,
    src: (usize, usize),
    dst: (usize, usize),
    size: usize,
    seed: u64,
) -> Array2<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut img = Array2::from_shape_fn((height, width), |_| rng.gen::<u8>());
    for x in 0..size {
        for y in 0..size {
            img[[dst.0 + x, dst.1 + y]] = img[[src.0 + x, src.1 + y]];
        }
    }
    img
}
