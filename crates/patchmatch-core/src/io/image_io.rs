use std::path::Path;

use image::{GrayImage, ImageDecoder, ImageFormat, ImageReader, Luma};
use ndarray::{Array2, Array3};

use crate::error::{PatchMatchError, Result};
use crate::frame::{ChannelMode, Frame, SourceInfo};

/// Load an image file into a Frame with values in [0.0, 1.0].
pub fn load_image(path: &Path, mode: ChannelMode) -> Result<Frame> {
    let img = image::open(path)?;
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(PatchMatchError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let data = match mode {
        ChannelMode::Gray => {
            let gray = img.to_luma16();
            Array3::from_shape_fn((h as usize, w as usize, 1), |(row, col, _)| {
                gray.get_pixel(col as u32, row as u32).0[0] as f64 / 65535.0
            })
        }
        ChannelMode::Rgb => {
            let rgb = img.to_rgb16();
            Array3::from_shape_fn((h as usize, w as usize, 3), |(row, col, ch)| {
                rgb.get_pixel(col as u32, row as u32).0[ch] as f64 / 65535.0
            })
        }
    };

    Ok(Frame::new(data))
}

/// Read dimensions and channel count without decoding pixel data.
pub fn source_info(path: &Path) -> Result<SourceInfo> {
    let decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let (width, height) = decoder.dimensions();
    Ok(SourceInfo {
        filename: path.to_path_buf(),
        width,
        height,
        channels: decoder.color_type().channel_count() as usize,
    })
}

/// Save a 2D array as 8-bit grayscale PNG. Values are clamped to [0.0, 1.0].
pub fn save_png(data: &Array2<f32>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for ((row, col), &v) in data.indexed_iter() {
        let val = (v.clamp(0.0, 1.0) * 255.0) as u8;
        img.put_pixel(col as u32, row as u32, Luma([val]));
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
