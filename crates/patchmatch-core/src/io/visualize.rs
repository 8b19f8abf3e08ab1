use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::Array2;

use crate::consts::{COPPER_B, COPPER_G, COPPER_R};
use crate::error::Result;
use crate::field::{DistanceField, NnField};

use super::image_io::save_png;

/// Copper colormap: black through orange to light copper for x in [0, 1].
pub fn copper(x: f32) -> [u8; 3] {
    let x = x.clamp(0.0, 1.0);
    let to_u8 = |v: f32| (v.min(1.0) * 255.0).round() as u8;
    [to_u8(COPPER_R * x), to_u8(COPPER_G * x), to_u8(COPPER_B * x)]
}

/// Render a scalar map with the copper colormap, scaled by its maximum.
pub fn render_heatmap(data: &Array2<f32>) -> RgbImage {
    let (h, w) = data.dim();
    let max = data
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f32, f32::max);

    let mut img = RgbImage::new(w as u32, h as u32);
    for ((row, col), &v) in data.indexed_iter() {
        let x = if max > 0.0 && v.is_finite() { v / max } else { 0.0 };
        img.put_pixel(col as u32, row as u32, Rgb(copper(x)));
    }
    img
}

/// Paths written by [`save_field_maps`].
#[derive(Clone, Debug)]
pub struct FieldMapPaths {
    pub rows: PathBuf,
    pub cols: PathBuf,
    pub l1: PathBuf,
    pub distance: Option<PathBuf>,
}

/// Write |di|, |dj|, |di| + |dj| and, if given, the distance field as
/// copper heatmaps into `dir`.
pub fn save_field_maps(
    nnf: &NnField,
    df: Option<&DistanceField>,
    dir: &Path,
) -> Result<FieldMapPaths> {
    std::fs::create_dir_all(dir)?;

    let paths = FieldMapPaths {
        rows: dir.join("nnf_rows.png"),
        cols: dir.join("nnf_cols.png"),
        l1: dir.join("nnf_l1.png"),
        distance: df.map(|_| dir.join("distance.png")),
    };

    render_heatmap(&nnf.abs_rows()).save_with_format(&paths.rows, ImageFormat::Png)?;
    render_heatmap(&nnf.abs_cols()).save_with_format(&paths.cols, ImageFormat::Png)?;
    render_heatmap(&nnf.l1_norms()).save_with_format(&paths.l1, ImageFormat::Png)?;
    if let (Some(df), Some(path)) = (df, &paths.distance) {
        render_heatmap(&df.mapv(|v| v as f32)).save_with_format(path, ImageFormat::Png)?;
    }

    Ok(paths)
}

/// Save a binary mask as black/white PNG.
pub fn save_mask(mask: &Array2<bool>, path: &Path) -> Result<()> {
    save_png(&mask.mapv(|v| if v { 1.0 } else { 0.0 }), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copper_endpoints() {
        assert_eq!(copper(0.0), [0, 0, 0]);
        let top = copper(1.0);
        assert_eq!(top[0], 255);
        assert!(top[1] > top[2]);
    }

    #[test]
    fn heatmap_of_zero_map_is_black() {
        let img = render_heatmap(&Array2::<f32>::zeros((3, 4)));
        assert_eq!(img.dimensions(), (4, 3));
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
