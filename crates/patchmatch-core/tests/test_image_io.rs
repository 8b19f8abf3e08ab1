#[allow(dead_code)]
mod common;

use image::{Rgb, RgbImage};
use ndarray::Array2;
use patchmatch_core::field::{NnField, Offset};
use patchmatch_core::frame::ChannelMode;
use patchmatch_core::io::image_io::{load_image, save_png, source_info};
use patchmatch_core::io::visualize::{save_field_maps, save_mask};

use common::write_gray_png;

#[test]
fn test_load_gray_png_normalizes() {
    let data = Array2::from_shape_vec((2, 3), vec![0u8, 51, 102, 153, 204, 255]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    write_gray_png(&data, &path);

    let frame = load_image(&path, ChannelMode::Gray).unwrap();
    assert_eq!(frame.height(), 2);
    assert_eq!(frame.width(), 3);
    assert_eq!(frame.channels(), 1);
    assert!((frame.data[[0, 0, 0]] - 0.0).abs() < 1e-6);
    assert!((frame.data[[0, 1, 0]] - 0.2).abs() < 1e-4);
    assert!((frame.data[[1, 2, 0]] - 1.0).abs() < 1e-6);
}

#[test]
fn test_load_gray_png_as_rgb_repeats_channels() {
    let data = Array2::from_elem((4, 4), 128u8);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.png");
    write_gray_png(&data, &path);

    let frame = load_image(&path, ChannelMode::Rgb).unwrap();
    assert_eq!(frame.channels(), 3);
    let px: ndarray::ArrayView1<f64> = frame.data.slice(ndarray::s![2, 2, ..]);
    assert!(px.iter().all(|&v| (v - px[0]).abs() < 1e-6));
}

#[test]
fn test_load_rgb_png_keeps_channels() {
    let mut img = RgbImage::new(5, 3);
    img.put_pixel(4, 2, Rgb([255, 0, 51]));
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.png");
    img.save(&path).unwrap();

    let frame = load_image(&path, ChannelMode::Rgb).unwrap();
    assert_eq!(frame.data.dim(), (3, 5, 3));
    assert!((frame.data[[2, 4, 0]] - 1.0).abs() < 1e-6);
    assert!(frame.data[[2, 4, 1]].abs() < 1e-6);
    assert!((frame.data[[2, 4, 2]] - 0.2).abs() < 1e-4);

    let gray = load_image(&path, ChannelMode::Gray).unwrap();
    assert_eq!(gray.data.dim(), (3, 5, 1));
}

#[test]
fn test_load_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_image(&dir.path().join("missing.png"), ChannelMode::Gray).is_err());
}

#[test]
fn test_source_info_reads_header() {
    let dir = tempfile::tempdir().unwrap();
    let gray_path = dir.path().join("gray.png");
    write_gray_png(&Array2::zeros((7, 9)), &gray_path);
    let info = source_info(&gray_path).unwrap();
    assert_eq!((info.width, info.height, info.channels), (9, 7, 1));
    assert_eq!(info.filename, gray_path);

    let rgb_path = dir.path().join("rgb.png");
    RgbImage::new(6, 2).save(&rgb_path).unwrap();
    let info = source_info(&rgb_path).unwrap();
    assert_eq!((info.width, info.height, info.channels), (6, 2, 3));
}

#[test]
fn test_save_png_roundtrip() {
    let data = Array2::from_shape_vec((2, 2), vec![0.0f32, 0.5, 1.0, 2.0]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    save_png(&data, &path).unwrap();

    let frame = load_image(&path, ChannelMode::Gray).unwrap();
    assert!((frame.data[[0, 1, 0]] - 0.5).abs() < 1.0 / 255.0);
    assert!((frame.data[[1, 0, 0]] - 1.0).abs() < 1e-6);
    // Values above 1 are clamped.
    assert!((frame.data[[1, 1, 0]] - 1.0).abs() < 1e-6);
}

#[test]
fn test_save_field_maps_writes_every_map() {
    let nnf = NnField::from_fn(4, 5, |i, j| Offset::new(3 - i as isize, 4 - j as isize));
    let df = Array2::from_shape_fn((4, 5), |(i, j)| (i + j) as f64);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("maps");

    let paths = save_field_maps(&nnf, Some(&df), &out).unwrap();
    for path in [&paths.rows, &paths.cols, &paths.l1] {
        assert!(path.exists(), "{}", path.display());
        let info = source_info(path).unwrap();
        assert_eq!((info.width, info.height), (5, 4));
    }
    assert!(paths.distance.as_ref().is_some_and(|p| p.exists()));

    let no_df = save_field_maps(&nnf, None, &out).unwrap();
    assert!(no_df.distance.is_none());
}

#[test]
fn test_save_mask_is_black_and_white() {
    let mask = Array2::from_shape_fn((3, 3), |(i, j)| i == j);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mask.png");
    save_mask(&mask, &path).unwrap();

    let frame = load_image(&path, ChannelMode::Gray).unwrap();
    assert_eq!(frame.data[[1, 1, 0]], 1.0);
    assert_eq!(frame.data[[0, 1, 0]], 0.0);
}
