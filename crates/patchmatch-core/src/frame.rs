use ndarray::{Array2, Array3, Axis};
use num_traits::AsPrimitive;
use std::path::PathBuf;

/// A single image with one or more channels.
///
/// Pixel values are stored as f64. `from_gray` and `from_channels` keep the
/// source values as they are, while `io::load_image` scales samples to
/// [0, 1]. 64-bit integers beyond 2^53 lose precision on conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width, channels)
    pub data: Array3<f64>,
}

impl Frame {
    pub fn new(data: Array3<f64>) -> Self {
        Self { data }
    }

    /// Build a single-channel frame from any numeric 2D array.
    pub fn from_gray<T>(data: &Array2<T>) -> Self
    where
        T: AsPrimitive<f64>,
    {
        let converted = data.mapv(|v| v.as_());
        Self {
            data: converted.insert_axis(Axis(2)),
        }
    }

    /// Build a frame from any numeric (height, width, channels) array.
    pub fn from_channels<T>(data: &Array3<T>) -> Self
    where
        T: AsPrimitive<f64>,
    {
        Self {
            data: data.mapv(|v| v.as_()),
        }
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }
}

/// Channel layout requested when decoding a source image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChannelMode {
    Gray,
    #[default]
    Rgb,
}

impl std::fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gray => write!(f, "Gray"),
            Self::Rgb => write!(f, "RGB"),
        }
    }
}

/// Metadata about the source file.
#[derive(Clone, Debug)]
pub struct SourceInfo {
    pub filename: PathBuf,
    pub width: u32,
    pub height: u32,
    pub channels: usize,
}
