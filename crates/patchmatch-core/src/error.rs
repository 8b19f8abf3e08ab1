use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchMatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Representative pixel ({row}, {col}) is out of bounds for a {height}x{width} field")]
    OutOfBounds {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

impl PatchMatchError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, PatchMatchError>;
