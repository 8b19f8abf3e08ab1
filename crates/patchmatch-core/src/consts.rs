/// Default side length of a square patch, in pixels.
pub const DEFAULT_PATCH_SIZE: usize = 16;

/// Default number of propagation + random search iterations.
pub const DEFAULT_ITERATIONS: usize = 3;

/// Largest supported zeroed border width. Only 0 and 1 are accepted.
pub const MAX_BORDER_SIZE: usize = 1;

/// Propagation only starts once two already-visited neighbors exist along each axis.
pub const PREDICTOR_REACH: usize = 2;

/// Default sigma multiplier for MeanMinusSigma distance thresholding.
pub const DEFAULT_SIGMA_MULTIPLIER: f64 = 1.0;

/// Default minimum |di| + |dj| for a match to be considered a copy rather than
/// a near-self match of a smooth area.
pub const DEFAULT_MIN_OFFSET: usize = 8;

/// Default minimum connected region area (cells) kept in the suspicious mask.
pub const DEFAULT_MIN_REGION_AREA: usize = 16;

/// Number of histogram bins for Otsu's thresholding.
pub const OTSU_HISTOGRAM_BINS: usize = 256;

/// Copper colormap slope of the red channel (saturates at x = 0.8).
pub const COPPER_R: f32 = 1.25;

/// Copper colormap slope of the green channel.
pub const COPPER_G: f32 = 0.7812;

/// Copper colormap slope of the blue channel.
pub const COPPER_B: f32 = 0.4975;
