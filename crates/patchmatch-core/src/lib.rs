pub mod consts;
pub mod detection;
pub mod error;
pub mod field;
pub mod frame;
pub mod io;
pub mod metric;
pub mod patch;
pub mod patchmatch;
pub mod pipeline;

pub use error::{PatchMatchError, Result};
pub use field::{DistanceField, NnField, Offset};
pub use frame::Frame;
pub use metric::{DistanceKind, PatchDistance};
pub use patchmatch::{PatchMatch, PatchMatchConfig, PatchMatchOutput};
