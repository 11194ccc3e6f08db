extern crate alloc;
use alloc::string::String;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("image width and height must both be nonzero")]
    ZeroDimension,

    #[error("pixel buffer holds {len} pixels but the image is {width}x{height}")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },

    #[error("sample stride must be at least 1")]
    InvalidSampleStride,

    #[error("cluster count must be between 1 and 256, got {0}")]
    InvalidClusterCount(usize),

    #[error("malformed hex color {0:?}: expected six hex digits with an optional '#' prefix")]
    MalformedColor(String),

    #[error("palette needs at least 2 entries, got {len}")]
    InsufficientPalette { len: usize },
}
