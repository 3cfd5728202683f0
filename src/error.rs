use alloc::string::String;
use enough::StopReason;

/// Errors from planar conversion and plane transforms.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlanarError {
    #[error("invalid pixel format: {0}")]
    InvalidFormat(String),

    #[error("unsupported component count: {0} (supported: 1..=4)")]
    UnsupportedComponentCount(u8),

    #[error("image dimensions are zero: {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("allocation of {bytes} bytes failed")]
    AllocationFailed { bytes: usize },

    #[error("row stride {row_stride} smaller than row width {min_stride} bytes")]
    StrideTooSmall { row_stride: usize, min_stride: usize },

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("plane count mismatch: format has {expected} components, got {actual} planes")]
    PlaneCountMismatch { expected: usize, actual: usize },

    #[error("plane {index} is {width}x{height}, expected {expected_width}x{expected_height}")]
    PlaneSizeMismatch {
        index: usize,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PlanarError {
    fn from(r: StopReason) -> Self {
        PlanarError::Cancelled(r)
    }
}
