/// Convenience result type used across segue.
pub type SegueResult<T> = Result<T, SegueError>;

/// Top-level error taxonomy used by effect and raster APIs.
#[derive(thiserror::Error, Debug)]
pub enum SegueError {
    /// Source and destination rasters differ in width or height.
    #[error("dimension mismatch: source {src_width}x{src_height}, destination {dst_width}x{dst_height}")]
    DimensionMismatch {
        /// Source width in pixels.
        src_width: u32,
        /// Source height in pixels.
        src_height: u32,
        /// Destination width in pixels.
        dst_width: u32,
        /// Destination height in pixels.
        dst_height: u32,
    },

    /// Progress outside `[0, 1]` or non-finite.
    #[error("invalid progress: {0} (expected a finite value in [0, 1])")]
    InvalidProgress(f32),

    /// The output buffer could not be allocated.
    #[error("allocation failure: {0}")]
    Allocation(String),

    /// Invalid user-provided configuration or raster data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SegueError {
    /// Build a [`SegueError::DimensionMismatch`] from `(width, height)` pairs.
    pub fn dimension_mismatch(src: (u32, u32), dst: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            src_width: src.0,
            src_height: src.1,
            dst_width: dst.0,
            dst_height: dst.1,
        }
    }

    /// Build a [`SegueError::Allocation`] value.
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Build a [`SegueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SegueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
