//! Render error types.

use std::collections::TryReserveError;

/// Errors that can occur while validating or executing a render request.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Width, height or scale was not positive.
    #[error("invalid render request: {0}")]
    InvalidRequest(&'static str),

    /// The raw variant code does not name a known variant.
    #[error("unknown variant code: {0}")]
    UnknownVariant(i32),

    /// The raw shade code is outside `0..=2`.
    #[error("unknown shade mode code: {0}")]
    UnknownShadeMode(i32),

    /// A shade mode name did not parse.
    #[error("unknown shade mode name: {0:?}")]
    UnknownShadeName(String),

    /// `width * height * 4` does not fit in `usize`.
    #[error("image of {width}x{height} pixels is too large to address")]
    TooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Growing the output buffer or reserving a scratch grid failed.
    #[error("failed to allocate {bytes} bytes: {source}")]
    Allocation {
        /// Size of the failed allocation.
        bytes: usize,
        /// Allocator error.
        #[source]
        source: TryReserveError,
    },
}
