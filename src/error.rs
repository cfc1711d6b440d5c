//! Error types for textframe.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors that can occur while queueing writes or rendering a frame.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Grid dimensions were zero or `width * height` overflowed.
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested grid width.
        width: usize,
        /// Requested grid height.
        height: usize,
    },

    /// A payload copy, queue node, or buffer allocation could not be made.
    ///
    /// Nothing is enqueued and no partial output is produced when this is
    /// returned; caller-visible state is unchanged.
    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}
