//! Error types for grid construction and engine setup.

use thiserror::Error;

/// Error type for the filter engine.
///
/// Filters themselves never fail; every variant here is a violated
/// precondition caught while building a [`Grid`](crate::Grid) or an
/// [`Engine`](crate::Engine).
#[derive(Error, Debug)]
pub enum FilterError {
    /// One of the dimensions is zero.
    #[error("grid must be at least 1x1, got {height}x{width}")]
    EmptyGrid {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// Dimensions overflow the addressable size.
    #[error("grid of {height}x{width} pixels is too large")]
    TooLarge {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },

    /// Pixel or byte buffer does not match the requested dimensions.
    #[error("data length ({actual}) does not match the grid size ({expected})")]
    DataLength {
        /// Length implied by the dimensions.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Array input does not carry exactly three channels.
    #[error("expected 3 color channels, got {0}")]
    ChannelCount(usize),

    /// ndarray rejected the shape.
    #[error("invalid shape: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// Filter name not recognised.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),

    /// Dedicated worker pool could not be built.
    #[error("failed to build thread pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for the filter engine.
pub type FilterResult<T> = Result<T, FilterError>;
