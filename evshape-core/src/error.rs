//! Error types for evshape-core.

use thiserror::Error;

/// Result type alias for evshape operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for evshape operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid histogram binning.
    #[error("invalid histogram binning: {n_bins} bins over [{low}, {high}]")]
    InvalidBinning { n_bins: usize, low: f64, high: f64 },

    /// Histograms with different binning cannot be merged.
    #[error("incompatible histograms: {0}")]
    IncompatibleHistograms(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
