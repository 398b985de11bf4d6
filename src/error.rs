//! Error types for cmapkit.
//!
//! Every fallible operation in the crate reports one of these variants. Errors
//! are raised before anything is constructed, so a failed call never hands
//! back a partially built colormap.

use thiserror::Error;

/// The main error type for cmapkit operations.
#[derive(Error, Debug)]
pub enum CmapError {
    /// The colormap argument is neither a registered name nor a colormap object
    #[error("Invalid colormap reference: {reference}")]
    InvalidColormapReference { reference: String },

    /// Fewer than two distinct levels were given to a non-linear colormap
    #[error("Invalid level set: {message}")]
    InvalidLevelSet { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Image generation errors
    #[error("Image generation error: {message}")]
    ImageGeneration { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with CmapError
pub type Result<T> = std::result::Result<T, CmapError>;
