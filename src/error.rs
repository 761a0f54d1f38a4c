//! Error types for funcplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for funcplot operations.
pub type Result<T> = std::result::Result<T, FuncPlotError>;

/// Errors that can occur in funcplot.
#[derive(Debug, Error)]
pub enum FuncPlotError {
    /// A scale of zero or below would collapse or mirror the coordinate frame.
    #[error("scale must be positive, got {scale}")]
    NonPositiveScale { scale: f64 },

    /// A viewport with a non-positive dimension cannot host a frame.
    #[error("viewport dimensions must be positive, got {width}x{height}")]
    EmptyViewport { width: f64, height: f64 },

    /// A configuration knob holds a value outside its accepted range.
    #[error("invalid config value for {field}: {value}")]
    InvalidConfig { field: &'static str, value: f64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FuncPlotError {
    /// Create a NonPositiveScale error.
    pub fn non_positive_scale(scale: f64) -> Self {
        Self::NonPositiveScale { scale }
    }

    /// Create an EmptyViewport error.
    pub fn empty_viewport(width: f64, height: f64) -> Self {
        Self::EmptyViewport { width, height }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(field: &'static str, value: f64) -> Self {
        Self::InvalidConfig { field, value }
    }
}
