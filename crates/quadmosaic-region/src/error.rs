//! Error types for quadmosaic-region

use thiserror::Error;

/// Errors that can occur during region decomposition
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadmosaic_core::Error),

    /// Top-level region with a non-positive size or non-finite coordinates
    #[error("invalid region: ({x}, {y}, {w}, {h})")]
    InvalidRegion { x: f32, y: f32, w: f32, h: f32 },

    /// Negative or non-finite variation threshold
    #[error("invalid threshold: {0}")]
    InvalidThreshold(f32),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
