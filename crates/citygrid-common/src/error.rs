//! Error types for citygrid.

use thiserror::Error;

use crate::bbox::Axis;

/// Result type alias using CityGridError.
pub type CityGridResult<T> = Result<T, CityGridError>;

/// Primary error type for the heatmap pipeline.
#[derive(Debug, Error)]
pub enum CityGridError {
    // === Input Errors ===
    #[error("No points supplied; a bounding rectangle needs at least one point")]
    EmptyInput,

    #[error("Invalid coordinate at index {index}: ({latitude}, {longitude})")]
    InvalidCoordinate {
        index: usize,
        latitude: f64,
        longitude: f64,
    },

    // === Geometry Errors ===
    #[error("Invalid {axis} range: min {min}, max {max} (span must be positive)")]
    InvalidRange { axis: Axis, min: f64, max: f64 },

    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    // === Configuration Errors ===
    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Output Errors ===
    #[error("Image encoding failed: {0}")]
    EncodeError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CityGridError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by the point data rather than by configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CityGridError::EmptyInput
                | CityGridError::InvalidCoordinate { .. }
                | CityGridError::InvalidRange { .. }
        )
    }
}

impl From<serde_json::Error> for CityGridError {
    fn from(err: serde_json::Error) -> Self {
        CityGridError::invalid_parameter("config", format!("JSON error: {}", err))
    }
}
