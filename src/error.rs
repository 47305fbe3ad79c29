use thiserror::Error;

/// Top-level error type for building mesh generation.
#[derive(Debug, Error)]
pub enum BuildingError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised while validating building parameters.
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("sides = {value} is out of range [{min}, {max}]")]
    SidesOutOfRange { value: u32, min: u32, max: u32 },

    #[error("{parameter} must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be finite, got {value}")]
    NotFinite { parameter: &'static str, value: f64 },
}

/// Errors related to reading and writing mesh documents.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to format document")]
    Format(#[from] std::fmt::Error),
}

/// Convenience type alias for results using [`BuildingError`].
pub type Result<T> = std::result::Result<T, BuildingError>;
