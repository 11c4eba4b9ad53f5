use thiserror::Error;

/// Top-level error type for the Solidum mensuration kernel.
#[derive(Debug, Error)]
pub enum SolidumError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors raised while validating raw user inputs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("field {field}: `{text}` is not a number")]
    InvalidNumber { field: &'static str, text: String },

    #[error("field {field}: dimension {value} is negative")]
    NegativeDimension { field: &'static str, value: f64 },
}

/// Errors related to symbolic and geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("square root of a negative quantity: {0}")]
    NegativeRoot(f64),

    #[error("square root has no closed form: {0}")]
    IrrationalRoot(String),

    #[error("division by zero")]
    DivisionByZero,
}

/// Errors related to preview tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),

    #[error("degenerate solid: {0}")]
    Degenerate(String),
}

/// Convenience type alias for results using [`SolidumError`].
pub type Result<T> = std::result::Result<T, SolidumError>;
