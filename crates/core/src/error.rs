//! Error types for the lattice-fourier core.

use thiserror::Error;

/// Errors produced by coefficient estimation and its surrounding plumbing.
#[derive(Debug, Error)]
pub enum FourierError {
    /// The sampling resolution was zero, which would divide the unit square into no cells.
    #[error("invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),

    /// The wavevector enumeration radius was negative.
    #[error("invalid radius {0}: must be non-negative")]
    NegativeRadius(i64),

    /// The wavevector grid for this radius has more entries than fit in memory addressing.
    #[error("radius {0} is too large to enumerate")]
    RadiusTooLarge(i64),

    /// A field could not produce a finite value at a sample point.
    #[error("field evaluation failed at ({x}, {y}): {message}")]
    FieldEvaluation { x: f64, y: f64, message: String },

    /// A field name was not found in the registry.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A parameter existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// A numeric parameter fell outside the range its field accepts.
    #[error("parameter '{name}' = {value} is out of range [{min}, {max}]")]
    ParamOutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Reading a request file failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// A request document could not be parsed or produced.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl FourierError {
    /// True for errors raised by argument validation, before any sampling happens.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FourierError::InvalidSampleCount(_)
                | FourierError::NegativeRadius(_)
                | FourierError::RadiusTooLarge(_)
        )
    }
}
