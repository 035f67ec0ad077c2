#![deny(unsafe_code)]
//! Field registry: maps field names to parameterized example fields.
//!
//! This crate sits between `lattice-fourier-core` (which defines the
//! `ScalarField` trait and the estimator) and front ends such as the CLI, so
//! name-based dispatch lives in one place.

pub mod indicator;
pub mod wave;

use lattice_fourier_core::error::FourierError;
use lattice_fourier_core::field::ScalarField;
use lattice_fourier_core::Complex64;
use serde_json::Value;

/// All available field names.
const FIELD_NAMES: &[&str] = &["square", "disk", "constant", "plane-wave"];

/// Enumeration of all named fields.
///
/// Wraps each field implementation and delegates `ScalarField` methods.
/// Use [`FieldKind::from_name`] for string-based construction.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Indicator of the centered square.
    Square(indicator::CenteredSquare),
    /// Indicator of the centered disk.
    Disk(indicator::CenteredDisk),
    /// Constant real value.
    Constant(wave::Constant),
    /// Complex plane wave.
    PlaneWave(wave::PlaneWave),
}

impl FieldKind {
    /// Constructs a field by name from a JSON params object.
    ///
    /// Returns `FourierError::UnknownField` if the name is not recognized.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, FourierError> {
        match name {
            "square" => Ok(FieldKind::Square(indicator::CenteredSquare::from_json(
                params,
            )?)),
            "disk" => Ok(FieldKind::Disk(indicator::CenteredDisk::from_json(params)?)),
            "constant" => Ok(FieldKind::Constant(wave::Constant::from_json(params)?)),
            "plane-wave" => Ok(FieldKind::PlaneWave(wave::PlaneWave::from_json(params)?)),
            _ => Err(FourierError::UnknownField(name.to_string())),
        }
    }

    /// Returns a slice of all recognized field names.
    pub fn list_fields() -> &'static [&'static str] {
        FIELD_NAMES
    }
}

impl ScalarField for FieldKind {
    fn sample(&self, point: Complex64) -> Result<Complex64, FourierError> {
        match self {
            FieldKind::Square(f) => f.sample(point),
            FieldKind::Disk(f) => f.sample(point),
            FieldKind::Constant(f) => f.sample(point),
            FieldKind::PlaneWave(f) => f.sample(point),
        }
    }

    fn params(&self) -> Value {
        match self {
            FieldKind::Square(f) => f.params(),
            FieldKind::Disk(f) => f.params(),
            FieldKind::Constant(f) => f.params(),
            FieldKind::PlaneWave(f) => f.params(),
        }
    }

    fn param_schema(&self) -> Value {
        match self {
            FieldKind::Square(f) => f.param_schema(),
            FieldKind::Disk(f) => f.param_schema(),
            FieldKind::Constant(f) => f.param_schema(),
            FieldKind::PlaneWave(f) => f.param_schema(),
        }
    }
}
