#![deny(unsafe_code)]
//! Core of lattice-fourier: Riemann-sum estimates of 2-D Fourier coefficients
//! for fields on the periodic unit square.
//!
//! Provides `Wavevector` and the radius grid, `SampleGrid`, the coefficient
//! estimator, `CoefficientMap`, the magnitude/phase report formatter, the
//! `ScalarField` trait, parameter helpers, and `EstimateRequest`.

pub mod coefficients;
pub mod error;
pub mod estimator;
pub mod field;
pub mod format;
pub mod params;
pub mod request;
pub mod sample;
pub mod wavevector;

pub use coefficients::{Coefficient, CoefficientMap};
pub use error::FourierError;
pub use estimator::{estimate_at_frequency, estimate_coefficient, fourier_grid, UNIT_SQUARE_AREA};
pub use field::ScalarField;
pub use format::{format_report, CoefficientRow};
pub use num_complex::Complex64;
pub use request::EstimateRequest;
pub use sample::{complex_dot, SampleGrid};
pub use wavevector::{wavevector_grid, Wavevector};
