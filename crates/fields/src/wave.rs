//! Smooth fields: a constant and a complex plane wave.

use lattice_fourier_core::error::FourierError;
use lattice_fourier_core::field::{ensure_finite, ScalarField};
use lattice_fourier_core::params::param_f64;
use lattice_fourier_core::{complex_dot, Complex64};
use serde_json::{json, Value};

const DEFAULT_VALUE: f64 = 1.0;
const DEFAULT_N: f64 = 1.0;
const DEFAULT_M: f64 = 0.0;
const DEFAULT_AMPLITUDE: f64 = 1.0;

/// The same real value everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Constant {
    value: f64,
}

impl Default for Constant {
    fn default() -> Self {
        Self {
            value: DEFAULT_VALUE,
        }
    }
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    pub fn from_json(params: &Value) -> Result<Self, FourierError> {
        Ok(Self::new(param_f64(params, "value", DEFAULT_VALUE)?))
    }
}

impl ScalarField for Constant {
    fn sample(&self, point: Complex64) -> Result<Complex64, FourierError> {
        ensure_finite(point, Complex64::new(self.value, 0.0))
    }

    fn params(&self) -> Value {
        json!({ "value": self.value })
    }

    fn param_schema(&self) -> Value {
        json!({
            "value": {
                "type": "number",
                "default": DEFAULT_VALUE,
                "description": "Value of the field at every point"
            }
        })
    }
}

/// `amplitude * exp(i * (n * x + m * y))`.
///
/// `n` and `m` are angular frequencies and need not be integers. The
/// estimate at wavevector `(n, m)` recovers `amplitude`.
#[derive(Debug, Clone, Copy)]
pub struct PlaneWave {
    frequency: Complex64,
    amplitude: f64,
}

impl Default for PlaneWave {
    fn default() -> Self {
        Self::new(DEFAULT_N, DEFAULT_M, DEFAULT_AMPLITUDE)
    }
}

impl PlaneWave {
    pub fn new(n: f64, m: f64, amplitude: f64) -> Self {
        Self {
            frequency: Complex64::new(n, m),
            amplitude,
        }
    }

    /// Reads `n`, `m`, and `amplitude` from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Result<Self, FourierError> {
        Ok(Self::new(
            param_f64(params, "n", DEFAULT_N)?,
            param_f64(params, "m", DEFAULT_M)?,
            param_f64(params, "amplitude", DEFAULT_AMPLITUDE)?,
        ))
    }
}

impl ScalarField for PlaneWave {
    fn sample(&self, point: Complex64) -> Result<Complex64, FourierError> {
        let phase = complex_dot(self.frequency, point);
        ensure_finite(point, Complex64::from_polar(self.amplitude, phase))
    }

    fn params(&self) -> Value {
        json!({
            "n": self.frequency.re,
            "m": self.frequency.im,
            "amplitude": self.amplitude,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "n": {
                "type": "number",
                "default": DEFAULT_N,
                "description": "Angular frequency along x"
            },
            "m": {
                "type": "number",
                "default": DEFAULT_M,
                "description": "Angular frequency along y"
            },
            "amplitude": {
                "type": "number",
                "default": DEFAULT_AMPLITUDE,
                "description": "Modulus of the wave"
            }
        })
    }
}
