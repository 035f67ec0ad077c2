//! Indicator fields: 1 inside a centered shape, 0 outside.
//!
//! Both shapes use strict inequalities, so sample points exactly on the
//! boundary count as outside.

use lattice_fourier_core::error::FourierError;
use lattice_fourier_core::field::ScalarField;
use lattice_fourier_core::params::param_f64_in;
use lattice_fourier_core::Complex64;
use serde_json::{json, Value};

/// Default half side length of the centered square.
const DEFAULT_HALF_WIDTH: f64 = 0.25;
/// Default radius of the centered disk.
const DEFAULT_DISK_RADIUS: f64 = 0.25;
/// Center of the unit square along either axis.
const CENTER: f64 = 0.5;
/// Largest half width or radius that keeps the shape inside the unit square.
const MAX_EXTENT: f64 = 0.5;

fn indicator(inside: bool) -> Complex64 {
    Complex64::new(if inside { 1.0 } else { 0.0 }, 0.0)
}

/// Indicator of the square `|x - 0.5| < h`, `|y - 0.5| < h`.
///
/// With the default `h = 0.25` this covers a quarter of the unit square, so
/// its zero coefficient is close to 0.25.
#[derive(Debug, Clone, Copy)]
pub struct CenteredSquare {
    half_width: f64,
}

impl Default for CenteredSquare {
    fn default() -> Self {
        Self {
            half_width: DEFAULT_HALF_WIDTH,
        }
    }
}

impl CenteredSquare {
    pub fn new(half_width: f64) -> Self {
        Self { half_width }
    }

    /// Reads `half_width` from a JSON object, falling back to the default.
    /// Values outside `[0, 0.5]` are rejected.
    pub fn from_json(params: &Value) -> Result<Self, FourierError> {
        let half_width = param_f64_in(params, "half_width", DEFAULT_HALF_WIDTH, 0.0, MAX_EXTENT)?;
        Ok(Self::new(half_width))
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }
}

impl ScalarField for CenteredSquare {
    fn sample(&self, point: Complex64) -> Result<Complex64, FourierError> {
        let h = self.half_width;
        let inside = CENTER - h < point.re
            && point.re < CENTER + h
            && CENTER - h < point.im
            && point.im < CENTER + h;
        Ok(indicator(inside))
    }

    fn params(&self) -> Value {
        json!({ "half_width": self.half_width })
    }

    fn param_schema(&self) -> Value {
        json!({
            "half_width": {
                "type": "number",
                "default": DEFAULT_HALF_WIDTH,
                "min": 0.0,
                "max": MAX_EXTENT,
                "description": "Half side length of the square centered at (0.5, 0.5)"
            }
        })
    }
}

/// Indicator of the disk `|z - (0.5 + 0.5i)| < r`.
#[derive(Debug, Clone, Copy)]
pub struct CenteredDisk {
    radius: f64,
}

impl Default for CenteredDisk {
    fn default() -> Self {
        Self {
            radius: DEFAULT_DISK_RADIUS,
        }
    }
}

impl CenteredDisk {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Reads `radius` from a JSON object, falling back to the default.
    /// Values outside `[0, 0.5]` are rejected.
    pub fn from_json(params: &Value) -> Result<Self, FourierError> {
        let radius = param_f64_in(params, "radius", DEFAULT_DISK_RADIUS, 0.0, MAX_EXTENT)?;
        Ok(Self::new(radius))
    }
}

impl ScalarField for CenteredDisk {
    fn sample(&self, point: Complex64) -> Result<Complex64, FourierError> {
        let offset = point - Complex64::new(CENTER, CENTER);
        Ok(indicator(offset.norm_sqr() < self.radius * self.radius))
    }

    fn params(&self) -> Value {
        json!({ "radius": self.radius })
    }

    fn param_schema(&self) -> Value {
        json!({
            "radius": {
                "type": "number",
                "default": DEFAULT_DISK_RADIUS,
                "min": 0.0,
                "max": MAX_EXTENT,
                "description": "Radius of the disk centered at (0.5, 0.5)"
            }
        })
    }
}
