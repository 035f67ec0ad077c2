//! Reproducible description of one estimation run.
//!
//! An [`EstimateRequest`] captures everything needed to recompute a report:
//! the named field, its parameters, the wavevector radius, and the sampling
//! resolution. Two identical requests produce bit-identical coefficients.

use crate::error::FourierError;
use crate::sample::SampleGrid;
use crate::wavevector::grid_len;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Radius used when a request omits it.
pub const DEFAULT_RADIUS: i64 = 1;
/// Sampling resolution used when a request omits it.
pub const DEFAULT_SAMPLES: usize = 100;

/// Reproducible specification for a coefficient estimate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EstimateRequest {
    pub field: String,
    #[serde(default = "default_radius")]
    pub radius: i64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
}

fn default_radius() -> i64 {
    DEFAULT_RADIUS
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl EstimateRequest {
    /// Creates a request with default params (`{}`).
    pub fn new(field: &str, radius: i64, samples: usize) -> Self {
        Self {
            field: field.to_string(),
            radius,
            samples,
            params: empty_params(),
        }
    }

    /// Validates the radius and sample count without evaluating anything.
    pub fn validate(&self) -> Result<(), FourierError> {
        SampleGrid::new(self.samples)?;
        grid_len(self.radius)?;
        Ok(())
    }

    /// Reads a request from a JSON file.
    pub fn load(path: &Path) -> Result<Self, FourierError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FourierError::Io(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&text).map_err(|e| FourierError::Serialization(e.to_string()))
    }
}
