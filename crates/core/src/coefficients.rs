//! Ordered mapping from wavevector to estimated coefficient.

use crate::error::FourierError;
use crate::wavevector::{grid_index, grid_len, Wavevector};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// One estimated Fourier coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    pub wavevector: Wavevector,
    pub value: Complex64,
}

/// Coefficients for every wavevector of a grid, in enumeration order.
///
/// Built once by [`fourier_grid`](crate::estimator::fourier_grid) and read-only
/// afterwards. Lookup by wavevector is constant time because the position of
/// `(n, m)` follows from the grid radius. Deserializing checks that the
/// entries cover exactly that grid, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredCoefficientMap")]
pub struct CoefficientMap {
    radius: i64,
    entries: Vec<Coefficient>,
}

/// Unchecked wire form of [`CoefficientMap`].
#[derive(Deserialize)]
struct StoredCoefficientMap {
    radius: i64,
    entries: Vec<Coefficient>,
}

impl TryFrom<StoredCoefficientMap> for CoefficientMap {
    type Error = FourierError;

    fn try_from(stored: StoredCoefficientMap) -> Result<Self, Self::Error> {
        let StoredCoefficientMap { radius, entries } = stored;
        let expected = grid_len(radius)?;
        if entries.len() != expected {
            return Err(FourierError::Serialization(format!(
                "coefficient map of radius {radius} needs {expected} entries, found {}",
                entries.len()
            )));
        }
        let misplaced = entries
            .iter()
            .enumerate()
            .find(|(i, c)| grid_index(c.wavevector, radius) != Some(*i));
        if let Some((i, c)) = misplaced {
            return Err(FourierError::Serialization(format!(
                "coefficient {i} has wavevector {} out of grid order for radius {radius}",
                c.wavevector
            )));
        }
        Ok(Self { radius, entries })
    }
}

impl CoefficientMap {
    /// Wraps entries already in grid enumeration order for `radius`.
    pub(crate) fn from_ordered(radius: i64, entries: Vec<Coefficient>) -> Self {
        debug_assert_eq!(grid_len(radius).ok(), Some(entries.len()));
        Self { radius, entries }
    }

    /// Radius of the wavevector grid this map covers.
    pub fn radius(&self) -> i64 {
        self.radius
    }

    /// Number of coefficients.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map holds no coefficients. A valid grid always has at least one.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Coefficient for `wavevector`, or `None` if it lies outside the grid.
    pub fn get(&self, wavevector: Wavevector) -> Option<Complex64> {
        grid_index(wavevector, self.radius)
            .and_then(|i| self.entries.get(i))
            .filter(|c| c.wavevector == wavevector)
            .map(|c| c.value)
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Coefficient> + '_ {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a CoefficientMap {
    type Item = &'a Coefficient;
    type IntoIter = std::slice::Iter<'a, Coefficient>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
