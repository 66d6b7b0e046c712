use serde::{Deserialize, Serialize};

/// A single EELS spectrum: paired energy/count sequences with a unit tag
/// on the energy axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    /// Number of (energy, count) pairs
    pub n_values: usize,

    /// Energy axis values, in `energy_units`
    pub energy: Vec<f64>,

    /// Unit of the energy axis (e.g. "eV")
    pub energy_units: String,

    /// Detector counts, dimensionless
    pub count: Vec<f64>,
}

impl Spectrum {
    /// Build a spectrum from parallel energy/count vectors.
    ///
    /// Invariant: both vectors have the same length; `n_values` is derived
    /// from it.
    pub fn new(energy: Vec<f64>, energy_units: impl Into<String>, count: Vec<f64>) -> Self {
        debug_assert_eq!(energy.len(), count.len());
        Self {
            n_values: energy.len(),
            energy,
            energy_units: energy_units.into(),
            count,
        }
    }

    /// True when the spectrum holds no data points.
    pub fn is_empty(&self) -> bool {
        self.n_values == 0
    }
}
