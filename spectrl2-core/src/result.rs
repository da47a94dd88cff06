//! Spectral model output
//!
//! Five parallel series of [`BAND_COUNT`] values, one entry per band of the
//! wavelength table in ascending wavelength order. In
//! [`Units::PhotonFluxDensity`] the x-axis holds photon energies, which
//! therefore *descend*.

use crate::band_table::{BAND_COUNT, BAND_TABLE};
use crate::units::{Units, PHOTON_ENERGY_WAVELENGTH};
use crate::FloatValue;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// One band of a [`SpectralResult`]: (x, etr, direct, diffuse, global)
pub type ResultRow = (FloatValue, FloatValue, FloatValue, FloatValue, FloatValue);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralResult {
    /// Units of `x`, `direct`, `diffuse` and `global`
    pub units: Units,
    /// Wavelength (µm) or photon energy (eV)
    pub x: Array1<FloatValue>,
    /// Extraterrestrial spectrum corrected for the earth-sun distance
    /// unit: W / m^2 / µm, independent of `units`
    pub etr: Array1<FloatValue>,
    /// Direct normal irradiance
    pub direct: Array1<FloatValue>,
    /// Diffuse irradiance on the collector
    pub diffuse: Array1<FloatValue>,
    /// Global irradiance on the collector
    pub global: Array1<FloatValue>,
}

impl Default for SpectralResult {
    fn default() -> Self {
        Self::zeros(Units::default())
    }
}

impl SpectralResult {
    /// An all-zero result sized to the band table
    pub fn zeros(units: Units) -> Self {
        Self {
            units,
            x: Array1::zeros(BAND_COUNT),
            etr: Array1::zeros(BAND_COUNT),
            direct: Array1::zeros(BAND_COUNT),
            diffuse: Array1::zeros(BAND_COUNT),
            global: Array1::zeros(BAND_COUNT),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Table wavelengths (µm), whatever the x-axis currently holds
    pub fn wavelengths(&self) -> Array1<FloatValue> {
        match self.units {
            Units::PhotonFluxDensity => self.x.mapv(|energy| PHOTON_ENERGY_WAVELENGTH / energy),
            Units::Irradiance | Units::PhotonFlux => self.x.clone(),
        }
    }

    /// Re-express the result in other units
    ///
    /// The irradiance series are first brought back to W / m^2 / µm using the
    /// table wavelengths and then rescaled, so any sequence of conversions
    /// only accumulates floating-point rounding.
    pub fn convert(&self, units: Units) -> SpectralResult {
        let mut converted = self.clone();
        converted.units = units;

        for (i, band) in BAND_TABLE.iter().enumerate().take(self.len()) {
            let wl = band.wavelength;
            let factor = units.scale_factor(wl) / self.units.scale_factor(wl);

            converted.x[i] = units.x_coordinate(wl);
            converted.direct[i] *= factor;
            converted.diffuse[i] *= factor;
            converted.global[i] *= factor;
        }
        converted
    }

    /// Row `index` as (x, etr, direct, diffuse, global)
    pub fn row(&self, index: usize) -> Option<ResultRow> {
        if index >= self.len() {
            return None;
        }
        Some((
            self.x[index],
            self.etr[index],
            self.direct[index],
            self.diffuse[index],
            self.global[index],
        ))
    }
}
