//! Output units of the spectral series
//!
//! The model always works in spectral irradiance (W / m^2 / µm) per
//! wavelength. [`Units`] decides how the global, direct and diffuse series
//! are re-expressed before they are handed back:
//!
//! | code | variant | x-axis | values |
//! |------|---------|--------|--------|
//! | 1 | [`Units::Irradiance`] | wavelength (µm) | W / m^2 / µm |
//! | 2 | [`Units::PhotonFlux`] | wavelength (µm) | 10^16 photons / cm^2 / s / µm |
//! | 3 | [`Units::PhotonFluxDensity`] | photon energy (eV) | 10^16 photons / cm^2 / s / eV |
//!
//! The extraterrestrial series is never rescaled.
//!
//! ```rust
//! use spectrl2_core::units::Units;
//!
//! let units = Units::try_from(3).unwrap();
//! assert_eq!(units, Units::PhotonFluxDensity);
//! assert!(Units::try_from(4).is_err());
//! ```

use crate::errors::SpectralError;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Planck constant
/// unit: J s
pub const PLANCK: FloatValue = 6.6261762e-34;

/// Speed of light
/// unit: µm / s
pub const SPEED_OF_LIGHT: FloatValue = 2.9979244e14;

/// Energy of one electron-volt
/// unit: J
pub const ELECTRON_VOLT: FloatValue = 1.6021891e-19;

/// Photon energy times wavelength
/// unit: eV µm
pub const PHOTON_ENERGY_WAVELENGTH: FloatValue = PLANCK * SPEED_OF_LIGHT / ELECTRON_VOLT;

/// Converts W / m^2 / µm at 1 µm into 10^16 photons / cm^2 / s / µm
pub const PHOTON_FLUX: FloatValue = 5.0340365e14;

/// Output units selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Units {
    /// Irradiance per wavelength
    #[default]
    Irradiance = 1,
    /// Photon flux per wavelength
    PhotonFlux = 2,
    /// Photon flux density per photon energy
    PhotonFluxDensity = 3,
}

impl TryFrom<i32> for Units {
    type Error = SpectralError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Units::Irradiance),
            2 => Ok(Units::PhotonFlux),
            3 => Ok(Units::PhotonFluxDensity),
            _ => Err(SpectralError::InvalidUnits(code)),
        }
    }
}

impl From<Units> for i32 {
    fn from(units: Units) -> i32 {
        units.code()
    }
}

impl Units {
    /// Integer code of these units
    pub fn code(self) -> i32 {
        self as i32
    }

    /// X-axis value reported for a table wavelength
    pub fn x_coordinate(self, wavelength: FloatValue) -> FloatValue {
        match self {
            Units::Irradiance | Units::PhotonFlux => wavelength,
            Units::PhotonFluxDensity => PHOTON_ENERGY_WAVELENGTH / wavelength,
        }
    }

    /// Factor applied to spectral irradiance (W / m^2 / µm) at `wavelength`
    ///
    /// In energy space the photon flux is additionally multiplied by the
    /// wavelength/energy Jacobian.
    pub fn scale_factor(self, wavelength: FloatValue) -> FloatValue {
        match self {
            Units::Irradiance => 1.0,
            Units::PhotonFlux => wavelength * PHOTON_FLUX,
            Units::PhotonFluxDensity => {
                wavelength * PHOTON_FLUX * wavelength / self.x_coordinate(wavelength)
            }
        }
    }
}
