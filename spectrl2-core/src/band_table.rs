//! Extraterrestrial spectrum and atmospheric absorption coefficients
//!
//! The 122 wavelengths of the Bird–Riordan model, from 0.3 µm to 4.0 µm, each
//! carrying the extraterrestrial irradiance at mean earth–sun distance and the
//! water vapour, ozone and uniformly mixed gas absorption coefficients used by
//! the transmittance equations (SERI/TR-215-2436, Table 1).
//!
//! ```rust
//! use spectrl2_core::band_table::{BAND_COUNT, BAND_TABLE};
//!
//! assert_eq!(BAND_TABLE.len(), BAND_COUNT);
//! assert_eq!(BAND_TABLE[0].wavelength, 0.3);
//! assert_eq!(BAND_TABLE[BAND_COUNT - 1].wavelength, 4.0);
//! ```

use crate::FloatValue;
use serde::Serialize;

/// Number of wavelengths resolved by the model
pub const BAND_COUNT: usize = 122;

/// A single row of the wavelength band table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WavelengthBand {
    /// Wavelength
    /// unit: µm
    pub wavelength: FloatValue,
    /// Extraterrestrial irradiance at mean earth-sun distance
    /// unit: W / m^2 / µm
    pub etr: FloatValue,
    /// Water vapour absorption coefficient
    pub water_vapour: FloatValue,
    /// Ozone absorption coefficient
    pub ozone: FloatValue,
    /// Uniformly mixed gas "absorption coefficient"
    pub mixed_gas: FloatValue,
}

const fn band(
    wavelength: FloatValue,
    etr: FloatValue,
    water_vapour: FloatValue,
    ozone: FloatValue,
    mixed_gas: FloatValue,
) -> WavelengthBand {
    WavelengthBand {
        wavelength,
        etr,
        water_vapour,
        ozone,
        mixed_gas,
    }
}

/// The wavelength band table, ascending by wavelength
#[rustfmt::skip]
pub static BAND_TABLE: [WavelengthBand; BAND_COUNT] = [
    band(0.3, 535.9, 0.0, 10.0, 0.0),
    band(0.305, 558.3, 0.0, 4.8, 0.0),
    band(0.31, 622.0, 0.0, 2.7, 0.0),
    band(0.315, 692.7, 0.0, 1.35, 0.0),
    band(0.32, 715.1, 0.0, 0.8, 0.0),
    band(0.325, 832.9, 0.0, 0.38, 0.0),
    band(0.33, 961.9, 0.0, 0.16, 0.0),
    band(0.335, 931.9, 0.0, 0.075, 0.0),
    band(0.34, 900.6, 0.0, 0.04, 0.0),
    band(0.345, 911.3, 0.0, 0.019, 0.0),
    band(0.35, 975.5, 0.0, 0.007, 0.0),
    band(0.36, 975.9, 0.0, 0.0, 0.0),
    band(0.37, 1119.9, 0.0, 0.0, 0.0),
    band(0.38, 1103.8, 0.0, 0.0, 0.0),
    band(0.39, 1033.8, 0.0, 0.0, 0.0),
    band(0.4, 1479.1, 0.0, 0.0, 0.0),
    band(0.41, 1701.3, 0.0, 0.0, 0.0),
    band(0.42, 1740.4, 0.0, 0.0, 0.0),
    band(0.43, 1587.2, 0.0, 0.0, 0.0),
    band(0.44, 1837.0, 0.0, 0.0, 0.0),
    band(0.45, 2005.0, 0.0, 0.003, 0.0),
    band(0.46, 2043.0, 0.0, 0.006, 0.0),
    band(0.47, 1987.0, 0.0, 0.009, 0.0),
    band(0.48, 2027.0, 0.0, 0.014, 0.0),
    band(0.49, 1896.0, 0.0, 0.021, 0.0),
    band(0.5, 1909.0, 0.0, 0.03, 0.0),
    band(0.51, 1927.0, 0.0, 0.04, 0.0),
    band(0.52, 1831.0, 0.0, 0.048, 0.0),
    band(0.53, 1891.0, 0.0, 0.063, 0.0),
    band(0.54, 1898.0, 0.0, 0.075, 0.0),
    band(0.55, 1892.0, 0.0, 0.085, 0.0),
    band(0.57, 1840.0, 0.0, 0.12, 0.0),
    band(0.593, 1768.0, 0.075, 0.119, 0.0),
    band(0.61, 1728.0, 0.0, 0.12, 0.0),
    band(0.63, 1658.0, 0.0, 0.09, 0.0),
    band(0.656, 1524.0, 0.0, 0.065, 0.0),
    band(0.6676, 1531.0, 0.0, 0.051, 0.0),
    band(0.69, 1420.0, 0.016, 0.028, 0.15),
    band(0.71, 1399.0, 0.0125, 0.018, 0.0),
    band(0.718, 1374.0, 1.8, 0.015, 0.0),
    band(0.7244, 1373.0, 2.5, 0.012, 0.0),
    band(0.74, 1298.0, 0.061, 0.01, 0.0),
    band(0.7525, 1269.0, 0.0008, 0.008, 0.0),
    band(0.7575, 1245.0, 0.0001, 0.007, 0.0),
    band(0.7625, 1223.0, 0.00001, 0.006, 4.0),
    band(0.7675, 1205.0, 0.00001, 0.005, 0.35),
    band(0.78, 1183.0, 0.0006, 0.0, 0.0),
    band(0.8, 1148.0, 0.036, 0.0, 0.0),
    band(0.816, 1091.0, 1.6, 0.0, 0.0),
    band(0.8237, 1062.0, 2.5, 0.0, 0.0),
    band(0.8315, 1038.0, 0.5, 0.0, 0.0),
    band(0.84, 1022.0, 0.155, 0.0, 0.0),
    band(0.86, 998.7, 0.00001, 0.0, 0.0),
    band(0.88, 947.2, 0.0026, 0.0, 0.0),
    band(0.905, 893.2, 7.0, 0.0, 0.0),
    band(0.915, 868.2, 5.0, 0.0, 0.0),
    band(0.925, 829.7, 5.0, 0.0, 0.0),
    band(0.93, 830.3, 27.0, 0.0, 0.0),
    band(0.937, 814.0, 55.0, 0.0, 0.0),
    band(0.948, 786.9, 45.0, 0.0, 0.0),
    band(0.965, 768.3, 4.0, 0.0, 0.0),
    band(0.98, 767.0, 1.48, 0.0, 0.0),
    band(0.9935, 757.6, 0.1, 0.0, 0.0),
    band(1.04, 688.1, 0.00001, 0.0, 0.0),
    band(1.07, 640.7, 0.001, 0.0, 0.0),
    band(1.1, 606.2, 3.2, 0.0, 0.0),
    band(1.12, 585.9, 115.0, 0.0, 0.0),
    band(1.13, 570.2, 70.0, 0.0, 0.0),
    band(1.145, 564.1, 75.0, 0.0, 0.0),
    band(1.161, 544.2, 10.0, 0.0, 0.0),
    band(1.17, 533.4, 5.0, 0.0, 0.0),
    band(1.2, 501.6, 2.0, 0.0, 0.0),
    band(1.24, 477.5, 0.002, 0.0, 0.05),
    band(1.27, 442.7, 0.002, 0.0, 0.3),
    band(1.29, 440.0, 0.1, 0.0, 0.02),
    band(1.32, 416.8, 4.0, 0.0, 0.0002),
    band(1.35, 391.4, 200.0, 0.0, 0.00011),
    band(1.395, 358.9, 1000.0, 0.0, 0.00001),
    band(1.4425, 327.5, 185.0, 0.0, 0.05),
    band(1.4625, 317.5, 80.0, 0.0, 0.011),
    band(1.477, 307.3, 80.0, 0.0, 0.005),
    band(1.497, 300.4, 12.0, 0.0, 0.0006),
    band(1.52, 292.8, 0.16, 0.0, 0.0),
    band(1.539, 275.5, 0.002, 0.0, 0.005),
    band(1.558, 272.1, 0.0005, 0.0, 0.13),
    band(1.578, 259.3, 0.0001, 0.0, 0.04),
    band(1.592, 246.9, 0.00001, 0.0, 0.06),
    band(1.61, 244.0, 0.0001, 0.0, 0.13),
    band(1.63, 243.5, 0.001, 0.0, 0.001),
    band(1.646, 234.8, 0.01, 0.0, 0.0014),
    band(1.678, 220.5, 0.036, 0.0, 0.0001),
    band(1.74, 190.8, 1.1, 0.0, 0.00001),
    band(1.8, 171.1, 130.0, 0.0, 0.00001),
    band(1.86, 144.5, 1000.0, 0.0, 0.0001),
    band(1.92, 135.7, 500.0, 0.0, 0.001),
    band(1.96, 123.0, 100.0, 0.0, 4.3),
    band(1.985, 123.8, 4.0, 0.0, 0.2),
    band(2.005, 113.0, 2.9, 0.0, 21.0),
    band(2.035, 108.5, 1.0, 0.0, 0.13),
    band(2.065, 97.5, 0.4, 0.0, 1.0),
    band(2.1, 92.4, 0.22, 0.0, 0.08),
    band(2.148, 82.4, 0.25, 0.0, 0.001),
    band(2.198, 74.6, 0.33, 0.0, 0.00038),
    band(2.27, 68.3, 0.5, 0.0, 0.001),
    band(2.36, 63.8, 4.0, 0.0, 0.0005),
    band(2.45, 49.5, 80.0, 0.0, 0.00015),
    band(2.5, 48.5, 310.0, 0.0, 0.00014),
    band(2.6, 38.6, 15000.0, 0.0, 0.00066),
    band(2.7, 36.6, 22000.0, 0.0, 100.0),
    band(2.8, 32.0, 8000.0, 0.0, 150.0),
    band(2.9, 28.1, 650.0, 0.0, 0.13),
    band(3.0, 24.8, 240.0, 0.0, 0.0095),
    band(3.1, 22.1, 230.0, 0.0, 0.001),
    band(3.2, 19.6, 100.0, 0.0, 0.8),
    band(3.3, 17.5, 120.0, 0.0, 1.9),
    band(3.4, 15.7, 19.5, 0.0, 1.3),
    band(3.5, 14.1, 3.6, 0.0, 0.075),
    band(3.6, 12.7, 3.1, 0.0, 0.01),
    band(3.7, 11.5, 2.5, 0.0, 0.00195),
    band(3.8, 10.4, 1.4, 0.0, 0.004),
    band(3.9, 9.5, 0.17, 0.0, 0.29),
    band(4.0, 8.6, 0.0045, 0.0, 0.025),
];

/// Iterate over the table wavelengths in ascending order
pub fn wavelengths() -> impl Iterator<Item = FloatValue> {
    BAND_TABLE.iter().map(|band| band.wavelength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_strictly_ascending() {
        assert!(BAND_TABLE
            .windows(2)
            .all(|pair| pair[0].wavelength < pair[1].wavelength));
    }

    #[test]
    fn table_covers_model_domain() {
        assert_eq!(BAND_TABLE.first().unwrap().wavelength, 0.3);
        assert_eq!(BAND_TABLE.last().unwrap().wavelength, 4.0);
        assert_eq!(wavelengths().count(), BAND_COUNT);
    }

    #[test]
    fn coefficients_are_non_negative() {
        for band in BAND_TABLE.iter() {
            assert!(band.etr > 0.0, "{:?}", band);
            assert!(band.water_vapour >= 0.0, "{:?}", band);
            assert!(band.ozone >= 0.0, "{:?}", band);
            assert!(band.mixed_gas >= 0.0, "{:?}", band);
        }
    }

    #[test]
    fn spot_check_rows() {
        // Peak of the extraterrestrial spectrum
        assert_eq!(BAND_TABLE[21].wavelength, 0.46);
        assert_eq!(BAND_TABLE[21].etr, 2043.0);

        // Oxygen A band
        assert_eq!(BAND_TABLE[44].wavelength, 0.7625);
        assert_eq!(BAND_TABLE[44].mixed_gas, 4.0);

        // Strongest water vapour absorption
        assert_eq!(BAND_TABLE[108].water_vapour, 22000.0);
    }
}
