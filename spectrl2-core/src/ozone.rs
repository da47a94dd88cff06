//! Total column ozone
//!
//! When the caller does not know the ozone column, it is estimated from the
//! day of year and the observer's position with an empirical seasonal and
//! longitudinal variation whose amplitude grows with latitude:
//!
//! $$O_3 = 0.235 + \frac{\left(c_1 + c_3 \sin(0.9865 (d + c_4)) + 20 \sin(c_5 (\lambda + c_6))\right) \sin^2(c_2 \phi)}{1000}$$
//!
//! with angles in degrees, $d$ the day of year, $\lambda$ the longitude and
//! $\phi$ the latitude. The northern and southern hemispheres use different
//! coefficient sets.

use crate::FloatValue;
use log::debug;

/// Coefficients of the empirical ozone estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OzoneCoefficients {
    /// Base amplitude
    pub c1: FloatValue,
    /// Latitude multiplier
    pub c2: FloatValue,
    /// Seasonal amplitude
    pub c3: FloatValue,
    /// Seasonal phase (days)
    pub c4: FloatValue,
    /// Longitude frequency
    pub c5: FloatValue,
    /// Longitude phase (degrees)
    pub c6: FloatValue,
}

impl OzoneCoefficients {
    /// Coefficients for an observer at `latitude`, `longitude`
    pub fn for_location(latitude: FloatValue, longitude: FloatValue) -> Self {
        if latitude >= 0.0 {
            Self {
                c1: 150.0,
                c2: 1.28,
                c3: 40.0,
                c4: -30.0,
                c5: 3.0,
                c6: if longitude > 0.0 { 20.0 } else { 0.0 },
            }
        } else {
            Self {
                c1: 100.0,
                c2: 1.5,
                c3: 30.0,
                c4: 152.625,
                c5: 2.0,
                c6: -75.0,
            }
        }
    }
}

/// Estimate total column ozone (atm-cm)
pub fn estimate_ozone(day_of_year: i32, latitude: FloatValue, longitude: FloatValue) -> FloatValue {
    let c = OzoneCoefficients::for_location(latitude, longitude);

    let seasonal = (0.9865 * (day_of_year as FloatValue + c.c4)).to_radians().sin();
    let longitudinal = (c.c5 * (longitude + c.c6)).to_radians().sin();
    let latitudinal = (c.c2 * latitude).to_radians().sin();

    0.235 + (c.c1 + c.c3 * seasonal + 20.0 * longitudinal) * latitudinal.powi(2) / 1000.0
}

/// The ozone column to use: the caller's value when given, otherwise an estimate
pub fn resolve_ozone(
    ozone: Option<FloatValue>,
    day_of_year: i32,
    latitude: FloatValue,
    longitude: FloatValue,
) -> FloatValue {
    match ozone {
        Some(value) => value,
        None => {
            let estimate = estimate_ozone(day_of_year, latitude, longitude);
            debug!(
                "estimated ozone column {:.4} atm-cm for day {} at ({}, {})",
                estimate, day_of_year, latitude, longitude
            );
            estimate
        }
    }
}
