//! Bird & Riordan simple solar spectral model
//!
//! `spectrl2` computes clear-sky direct, diffuse and global spectral
//! irradiance at 122 wavelengths between 0.3 µm and 4.0 µm for a (possibly
//! tilted or sun-tracking) surface, locating the sun with NREL's SOLPOS.
//!
//! ```rust
//! use spectrl2::{spectrl2, DateTime, Location, SpectralRequest};
//!
//! let request = SpectralRequest {
//!     tau500: Some(0.2),
//!     watvap: Some(1.36),
//!     pressure: 1006.0,
//!     temperature: 27.0,
//!     tilt: 33.65,
//!     aspect: 135.0,
//!     ..SpectralRequest::new(
//!         Location {
//!             latitude: 33.65,
//!             longitude: -84.43,
//!             timezone: -5.0,
//!         },
//!         DateTime::new(1999, 7, 22, 9, 45, 37),
//!     )
//! };
//!
//! let result = spectrl2(&request).unwrap();
//! assert!((result.global[30] - 1457.9).abs() < 0.1);
//! ```
//!
//! The building blocks live in [`spectrl2_core`] (the transmission model and
//! its request/result types) and [`spectrl2_solpos`] (the solar position
//! algorithm); the most used items are re-exported here.

use log::debug;
use serde::{Deserialize, Serialize};

pub use spectrl2_core::errors::{GeometryError, SpectralError, Spectrl2Result};
pub use spectrl2_core::geometry::{GeometryQuery, GeometryResolver, SolarGeometry};
pub use spectrl2_core::model::SpectralModel;
pub use spectrl2_core::reflectance::ReflectanceCurve;
pub use spectrl2_core::request::{DateTime, Location, SpectralRequest};
pub use spectrl2_core::result::SpectralResult;
pub use spectrl2_core::units::Units;
pub use spectrl2_core::FloatValue;
pub use spectrl2_solpos::{
    SolarPosition, Solpos, SolposConfig, SolposError, SolposErrorKind, SolposResult,
};

/// Evaluate the spectral model, locating the sun with SOLPOS
pub fn spectrl2(request: &SpectralRequest) -> Spectrl2Result<SpectralResult> {
    debug!(
        "spectrl2 at ({}, {}) on {:?}",
        request.location.latitude, request.location.longitude, request.datetime
    );
    SpectralModel::compute(request, &Solpos::new())
}

/// Sun angles and airmass for a horizontal surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolposAm {
    /// Refracted solar zenith angle
    /// unit: degrees
    pub zenith: FloatValue,
    /// Solar azimuth (N=0, E=90, S=180, W=270)
    /// unit: degrees
    pub azimuth: FloatValue,
    /// Relative optical airmass, -1 when the sun is down
    pub airmass: FloatValue,
    /// Pressure-corrected airmass, -1 when the sun is down
    pub pressure_airmass: FloatValue,
    /// Day of year, 1 = January 1st
    pub day_of_year: i32,
    /// Measurement interval used by SOLPOS
    /// unit: seconds
    pub interval: i32,
}

fn horizontal_query(
    location: &Location,
    datetime: &DateTime,
    pressure: FloatValue,
    temperature: FloatValue,
) -> GeometryQuery {
    GeometryQuery {
        year: datetime.year,
        month: datetime.month,
        day: datetime.day,
        hour: datetime.hour,
        minute: datetime.minute,
        second: datetime.second,
        latitude: location.latitude,
        longitude: location.longitude,
        timezone: location.timezone,
        pressure,
        temperature,
        tilt: 0.0,
        aspect: 180.0,
    }
}

/// Solar zenith, azimuth and airmass at `location` and `datetime`
///
/// `pressure` is the surface pressure in mbar and `temperature` the ambient
/// dry-bulb temperature in °C, both used for the refraction correction.
pub fn solpos_am(
    location: &Location,
    datetime: &DateTime,
    pressure: FloatValue,
    temperature: FloatValue,
) -> SolposResult<SolposAm> {
    let solpos = Solpos::new();
    let query = horizontal_query(location, datetime, pressure, temperature);
    let position = solpos.position(&query)?;

    Ok(SolposAm {
        zenith: position.zenith,
        azimuth: position.azimuth,
        airmass: position.airmass,
        pressure_airmass: position.pressure_airmass,
        day_of_year: position.day_of_year,
        interval: solpos.config().interval,
    })
}
