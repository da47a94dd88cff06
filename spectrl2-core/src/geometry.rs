//! The solar geometry seam
//!
//! The spectral model does not locate the sun itself. It hands a
//! [`GeometryQuery`] to a [`GeometryResolver`] and consumes the returned
//! [`SolarGeometry`] exactly once per invocation. The `spectrl2-solpos` crate
//! provides the NREL SOLPOS implementation; tests and callers with their own
//! ephemeris can supply anything else that implements the trait.

use crate::errors::GeometryError;
use crate::request::SpectralRequest;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Inputs the solar geometry resolver needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryQuery {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    /// Latitude
    /// unit: degrees north
    pub latitude: FloatValue,
    /// Longitude
    /// unit: degrees east
    pub longitude: FloatValue,
    /// Time zone
    /// unit: hours east of UTC
    pub timezone: FloatValue,
    /// Surface pressure
    /// unit: mbar
    pub pressure: FloatValue,
    /// Ambient dry-bulb temperature
    /// unit: °C
    pub temperature: FloatValue,
    /// Panel tilt from horizontal
    /// unit: degrees
    pub tilt: FloatValue,
    /// Panel azimuth (N=0, E=90, S=180, W=270)
    /// unit: degrees
    pub aspect: FloatValue,
}

impl From<&SpectralRequest> for GeometryQuery {
    fn from(request: &SpectralRequest) -> Self {
        let datetime = &request.datetime;
        let location = &request.location;
        Self {
            year: datetime.year,
            month: datetime.month,
            day: datetime.day,
            hour: datetime.hour,
            minute: datetime.minute,
            second: datetime.second,
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: location.timezone,
            pressure: request.pressure,
            temperature: request.temperature,
            tilt: request.tilt,
            aspect: request.aspect,
        }
    }
}

/// Sun position and path quantities consumed by the spectral model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarGeometry {
    /// Refraction-corrected solar zenith angle
    /// unit: degrees
    pub zenith: FloatValue,
    /// Solar azimuth (N=0, E=90, S=180, W=270)
    /// unit: degrees
    pub azimuth: FloatValue,
    /// Cosine of the angle of incidence on the tilted surface
    pub cos_incidence: FloatValue,
    /// Relative optical airmass, negative when the sun is well below the horizon
    pub airmass: FloatValue,
    /// Pressure-corrected airmass
    pub pressure_airmass: FloatValue,
    /// Earth radius vector correction (mean / actual distance, squared)
    pub earth_radius_vector: FloatValue,
    /// Day of year, 1 = January 1st
    pub day_of_year: i32,
}

impl SolarGeometry {
    /// Cosine of the refracted zenith angle
    pub fn cos_zenith(&self) -> FloatValue {
        self.zenith.to_radians().cos()
    }

    /// Whether the direct beam reaches a horizontal surface at all
    pub fn is_daylight(&self) -> bool {
        self.cos_zenith() > 0.0 && self.airmass > 0.0
    }
}

/// Anything that can locate the sun for a [`GeometryQuery`]
pub trait GeometryResolver {
    /// Resolve the sun's position, or report why the query was rejected
    fn resolve(&self, query: &GeometryQuery) -> Result<SolarGeometry, GeometryError>;
}

impl<F> GeometryResolver for F
where
    F: Fn(&GeometryQuery) -> Result<SolarGeometry, GeometryError>,
{
    fn resolve(&self, query: &GeometryQuery) -> Result<SolarGeometry, GeometryError> {
        self(query)
    }
}

/// Geometry as the rest of the pipeline sees it, after tracking has been applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    /// Tilt actually used for the tilted-surface correction
    /// unit: degrees
    pub tilt: FloatValue,
    /// Cosine of the incidence angle on the panel
    pub cos_incidence: FloatValue,
    /// Whether the panel follows the sun
    pub tracking: bool,
}

impl PanelGeometry {
    /// Apply the tracking convention: a negative requested tilt means the
    /// panel always faces the sun, so its tilt equals the zenith angle and
    /// the beam arrives at normal incidence.
    pub fn new(request: &SpectralRequest, geometry: &SolarGeometry) -> Self {
        if request.is_tracking() {
            Self {
                tilt: geometry.zenith,
                cos_incidence: 1.0,
                tracking: true,
            }
        } else {
            Self {
                tilt: request.tilt,
                cos_incidence: geometry.cos_incidence,
                tracking: false,
            }
        }
    }
}
