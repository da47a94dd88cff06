//! Spectral model request
//!
//! A [`SpectralRequest`] describes one evaluation of the model: where and when
//! the sun is observed, the state of the atmosphere, how the collector is
//! oriented and which units the caller wants back. Defaults follow the
//! conventional initialisation of the model (rural aerosol, flat 0.2 ground
//! reflectance, horizontal south-facing surface, irradiance units).
//!
//! Requests can be built in code or read from TOML:
//!
//! ```rust
//! use spectrl2_core::request::SpectralRequest;
//!
//! let request = SpectralRequest::from_toml_str(
//!     r#"
//!     tau500 = 0.2
//!     watvap = 1.36
//!     pressure = 1006.0
//!     temperature = 27.0
//!     tilt = 33.65
//!     aspect = 135.0
//!
//!     [location]
//!     latitude = 33.65
//!     longitude = -84.43
//!     timezone = -5.0
//!
//!     [datetime]
//!     year = 1999
//!     month = 7
//!     day = 22
//!     hour = 9
//!     minute = 45
//!     second = 37
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(request.alpha, 1.14);
//! assert_eq!(request.ozone, None);
//! assert_eq!(request.datetime.day, 22);
//! ```

use crate::errors::{SpectralError, Spectrl2Result};
use crate::reflectance::ReflectanceCurve;
use crate::units::Units;
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Observer position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// unit: degrees north (south negative)
    pub latitude: FloatValue,
    /// unit: degrees east (west negative)
    pub longitude: FloatValue,
    /// Time zone of the supplied local standard time, no daylight saving
    /// unit: hours east of UTC
    pub timezone: FloatValue,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            timezone: 0.0,
        }
    }
}

/// Local standard time of the observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTime {
    /// 4-digit year
    pub year: i32,
    /// 1 = January
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl DateTime {
    pub fn new(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl Default for DateTime {
    fn default() -> Self {
        Self::new(2000, 1, 1, 12, 0, 0)
    }
}

fn default_alpha() -> FloatValue {
    1.14
}

fn default_aspect() -> FloatValue {
    180.0
}

fn default_assym() -> FloatValue {
    0.65
}

fn default_pressure() -> FloatValue {
    1013.0
}

fn default_temperature() -> FloatValue {
    15.0
}

/// Everything needed for a single evaluation of the spectral model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectralRequest {
    /// Power on the Angstrom turbidity
    #[serde(default = "default_alpha")]
    pub alpha: FloatValue,
    /// Collector azimuth (N=0, E=90, S=180, W=270)
    /// unit: degrees
    #[serde(default = "default_aspect")]
    pub aspect: FloatValue,
    /// Aerosol asymmetry factor, exclusive (0, 1)
    #[serde(default = "default_assym")]
    pub assym: FloatValue,
    /// Total column ozone; estimated from date and location when `None`
    /// unit: atm-cm
    #[serde(default)]
    pub ozone: Option<FloatValue>,
    /// Surface pressure
    /// unit: mbar
    #[serde(default = "default_pressure")]
    pub pressure: FloatValue,
    /// Ambient dry-bulb temperature
    /// unit: °C
    #[serde(default = "default_temperature")]
    pub temperature: FloatValue,
    /// Aerosol optical depth at 0.5 µm, base e; required
    #[serde(default)]
    pub tau500: Option<FloatValue>,
    /// Collector tilt from horizontal; negative values select sun tracking
    /// unit: degrees
    #[serde(default)]
    pub tilt: FloatValue,
    /// Precipitable water vapour; required
    /// unit: cm
    #[serde(default)]
    pub watvap: Option<FloatValue>,
    /// Output units
    #[serde(default)]
    pub units: Units,
    // TOML tables must follow the plain keys
    pub location: Location,
    pub datetime: DateTime,
    /// Ground reflectance
    #[serde(default)]
    pub reflectance: ReflectanceCurve,
}

impl Default for SpectralRequest {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            aspect: default_aspect(),
            assym: default_assym(),
            ozone: None,
            pressure: default_pressure(),
            temperature: default_temperature(),
            tau500: None,
            tilt: 0.0,
            watvap: None,
            units: Units::default(),
            location: Location::default(),
            datetime: DateTime::default(),
            reflectance: ReflectanceCurve::default(),
        }
    }
}

impl SpectralRequest {
    /// A request at `location` and `datetime` with every other field defaulted
    pub fn new(location: Location, datetime: DateTime) -> Self {
        Self {
            location,
            datetime,
            ..Default::default()
        }
    }

    /// Whether the collector follows the sun
    pub fn is_tracking(&self) -> bool {
        self.tilt < 0.0
    }

    /// Parse a request from a TOML document
    pub fn from_toml_str(content: &str) -> Spectrl2Result<Self> {
        toml::from_str(content).map_err(|e| SpectralError::Config(e.to_string()))
    }

    /// Render the request as a TOML document
    pub fn to_toml_string(&self) -> Spectrl2Result<String> {
        toml::to_string(self).map_err(|e| SpectralError::Config(e.to_string()))
    }
}
