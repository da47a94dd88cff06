//! Solar position and intensity
//!
//! An implementation of NREL's SOLPOS 2.0, itself based on the almanac
//! algorithm of Michalsky (1988) with the corrections of Spencer (1989). The
//! computation runs as a chain of small stages, each consuming the results of
//! the ones before:
//!
//! 1. day of year and the earth radius vector,
//! 2. Julian day and the sun's ecliptic and equatorial coordinates,
//! 3. sidereal time and the local hour angle,
//! 4. the unrefracted zenith and the azimuth,
//! 5. atmospheric refraction and the optical airmass,
//! 6. sunrise, sunset, true solar time and the extraterrestrial irradiance
//!    on the horizontal and tilted planes.
//!
//! All angles are in degrees.

use log::debug;
use serde::{Deserialize, Serialize};
use spectrl2_core::errors::GeometryError;
use spectrl2_core::geometry::{GeometryQuery, GeometryResolver, SolarGeometry};
use spectrl2_core::FloatValue;

use crate::config::SolposConfig;
use crate::errors::SolposResult;
use crate::validation::validate;

/// Cumulative days before the first of each month in a common year
const MONTH_DAYS: [i32; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Sunrise/sunset reported when the sun never crosses the horizon
/// unit: minutes from midnight
pub const NO_SUNRISE_SUNSET: FloatValue = 2999.0;

/// Airmass reported when the sun is more than 3° below the horizon
pub const NO_AIRMASS: FloatValue = -1.0;

fn sin_deg(angle: FloatValue) -> FloatValue {
    angle.to_radians().sin()
}

fn cos_deg(angle: FloatValue) -> FloatValue {
    angle.to_radians().cos()
}

/// Reduce an angle to [0, 360)
fn wrap_degrees(angle: FloatValue) -> FloatValue {
    let wrapped = angle - 360.0 * (angle / 360.0).trunc();
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Day of year (1 = January 1st) of a validated date
pub fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    let mut doy = day + MONTH_DAYS[month as usize];
    if is_leap_year(year) && month > 2 {
        doy += 1;
    }
    doy
}

/// Earth radius vector correction factor, (mean / actual distance)^2
pub fn earth_radius_vector(day_angle: FloatValue) -> FloatValue {
    let (sd, cd) = day_angle.to_radians().sin_cos();
    let (s2, c2) = (2.0 * day_angle).to_radians().sin_cos();
    1.000110 + 0.034221 * cd + 0.001280 * sd + 0.000719 * c2 + 0.000077 * s2
}

/// Atmospheric refraction of the apparent elevation
///
/// Returns the correction in degrees for an unrefracted elevation
/// `elevation` at `pressure` (mbar) and `temperature` (°C).
pub fn refraction(elevation: FloatValue, pressure: FloatValue, temperature: FloatValue) -> FloatValue {
    if elevation > 85.0 {
        return 0.0;
    }
    let tanelev = elevation.to_radians().tan();
    let arcseconds = if elevation >= 5.0 {
        58.1 / tanelev - 0.07 / tanelev.powi(3) + 0.000086 / tanelev.powi(5)
    } else if elevation >= -0.575 {
        1735.0
            + elevation
                * (-518.2 + elevation * (103.4 + elevation * (-12.79 + elevation * 0.711)))
    } else {
        -20.774 / tanelev
    };
    let pressure_temperature = (pressure * 283.0) / (1013.0 * (273.0 + temperature));
    arcseconds * pressure_temperature / 3600.0
}

/// Kasten & Young relative optical airmass at refracted zenith `zenith`
pub fn relative_airmass(zenith: FloatValue) -> FloatValue {
    if zenith > 93.0 {
        return NO_AIRMASS;
    }
    1.0 / (cos_deg(zenith) + 0.50572 * (96.07995 - zenith).powf(-1.6364))
}

/// Everything SOLPOS derives for one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    /// Day of year, 1 = January 1st
    pub day_of_year: i32,
    /// Day angle
    pub day_angle: FloatValue,
    /// Earth radius vector correction factor
    pub earth_radius_vector: FloatValue,
    /// Universal time of the interval midpoint
    /// unit: hours
    pub universal_time: FloatValue,
    /// Julian day, less 2.4e6
    pub julian_day: FloatValue,
    /// Days since J2000.0
    pub ecliptic_time: FloatValue,
    pub mean_longitude: FloatValue,
    pub mean_anomaly: FloatValue,
    pub ecliptic_longitude: FloatValue,
    pub ecliptic_obliquity: FloatValue,
    pub declination: FloatValue,
    pub right_ascension: FloatValue,
    /// Greenwich mean sidereal time
    /// unit: hours
    pub gmst: FloatValue,
    /// Local mean sidereal time
    pub lmst: FloatValue,
    /// Hour angle, negative before solar noon
    pub hour_angle: FloatValue,
    /// Unrefracted zenith angle, capped at 99°
    pub zenith_etr: FloatValue,
    /// Unrefracted elevation
    pub elevation_etr: FloatValue,
    /// Azimuth (N=0, E=90, S=180, W=270)
    pub azimuth: FloatValue,
    /// Refraction correction
    pub refraction: FloatValue,
    /// Refracted elevation, no lower than -9°
    pub elevation: FloatValue,
    /// Refracted zenith angle
    pub zenith: FloatValue,
    /// Cosine of the refracted zenith angle
    pub cos_zenith: FloatValue,
    /// Relative optical airmass, -1 when the sun is down
    pub airmass: FloatValue,
    /// Pressure-corrected airmass, -1 when the sun is down
    pub pressure_airmass: FloatValue,
    /// Sunset hour angle
    pub sunset_hour_angle: FloatValue,
    /// Shadow-band correction factor
    pub shadow_band_correction: FloatValue,
    /// True solar time
    /// unit: minutes from midnight
    pub true_solar_time: FloatValue,
    /// Difference between true solar time and clock time
    /// unit: minutes
    pub true_solar_time_fix: FloatValue,
    /// Equation of time
    /// unit: minutes
    pub equation_of_time: FloatValue,
    /// Sunrise without refraction, local standard time
    /// unit: minutes from midnight, -2999 or 2999 when the sun does not rise
    pub sunrise: FloatValue,
    /// Sunset without refraction, local standard time
    /// unit: minutes from midnight
    pub sunset: FloatValue,
    /// Perez airmass factor for normalising global irradiance
    pub prime: FloatValue,
    /// Reciprocal of `prime`
    pub unprime: FloatValue,
    /// Extraterrestrial direct normal irradiance
    /// unit: W / m^2
    pub etr_normal: FloatValue,
    /// Extraterrestrial global horizontal irradiance
    /// unit: W / m^2
    pub etr: FloatValue,
    /// Extraterrestrial irradiance on the tilted surface
    /// unit: W / m^2
    pub etr_tilt: FloatValue,
    /// Cosine of the angle of incidence on the tilted surface
    pub cos_incidence: FloatValue,
}

impl From<&SolarPosition> for SolarGeometry {
    fn from(position: &SolarPosition) -> Self {
        SolarGeometry {
            zenith: position.zenith,
            azimuth: position.azimuth,
            cos_incidence: position.cos_incidence,
            airmass: position.airmass,
            pressure_airmass: position.pressure_airmass,
            earth_radius_vector: position.earth_radius_vector,
            day_of_year: position.day_of_year,
        }
    }
}

/// The SOLPOS solar position resolver
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Solpos {
    config: SolposConfig,
}

impl Solpos {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SolposConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolposConfig {
        &self.config
    }

    /// Locate the sun for `query`
    ///
    /// Every input is range-checked first; all failures are reported together.
    pub fn position(&self, query: &GeometryQuery) -> SolposResult<SolarPosition> {
        validate(query, &self.config)?;
        Ok(self.calculate(query))
    }

    fn calculate(&self, query: &GeometryQuery) -> SolarPosition {
        let config = &self.config;

        // Calendar
        let day_of_year = day_of_year(query.year, query.month, query.day);
        let day_angle = 360.0 * (day_of_year - 1) as FloatValue / 365.0;
        let erv = earth_radius_vector(day_angle);

        // Universal time of the interval midpoint
        let universal_time = (query.hour as FloatValue * 3600.0
            + query.minute as FloatValue * 60.0
            + query.second as FloatValue
            - config.interval as FloatValue / 2.0)
            / 3600.0
            - query.timezone;

        // Ecliptic coordinates
        let delta = query.year - 1949;
        let leap = delta / 4;
        let julian_day = 32916.5
            + delta as FloatValue * 365.0
            + leap as FloatValue
            + day_of_year as FloatValue
            + universal_time / 24.0;
        let ecliptic_time = julian_day - 51545.0;

        let mean_longitude = wrap_degrees(280.460 + 0.9856474 * ecliptic_time);
        let mean_anomaly = wrap_degrees(357.528 + 0.9856003 * ecliptic_time);
        let ecliptic_longitude = wrap_degrees(
            mean_longitude + 1.915 * sin_deg(mean_anomaly) + 0.020 * sin_deg(2.0 * mean_anomaly),
        );
        let ecliptic_obliquity = 23.439 - 4.0e-7 * ecliptic_time;

        let declination = (sin_deg(ecliptic_obliquity) * sin_deg(ecliptic_longitude))
            .asin()
            .to_degrees();
        let mut right_ascension = (cos_deg(ecliptic_obliquity) * sin_deg(ecliptic_longitude))
            .atan2(cos_deg(ecliptic_longitude))
            .to_degrees();
        if right_ascension < 0.0 {
            right_ascension += 360.0;
        }

        // Sidereal time and hour angle
        let mut gmst = 6.697375 + 0.0657098242 * ecliptic_time + universal_time;
        gmst -= 24.0 * (gmst / 24.0).trunc();
        if gmst < 0.0 {
            gmst += 24.0;
        }
        let lmst = wrap_degrees(gmst * 15.0 + query.longitude);
        let mut hour_angle = lmst - right_ascension;
        if hour_angle < -180.0 {
            hour_angle += 360.0;
        } else if hour_angle > 180.0 {
            hour_angle -= 360.0;
        }

        let (sd, cd) = declination.to_radians().sin_cos();
        let (sl, cl) = query.latitude.to_radians().sin_cos();

        // Unrefracted zenith
        let cz = (sd * sl + cd * cl * cos_deg(hour_angle)).clamp(-1.0, 1.0);
        let zenith_etr = cz.acos().to_degrees().min(99.0);
        let elevation_etr = 90.0 - zenith_etr;

        // Azimuth
        let (se, ce) = elevation_etr.to_radians().sin_cos();
        let cecl = ce * cl;
        let mut azimuth = 180.0;
        if cecl.abs() >= 0.001 {
            let ca = ((se * sl - sd) / cecl).clamp(-1.0, 1.0);
            azimuth = 180.0 - ca.acos().to_degrees();
            if hour_angle > 0.0 {
                azimuth = 360.0 - azimuth;
            }
        }

        // Refraction and airmass
        let refraction = refraction(elevation_etr, query.pressure, query.temperature);
        let elevation = (elevation_etr + refraction).max(-9.0);
        let zenith = 90.0 - elevation;
        let cos_zenith = cos_deg(zenith);

        let airmass = relative_airmass(zenith);
        let pressure_airmass = if airmass == NO_AIRMASS {
            NO_AIRMASS
        } else {
            airmass * query.pressure / 1013.0
        };

        // Sunset hour angle
        let cdcl = cd * cl;
        let sunset_hour_angle = if cdcl.abs() >= 0.001 {
            let cssha = -sl * sd / cdcl;
            if cssha < -1.0 {
                180.0
            } else if cssha > 1.0 {
                0.0
            } else {
                cssha.acos().to_degrees()
            }
        } else if (declination >= 0.0 && query.latitude > 0.0)
            || (declination < 0.0 && query.latitude < 0.0)
        {
            180.0
        } else {
            0.0
        };

        // Shadow band
        let p = 0.6366198 * config.sbwid / config.sbrad * cd.powi(3);
        let t1 = sl * sd * sunset_hour_angle.to_radians();
        let t2 = cl * cd * sin_deg(sunset_hour_angle);
        let shadow_band_correction = config.sbsky + 1.0 / (1.0 - p * (t1 + t2));

        // True solar time
        let true_solar_time = (180.0 + hour_angle) * 4.0;
        let mut true_solar_time_fix = true_solar_time
            - query.hour as FloatValue * 60.0
            - query.minute as FloatValue
            - query.second as FloatValue / 60.0
            + config.interval as FloatValue / 120.0;
        while true_solar_time_fix > 720.0 {
            true_solar_time_fix -= 1440.0;
        }
        while true_solar_time_fix < -720.0 {
            true_solar_time_fix += 1440.0;
        }
        let equation_of_time =
            true_solar_time_fix + 60.0 * query.timezone - 4.0 * query.longitude;

        // Sunrise and sunset
        let (sunrise, sunset) = if sunset_hour_angle <= 1.0 {
            (NO_SUNRISE_SUNSET, -NO_SUNRISE_SUNSET)
        } else if sunset_hour_angle >= 179.0 {
            (-NO_SUNRISE_SUNSET, NO_SUNRISE_SUNSET)
        } else {
            (
                720.0 - 4.0 * sunset_hour_angle - true_solar_time_fix,
                720.0 + 4.0 * sunset_hour_angle - true_solar_time_fix,
            )
        };

        // Perez airmass factor
        let unprime = 1.031 * (-1.4 / (0.9 + 9.4 / airmass)).exp() + 0.1;
        let prime = 1.0 / unprime;

        // Extraterrestrial irradiance
        let (etr_normal, etr) = if cos_zenith > 0.0 {
            let etrn = config.solcon * erv;
            (etrn, etrn * cos_zenith)
        } else {
            (0.0, 0.0)
        };

        // Tilted surface
        let (sa, ca) = azimuth.to_radians().sin_cos();
        let (sp, cp) = query.aspect.to_radians().sin_cos();
        let (st, ct) = query.tilt.to_radians().sin_cos();
        let sz = sin_deg(zenith);
        let cos_incidence = cos_zenith * ct + sz * st * (ca * cp + sa * sp);
        let etr_tilt = if cos_incidence > 0.0 {
            etr_normal * cos_incidence
        } else {
            0.0
        };

        debug!(
            "SOLPOS {}-{:02}-{:02} {:02}:{:02}:{:02}: zenith {:.4}, azimuth {:.4}, airmass {:.4}",
            query.year,
            query.month,
            query.day,
            query.hour,
            query.minute,
            query.second,
            zenith,
            azimuth,
            airmass
        );

        SolarPosition {
            day_of_year,
            day_angle,
            earth_radius_vector: erv,
            universal_time,
            julian_day,
            ecliptic_time,
            mean_longitude,
            mean_anomaly,
            ecliptic_longitude,
            ecliptic_obliquity,
            declination,
            right_ascension,
            gmst,
            lmst,
            hour_angle,
            zenith_etr,
            elevation_etr,
            azimuth,
            refraction,
            elevation,
            zenith,
            cos_zenith,
            airmass,
            pressure_airmass,
            sunset_hour_angle,
            shadow_band_correction,
            true_solar_time,
            true_solar_time_fix,
            equation_of_time,
            sunrise,
            sunset,
            prime,
            unprime,
            etr_normal,
            etr,
            etr_tilt,
            cos_incidence,
        }
    }
}

impl GeometryResolver for Solpos {
    fn resolve(&self, query: &GeometryQuery) -> Result<SolarGeometry, GeometryError> {
        let position = self.position(query)?;
        Ok(SolarGeometry::from(&position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SolposErrorKind;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use is_close::is_close;

    fn bakersfield() -> GeometryQuery {
        GeometryQuery {
            year: 2013,
            month: 6,
            day: 5,
            hour: 12,
            minute: 31,
            second: 0,
            latitude: 35.56836,
            longitude: -119.2022,
            timezone: -8.0,
            pressure: 1015.62055,
            temperature: 40.0,
            tilt: 0.0,
            aspect: 180.0,
        }
    }

    fn atlanta() -> GeometryQuery {
        GeometryQuery {
            year: 1999,
            month: 7,
            day: 22,
            hour: 9,
            minute: 45,
            second: 37,
            latitude: 33.65,
            longitude: -84.43,
            timezone: -5.0,
            pressure: 1006.0,
            temperature: 27.0,
            tilt: 33.65,
            aspect: 135.0,
        }
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(1999, 7, 22), 203);
        assert_eq!(day_of_year(2000, 3, 1), 61);
        assert_eq!(day_of_year(2000, 12, 31), 366);
        assert_eq!(day_of_year(2001, 12, 31), 365);
        assert_eq!(day_of_year(2000, 2, 29), 60);
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-10.0), 350.0);
        assert_eq!(wrap_degrees(0.0), 0.0);
    }

    #[test]
    fn test_refraction_regimes() {
        assert_eq!(refraction(86.0, 1013.0, 10.0), 0.0);
        // About half a degree at the horizon under standard conditions
        let horizon = refraction(0.0, 1013.0, 10.0);
        assert_relative_eq!(horizon, 1735.0 / 3600.0, max_relative = 1e-12);
        assert!(refraction(30.0, 1013.0, 10.0) < refraction(10.0, 1013.0, 10.0));
        assert!(refraction(-2.0, 1013.0, 10.0) > 0.0);
    }

    #[test]
    fn test_airmass() {
        assert_relative_eq!(relative_airmass(0.0), 1.0, max_relative = 1e-3);
        assert_relative_eq!(relative_airmass(60.0), 2.0, max_relative = 1e-2);
        assert_eq!(relative_airmass(93.5), NO_AIRMASS);
    }

    #[test]
    fn test_bakersfield_noon() {
        let position = Solpos::new().position(&bakersfield()).unwrap();
        assert_eq!(position.day_of_year, 156);
        assert_relative_eq!(position.zenith, 15.074043, max_relative = 1e-3);
        assert_relative_eq!(position.azimuth, 213.29042, max_relative = 1e-3);
        assert_relative_eq!(position.airmass, 1.0352273, max_relative = 1e-3);
        assert_relative_eq!(position.pressure_airmass, 1.0379053, max_relative = 1e-3);
    }

    #[test]
    fn test_atlanta_morning() {
        let position = Solpos::new().position(&atlanta()).unwrap();
        assert_eq!(position.day_of_year, 203);
        assert_abs_diff_eq!(position.zenith, 41.590250, epsilon = 1e-3);
        assert_abs_diff_eq!(position.azimuth, 97.0333, epsilon = 1e-3);
        assert_abs_diff_eq!(position.airmass, 1.335756, epsilon = 1e-4);
        assert_abs_diff_eq!(position.pressure_airmass, 1.326525, epsilon = 1e-4);
        assert_abs_diff_eq!(position.earth_radius_vector, 0.967988, epsilon = 1e-5);
        assert_abs_diff_eq!(position.cos_incidence, 0.912570, epsilon = 1e-4);
        // Morning: east of south, negative hour angle
        assert!(position.hour_angle < 0.0);
    }

    #[test]
    fn test_day_length_and_extraterrestrial() {
        let position = Solpos::new().position(&atlanta()).unwrap();
        assert!(position.sunrise > 5.0 * 60.0 && position.sunrise < 7.0 * 60.0);
        assert!(position.sunset > 19.0 * 60.0 && position.sunset < 21.0 * 60.0);
        assert!(is_close!(
            position.etr_normal,
            1367.0 * position.earth_radius_vector
        ));
        assert!(is_close!(
            position.etr,
            position.etr_normal * position.cos_zenith
        ));
        assert_relative_eq!(position.prime * position.unprime, 1.0, max_relative = 1e-12);
        assert!(position.equation_of_time.abs() < 17.0);
    }

    #[test]
    fn test_polar_night() {
        let query = GeometryQuery {
            latitude: 80.0,
            longitude: 0.0,
            timezone: 0.0,
            month: 12,
            day: 21,
            hour: 12,
            minute: 0,
            second: 0,
            ..atlanta()
        };
        let position = Solpos::new().position(&query).unwrap();
        assert_eq!(position.sunrise, NO_SUNRISE_SUNSET);
        assert_eq!(position.sunset, -NO_SUNRISE_SUNSET);
        assert_eq!(position.airmass, NO_AIRMASS);
        assert_eq!(position.pressure_airmass, NO_AIRMASS);
        assert_eq!(position.etr, 0.0);
    }

    #[test]
    fn test_midnight_sun() {
        let query = GeometryQuery {
            latitude: 80.0,
            longitude: 0.0,
            timezone: 0.0,
            month: 6,
            day: 21,
            ..atlanta()
        };
        let position = Solpos::new().position(&query).unwrap();
        assert_eq!(position.sunrise, -NO_SUNRISE_SUNSET);
        assert_eq!(position.sunset, NO_SUNRISE_SUNSET);
    }

    #[test]
    fn test_interval_moves_the_sun_back() {
        let instant = Solpos::new().position(&atlanta()).unwrap();
        let hourly = Solpos::from_config(SolposConfig {
            interval: 3600,
            ..Default::default()
        })
        .position(&atlanta())
        .unwrap();
        assert_relative_eq!(
            hourly.universal_time,
            instant.universal_time - 0.5,
            max_relative = 1e-12
        );
        // Earlier in the morning the sun is lower
        assert!(hourly.zenith > instant.zenith);
    }

    #[test]
    fn test_invalid_query() {
        let query = GeometryQuery {
            year: 2051,
            month: 13,
            ..atlanta()
        };
        let err = Solpos::new().position(&query).unwrap_err();
        assert_eq!(err.code, 3);
        assert!(err.contains(SolposErrorKind::Month));

        let err = Solpos::new().resolve(&query).unwrap_err();
        assert_eq!(err.code, 3);
    }

    #[test]
    fn test_resolver_matches_position() {
        let solpos = Solpos::new();
        let position = solpos.position(&atlanta()).unwrap();
        let geometry = solpos.resolve(&atlanta()).unwrap();
        assert_eq!(geometry.zenith, position.zenith);
        assert_eq!(geometry.cos_incidence, position.cos_incidence);
        assert_eq!(geometry.day_of_year, 203);
    }
}
