use spectrl2_core::errors::GeometryError;
use spectrl2_core::geometry::GeometryQuery;
use thiserror::Error;

use crate::config::SolposConfig;

/// An input SOLPOS refused, in bit order of the status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolposErrorKind {
    Year,
    Month,
    Day,
    DayOfYear,
    Hour,
    Minute,
    Second,
    Timezone,
    Interval,
    Latitude,
    Longitude,
    Temperature,
    Pressure,
    Tilt,
    Aspect,
    ShadowBandWidth,
    ShadowBandRadius,
    ShadowBandSky,
}

impl SolposErrorKind {
    /// Every kind, ordered by bit position
    pub const ALL: [SolposErrorKind; 18] = [
        SolposErrorKind::Year,
        SolposErrorKind::Month,
        SolposErrorKind::Day,
        SolposErrorKind::DayOfYear,
        SolposErrorKind::Hour,
        SolposErrorKind::Minute,
        SolposErrorKind::Second,
        SolposErrorKind::Timezone,
        SolposErrorKind::Interval,
        SolposErrorKind::Latitude,
        SolposErrorKind::Longitude,
        SolposErrorKind::Temperature,
        SolposErrorKind::Pressure,
        SolposErrorKind::Tilt,
        SolposErrorKind::Aspect,
        SolposErrorKind::ShadowBandWidth,
        SolposErrorKind::ShadowBandRadius,
        SolposErrorKind::ShadowBandSky,
    ];

    pub fn bit(self) -> u32 {
        self as u32
    }

    /// The status code this kind contributes
    pub fn mask(self) -> i64 {
        1 << self.bit()
    }

    /// Describe the offending value
    pub fn describe(self, query: &GeometryQuery, config: &SolposConfig) -> String {
        match self {
            SolposErrorKind::Year => format!("Please fix the year: {} [1950-2050]", query.year),
            SolposErrorKind::Month => format!("Please fix the month: {}", query.month),
            SolposErrorKind::Day => format!("Please fix the day-of-month: {}", query.day),
            SolposErrorKind::DayOfYear => "Please fix the day-of-year".to_string(),
            SolposErrorKind::Hour => format!("Please fix the hour: {}", query.hour),
            SolposErrorKind::Minute => format!("Please fix the minute: {}", query.minute),
            SolposErrorKind::Second => format!("Please fix the second: {}", query.second),
            SolposErrorKind::Timezone => format!("Please fix the time zone: {}", query.timezone),
            SolposErrorKind::Interval => format!("Please fix the interval: {}", config.interval),
            SolposErrorKind::Latitude => format!("Please fix the latitude: {}", query.latitude),
            SolposErrorKind::Longitude => format!("Please fix the longitude: {}", query.longitude),
            SolposErrorKind::Temperature => {
                format!("Please fix the temperature: {}", query.temperature)
            }
            SolposErrorKind::Pressure => format!("Please fix the pressure: {}", query.pressure),
            SolposErrorKind::Tilt => format!("Please fix the tilt: {}", query.tilt),
            SolposErrorKind::Aspect => format!("Please fix the aspect: {}", query.aspect),
            SolposErrorKind::ShadowBandWidth => {
                format!("Please fix the shadowband width: {}", config.sbwid)
            }
            SolposErrorKind::ShadowBandRadius => {
                format!("Please fix the shadowband radius: {}", config.sbrad)
            }
            SolposErrorKind::ShadowBandSky => {
                format!("Please fix the shadowband sky factor: {}", config.sbsky)
            }
        }
    }
}

/// Every input SOLPOS rejected for one query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("SOLPOS rejected its inputs (code {code}): {}", .messages.join("; "))]
pub struct SolposError {
    /// Sum of the masks of every failure
    pub code: i64,
    pub kinds: Vec<SolposErrorKind>,
    pub messages: Vec<String>,
}

impl SolposError {
    pub fn new(mut failures: Vec<(SolposErrorKind, String)>) -> Self {
        // Stable sort keeps the first message reported for each kind
        failures.sort_by_key(|(kind, _)| kind.bit());
        failures.dedup_by_key(|(kind, _)| *kind);
        let code = failures.iter().map(|(kind, _)| kind.mask()).sum();
        let (kinds, messages) = failures.into_iter().unzip();

        Self {
            code,
            kinds,
            messages,
        }
    }

    /// Kinds encoded in a status code
    pub fn decode(code: i64) -> Vec<SolposErrorKind> {
        SolposErrorKind::ALL
            .iter()
            .copied()
            .filter(|kind| code & kind.mask() != 0)
            .collect()
    }

    pub fn contains(&self, kind: SolposErrorKind) -> bool {
        self.kinds.contains(&kind)
    }
}

impl From<SolposError> for GeometryError {
    fn from(err: SolposError) -> Self {
        GeometryError::new(err.code, err.messages.join("; "))
    }
}

/// Convenience type for `Result<T, SolposError>`.
pub type SolposResult<T> = Result<T, SolposError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_follow_bit_order() {
        assert_eq!(SolposErrorKind::Year.mask(), 1);
        assert_eq!(SolposErrorKind::Month.mask(), 2);
        assert_eq!(SolposErrorKind::Day.mask(), 4);
        assert_eq!(SolposErrorKind::Hour.mask(), 16);
        assert_eq!(SolposErrorKind::ShadowBandSky.mask(), 1 << 17);
        for (bit, kind) in SolposErrorKind::ALL.iter().enumerate() {
            assert_eq!(kind.bit() as usize, bit);
        }
    }

    #[test]
    fn test_code_is_sum_of_masks() {
        let err = SolposError::new(vec![
            (SolposErrorKind::Hour, "hour".to_string()),
            (SolposErrorKind::Year, "year".to_string()),
            (SolposErrorKind::Hour, "hour again".to_string()),
        ]);
        assert_eq!(err.code, 17);
        assert_eq!(err.kinds, vec![SolposErrorKind::Year, SolposErrorKind::Hour]);
        assert_eq!(err.messages.len(), 2);
        assert!(err.contains(SolposErrorKind::Year));
        assert!(!err.contains(SolposErrorKind::Month));
    }

    #[test]
    fn test_decode() {
        assert_eq!(
            SolposError::decode(1 | 4 | 64),
            vec![
                SolposErrorKind::Year,
                SolposErrorKind::Day,
                SolposErrorKind::Second
            ]
        );
        assert!(SolposError::decode(0).is_empty());
    }

    #[test]
    fn test_into_geometry_error() {
        let err = SolposError::new(vec![(
            SolposErrorKind::Latitude,
            "Please fix the latitude: 91".to_string(),
        )]);
        let geometry: GeometryError = err.into();
        assert_eq!(geometry.code, 512);
        assert!(geometry.message.contains("latitude"));
    }
}
