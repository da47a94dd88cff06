//! Range checks on SOLPOS inputs
//!
//! Unlike the spectral model, SOLPOS reports every bad input at once. Each
//! failure sets its own bit in the returned status code.

use spectrl2_core::geometry::GeometryQuery;

use crate::config::SolposConfig;
use crate::errors::{SolposError, SolposErrorKind, SolposResult};

/// Check every input of `query` and `config`
pub fn validate(query: &GeometryQuery, config: &SolposConfig) -> SolposResult<()> {
    let failures: Vec<(SolposErrorKind, String)> = failed_kinds(query, config)
        .into_iter()
        .map(|kind| (kind, kind.describe(query, config)))
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(SolposError::new(failures))
    }
}

fn failed_kinds(query: &GeometryQuery, config: &SolposConfig) -> Vec<SolposErrorKind> {
    use SolposErrorKind::*;

    let mut kinds = Vec::new();
    if !(1950..=2050).contains(&query.year) {
        kinds.push(Year);
    }
    if !(1..=12).contains(&query.month) {
        kinds.push(Month);
    }
    if !(1..=31).contains(&query.day) {
        kinds.push(Day);
    }
    if !(0..=24).contains(&query.hour) {
        kinds.push(Hour);
    }
    if !(0..=59).contains(&query.minute) {
        kinds.push(Minute);
    }
    if !(0..=59).contains(&query.second) {
        kinds.push(Second);
    }
    // No more than 24 hours
    if query.hour == 24 && query.minute > 0 {
        kinds.extend([Hour, Minute]);
    }
    if query.hour == 24 && query.second > 0 {
        kinds.extend([Hour, Second]);
    }
    if !(-18.0..=18.0).contains(&query.timezone) {
        kinds.push(Timezone);
    }
    if !(0..=28800).contains(&config.interval) {
        kinds.push(Interval);
    }
    if !(-90.0..=90.0).contains(&query.latitude) {
        kinds.push(Latitude);
    }
    if !(-180.0..=180.0).contains(&query.longitude) {
        kinds.push(Longitude);
    }
    if !(-100.0..=100.0).contains(&query.temperature) {
        kinds.push(Temperature);
    }
    if !(0.0..=2000.0).contains(&query.pressure) {
        kinds.push(Pressure);
    }
    if !(-180.0..=180.0).contains(&query.tilt) {
        kinds.push(Tilt);
    }
    if !(-360.0..=360.0).contains(&query.aspect) {
        kinds.push(Aspect);
    }
    if !(1.0..=100.0).contains(&config.sbwid) {
        kinds.push(ShadowBandWidth);
    }
    if !(1.0..=100.0).contains(&config.sbrad) {
        kinds.push(ShadowBandRadius);
    }
    if !(-1.0..=1.0).contains(&config.sbsky) {
        kinds.push(ShadowBandSky);
    }
    kinds
}
