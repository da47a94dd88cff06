use approx::assert_relative_eq;
use spectrl2::{
    solpos_am, spectrl2, DateTime, Location, SolposErrorKind, SpectralError,
    SpectralRequest, Units,
};

fn request() -> SpectralRequest {
    SpectralRequest {
        tau500: Some(0.2),
        watvap: Some(1.36),
        ..SpectralRequest::new(
            Location {
                latitude: 33.65,
                longitude: -84.43,
                timezone: -5.0,
            },
            DateTime::new(1999, 7, 22, 9, 45, 37),
        )
    }
}

#[test]
fn invalid_units_codes() {
    for code in [0, 4] {
        let err = Units::try_from(code).unwrap_err();
        assert_eq!(err.code(), -1);
        assert_eq!(err.to_string(), format!("units should be 1 to 3, not {}", code));
    }
}

#[test]
fn spectral_validation_codes() {
    let cases: [(SpectralRequest, i64); 10] = [
        (SpectralRequest { tau500: Some(-0.1), ..request() }, -2),
        (SpectralRequest { tau500: Some(10.5), ..request() }, -2),
        (SpectralRequest { tau500: None, ..request() }, -2),
        (SpectralRequest { watvap: Some(-5.0), ..request() }, -3),
        (SpectralRequest { watvap: Some(150.0), ..request() }, -3),
        (SpectralRequest { watvap: None, ..request() }, -3),
        (SpectralRequest { assym: 0.0, ..request() }, -4),
        (SpectralRequest { assym: 1.0, ..request() }, -4),
        (SpectralRequest { ozone: Some(12.0), ..request() }, -5),
        (SpectralRequest { alpha: f64::NAN, ..request() }, -7),
    ];
    for (request, code) in cases {
        assert_eq!(spectrl2(&request).unwrap_err().code(), code, "{:?}", request);
    }
}

#[test]
fn validation_runs_before_solpos() {
    // Both the aerosol depth and the year are wrong; the spectral check wins
    let request = SpectralRequest {
        tau500: Some(11.0),
        datetime: DateTime::new(2051, 7, 22, 9, 45, 37),
        ..request()
    };
    assert_eq!(spectrl2(&request).unwrap_err().code(), -2);
}

#[test]
fn solpos_codes_pass_through() {
    let cases = [
        (DateTime::new(2051, 7, 22, 9, 45, 37), 1),
        (DateTime::new(1999, 13, 22, 9, 45, 37), 2),
        (DateTime::new(1999, 7, 32, 9, 45, 37), 4),
        (DateTime::new(1999, 7, 22, 25, 45, 37), 16),
        (DateTime::new(1999, 7, 22, 9, 61, 37), 32),
        (DateTime::new(1999, 7, 22, 9, 45, 61), 64),
        (DateTime::new(2051, 13, 22, 9, 45, 37), 3),
    ];
    for (datetime, code) in cases {
        let err = spectrl2(&SpectralRequest {
            datetime,
            ..request()
        })
        .unwrap_err();
        assert!(matches!(err, SpectralError::Geometry(_)));
        assert_eq!(err.code(), code, "{:?}", datetime);
    }
}

#[test]
fn solpos_am_reference() {
    let location = Location {
        latitude: 35.56836,
        longitude: -119.2022,
        timezone: -8.0,
    };
    let datetime = DateTime::new(2013, 6, 5, 12, 31, 0);
    let am = solpos_am(&location, &datetime, 1015.62055, 40.0).unwrap();

    assert_relative_eq!(am.zenith, 15.074043, max_relative = 1e-3);
    assert_relative_eq!(am.azimuth, 213.29042, max_relative = 1e-3);
    assert_relative_eq!(am.airmass, 1.0352273, max_relative = 1e-3);
    assert_relative_eq!(am.pressure_airmass, 1.0379053, max_relative = 1e-3);
    assert_eq!(am.day_of_year, 156);
    assert_eq!(am.interval, 0);
}

#[test]
fn solpos_am_errors() {
    let location = Location {
        latitude: 95.0,
        longitude: 0.0,
        timezone: 0.0,
    };
    let err = solpos_am(&location, &DateTime::new(2051, 1, 1, 0, 0, 0), 1013.0, 15.0).unwrap_err();
    assert_eq!(err.code, 1 | (1 << 9));
    assert_eq!(err.kinds, vec![SolposErrorKind::Year, SolposErrorKind::Latitude]);
}

#[test]
fn solpos_am_over_a_day() {
    let location = Location {
        latitude: 33.65,
        longitude: -84.43,
        timezone: -5.0,
    };
    let datetimes: Vec<DateTime> = (0..24)
        .map(|hour| DateTime::new(1999, 7, 22, hour, 0, 0))
        .collect();
    let series: Vec<_> = datetimes
        .iter()
        .map(|datetime| solpos_am(&location, datetime, 1006.0, 27.0).unwrap())
        .collect();
    assert_eq!(series.len(), 24);

    // Lowest zenith around local solar noon (EST, 84° W)
    let noon = series
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.zenith.total_cmp(&b.1.zenith))
        .map(|(hour, _)| hour);
    assert_eq!(noon, Some(13));
    assert_eq!(series[0].airmass, -1.0);
}
