//! Request validation
//!
//! Checks run in a fixed order and stop at the first failure, before the sun
//! is located or anything else is computed. Units are not re-checked here:
//! an out-of-range units code can never become a [`Units`](crate::units::Units)
//! value, so that failure surfaces when the request is built or parsed.

use crate::errors::{SpectralError, Spectrl2Result};
use crate::request::SpectralRequest;
use crate::FloatValue;

/// Largest accepted aerosol optical depth at 0.5 µm
pub const MAX_TAU500: FloatValue = 10.0;

/// Largest accepted precipitable water vapour (cm)
pub const MAX_WATVAP: FloatValue = 100.0;

/// Largest accepted total column ozone (atm-cm)
pub const MAX_OZONE: FloatValue = 10.0;

/// Required atmospheric inputs once they are known to be present and in range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequiredInputs {
    pub tau500: FloatValue,
    pub watvap: FloatValue,
}

/// Validate every field the spectral model depends on
pub fn validate_request(request: &SpectralRequest) -> Spectrl2Result<RequiredInputs> {
    let tau500 = validate_tau500(request.tau500)?;
    let watvap = validate_watvap(request.watvap)?;
    validate_assym(request.assym)?;
    validate_ozone(request.ozone)?;
    request.reflectance.validate()?;
    validate_alpha(request.alpha)?;

    Ok(RequiredInputs { tau500, watvap })
}

/// Aerosol optical depth must be given and lie within [0, 10]
pub fn validate_tau500(tau500: Option<FloatValue>) -> Spectrl2Result<FloatValue> {
    match tau500 {
        Some(value) if (0.0..=MAX_TAU500).contains(&value) => Ok(value),
        _ => Err(SpectralError::InvalidTau500(tau500)),
    }
}

/// Precipitable water must be given and lie within [0, 100] cm
pub fn validate_watvap(watvap: Option<FloatValue>) -> Spectrl2Result<FloatValue> {
    match watvap {
        Some(value) if (0.0..=MAX_WATVAP).contains(&value) => Ok(value),
        _ => Err(SpectralError::InvalidWatvap(watvap)),
    }
}

/// The asymmetry factor must lie strictly between 0 and 1
pub fn validate_assym(assym: FloatValue) -> Spectrl2Result<FloatValue> {
    if assym > 0.0 && assym < 1.0 {
        Ok(assym)
    } else {
        Err(SpectralError::InvalidAssym(assym))
    }
}

/// A caller-supplied ozone column must lie within [0, 10] atm-cm
pub fn validate_ozone(ozone: Option<FloatValue>) -> Spectrl2Result<()> {
    match ozone {
        Some(value) if !(0.0..=MAX_OZONE).contains(&value) => {
            Err(SpectralError::InvalidOzone(value))
        }
        _ => Ok(()),
    }
}

/// The Angstrom exponent may take any finite value
pub fn validate_alpha(alpha: FloatValue) -> Spectrl2Result<FloatValue> {
    if alpha.is_finite() {
        Ok(alpha)
    } else {
        Err(SpectralError::InvalidAlpha(alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflectance::ReflectanceCurve;

    fn valid_request() -> SpectralRequest {
        SpectralRequest {
            tau500: Some(0.2),
            watvap: Some(1.36),
            ..Default::default()
        }
    }

    #[test]
    fn accepts_valid_request() {
        let inputs = validate_request(&valid_request()).unwrap();
        assert_eq!(inputs.tau500, 0.2);
        assert_eq!(inputs.watvap, 1.36);
    }

    #[test]
    fn tau500_range() {
        for bad in [-0.1, 10.5, FloatValue::NAN] {
            let request = SpectralRequest {
                tau500: Some(bad),
                ..valid_request()
            };
            assert_eq!(validate_request(&request).unwrap_err().code(), -2);
        }
        for good in [0.0, 10.0] {
            assert_eq!(validate_tau500(Some(good)).unwrap(), good);
        }
    }

    #[test]
    fn tau500_is_required() {
        let request = SpectralRequest {
            tau500: None,
            ..valid_request()
        };
        assert_eq!(
            validate_request(&request).unwrap_err(),
            SpectralError::InvalidTau500(None)
        );
    }

    #[test]
    fn watvap_range() {
        for bad in [Some(-5.0), Some(150.0), None] {
            let request = SpectralRequest {
                watvap: bad,
                ..valid_request()
            };
            assert_eq!(validate_request(&request).unwrap_err().code(), -3);
        }
        assert!(validate_watvap(Some(0.0)).is_ok());
        assert!(validate_watvap(Some(100.0)).is_ok());
    }

    #[test]
    fn assym_is_an_open_interval() {
        for bad in [0.0, 1.0, -0.5, 1.5] {
            let request = SpectralRequest {
                assym: bad,
                ..valid_request()
            };
            assert_eq!(validate_request(&request).unwrap_err().code(), -4);
        }
        assert!(validate_assym(0.999).is_ok());
    }

    #[test]
    fn ozone_range() {
        let request = SpectralRequest {
            ozone: Some(-0.3),
            ..valid_request()
        };
        assert_eq!(validate_request(&request).unwrap_err().code(), -5);
        assert!(validate_ozone(None).is_ok());
        assert!(validate_ozone(Some(0.35)).is_ok());
    }

    #[test]
    fn reflectance_is_checked() {
        let request = SpectralRequest {
            reflectance: ReflectanceCurve::new([0.3, 0.7, 0.8, 1.3, 2.5, 3.0], [0.2; 6]),
            ..valid_request()
        };
        assert_eq!(validate_request(&request).unwrap_err().code(), -6);
    }

    #[test]
    fn alpha_must_be_finite() {
        for bad in [FloatValue::NAN, FloatValue::INFINITY, FloatValue::NEG_INFINITY] {
            let request = SpectralRequest {
                alpha: bad,
                ..valid_request()
            };
            let err = validate_request(&request).unwrap_err();
            assert!(matches!(err, SpectralError::InvalidAlpha(_)));
            assert_eq!(err.code(), -7);
        }
        assert_eq!(validate_alpha(0.0).unwrap(), 0.0);
        assert_eq!(validate_alpha(1.3).unwrap(), 1.3);
    }

    #[test]
    fn checks_run_in_order() {
        // Every field is wrong; tau500 is reported first
        let request = SpectralRequest {
            tau500: Some(11.0),
            watvap: Some(-1.0),
            assym: 1.0,
            ozone: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(validate_request(&request).unwrap_err().code(), -2);

        let request = SpectralRequest {
            tau500: Some(0.2),
            ..request
        };
        assert_eq!(validate_request(&request).unwrap_err().code(), -3);

        let request = SpectralRequest {
            watvap: Some(1.0),
            ..request
        };
        assert_eq!(validate_request(&request).unwrap_err().code(), -4);
    }
}
