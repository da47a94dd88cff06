use crate::FloatValue;
use thiserror::Error;

/// Failure reported by a [`GeometryResolver`](crate::geometry::GeometryResolver).
///
/// `code` is the resolver's own non-zero status (SOLPOS uses a bitmask of the
/// inputs it rejected) and is passed through to the caller untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Solar geometry could not be resolved (code {code}): {message}")]
pub struct GeometryError {
    pub code: i64,
    pub message: String,
}

impl GeometryError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Error type for invalid spectral model requests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectralError {
    #[error("units should be 1 to 3, not {0}")]
    InvalidUnits(i32),
    #[error("tau500 should be within [0, 10], not {0:?}")]
    InvalidTau500(Option<FloatValue>),
    #[error("watvap should be within [0, 100], not {0:?}")]
    InvalidWatvap(Option<FloatValue>),
    #[error("assym should be within (0, 1), not {0}")]
    InvalidAssym(FloatValue),
    #[error("ozone should be within [0, 10] atm-cm, not {0}")]
    InvalidOzone(FloatValue),
    #[error("Invalid ground reflectance curve: {0}")]
    InvalidReflectance(String),
    #[error("alpha should be finite, not {0}")]
    InvalidAlpha(FloatValue),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SpectralError {
    /// Integer status matching the legacy return-code convention.
    ///
    /// Validation failures are negative, geometry failures carry the
    /// resolver's own (positive) code and configuration errors map to `-100`.
    pub fn code(&self) -> i64 {
        match self {
            SpectralError::InvalidUnits(_) => -1,
            SpectralError::InvalidTau500(_) => -2,
            SpectralError::InvalidWatvap(_) => -3,
            SpectralError::InvalidAssym(_) => -4,
            SpectralError::InvalidOzone(_) => -5,
            SpectralError::InvalidReflectance(_) => -6,
            SpectralError::InvalidAlpha(_) => -7,
            SpectralError::Geometry(err) => err.code,
            SpectralError::Config(_) => -100,
        }
    }
}

/// Convenience type for `Result<T, SpectralError>`.
pub type Spectrl2Result<T> = Result<T, SpectralError>;
