//! NREL SOLPOS solar position and intensity for the spectral model
//!
//! [`Solpos`] implements [`GeometryResolver`](spectrl2_core::geometry::GeometryResolver)
//! so it can be handed straight to
//! [`SpectralModel::compute`](spectrl2_core::model::SpectralModel::compute).
//!
//! ```rust
//! use spectrl2_core::geometry::GeometryQuery;
//! use spectrl2_solpos::Solpos;
//!
//! let query = GeometryQuery {
//!     year: 2013,
//!     month: 6,
//!     day: 5,
//!     hour: 12,
//!     minute: 31,
//!     second: 0,
//!     latitude: 35.56836,
//!     longitude: -119.2022,
//!     timezone: -8.0,
//!     pressure: 1015.62055,
//!     temperature: 40.0,
//!     tilt: 0.0,
//!     aspect: 180.0,
//! };
//! let position = Solpos::new().position(&query).unwrap();
//! assert!((position.zenith - 15.074).abs() < 0.01);
//! assert!((position.azimuth - 213.29).abs() < 0.01);
//! ```

pub mod config;
pub mod errors;
pub mod position;
pub mod validation;

pub use config::SolposConfig;
pub use errors::{SolposError, SolposErrorKind, SolposResult};
pub use position::{SolarPosition, Solpos};
