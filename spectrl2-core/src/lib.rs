pub mod aerosol;
pub mod band_table;
pub mod errors;
pub mod geometry;
pub mod model;
pub mod ozone;
pub mod reflectance;
pub mod request;
pub mod result;
pub mod tilt;
pub mod transmission;
pub mod units;
pub mod validation;

pub type FloatValue = f64;

pub use errors::{GeometryError, SpectralError, Spectrl2Result};
pub use geometry::{GeometryQuery, GeometryResolver, SolarGeometry};
pub use model::SpectralModel;
pub use request::{DateTime, Location, SpectralRequest};
pub use result::SpectralResult;
pub use units::Units;
