//! The spectral model
//!
//! [`SpectralModel`] evaluates the Bird & Riordan clear-sky spectral model for
//! a single [`SpectralRequest`]:
//!
//! 1. the request is validated, stopping at the first bad field;
//! 2. the sun is located once through a [`GeometryResolver`];
//! 3. the ozone column is estimated if the caller did not supply one;
//! 4. the aerosol forward-scatter terms are derived;
//! 5. every band of the wavelength table is attenuated, tilted and converted
//!    to the requested units.
//!
//! Nothing is retained between evaluations, so a model can be shared freely
//! across threads.
//!
//! ```rust
//! use spectrl2_core::errors::GeometryError;
//! use spectrl2_core::geometry::{GeometryQuery, SolarGeometry};
//! use spectrl2_core::model::SpectralModel;
//! use spectrl2_core::request::SpectralRequest;
//!
//! let request = SpectralRequest {
//!     tau500: Some(0.1),
//!     watvap: Some(1.5),
//!     ..Default::default()
//! };
//! let overhead = |_: &GeometryQuery| -> Result<SolarGeometry, GeometryError> {
//!     Ok(SolarGeometry {
//!         zenith: 0.0,
//!         azimuth: 180.0,
//!         cos_incidence: 1.0,
//!         airmass: 1.0,
//!         pressure_airmass: 1.0,
//!         earth_radius_vector: 1.0,
//!         day_of_year: 172,
//!     })
//! };
//!
//! let result = SpectralModel::compute(&request, &overhead).unwrap();
//! assert_eq!(result.len(), 122);
//! assert!(result.global.iter().all(|value| *value >= 0.0));
//! ```

use crate::band_table::BAND_TABLE;
use crate::errors::Spectrl2Result;
use crate::geometry::{GeometryQuery, GeometryResolver, PanelGeometry, SolarGeometry};
use crate::ozone::resolve_ozone;
use crate::request::SpectralRequest;
use crate::result::SpectralResult;
use crate::tilt::TiltCorrector;
use crate::transmission::Atmosphere;
use crate::validation::{validate_request, RequiredInputs};
use log::{debug, warn};

/// Stateless evaluator of the spectral model
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpectralModel;

impl SpectralModel {
    /// Evaluate `request`, locating the sun with `resolver`
    pub fn compute<R>(request: &SpectralRequest, resolver: &R) -> Spectrl2Result<SpectralResult>
    where
        R: GeometryResolver + ?Sized,
    {
        let mut result = SpectralResult::zeros(request.units);
        Self::compute_into(request, resolver, &mut result)?;
        Ok(result)
    }

    /// Evaluate `request` into an existing result
    ///
    /// `result` is only written once validation and geometry resolution have
    /// both succeeded.
    pub fn compute_into<R>(
        request: &SpectralRequest,
        resolver: &R,
        result: &mut SpectralResult,
    ) -> Spectrl2Result<()>
    where
        R: GeometryResolver + ?Sized,
    {
        let inputs = validate_request(request)?;
        let geometry = resolver.resolve(&GeometryQuery::from(request))?;
        debug!(
            "resolved solar geometry: zenith {:.4}, azimuth {:.4}, airmass {:.4}, day {}",
            geometry.zenith, geometry.azimuth, geometry.airmass, geometry.day_of_year
        );

        Self::evaluate(request, inputs, &geometry, result);
        Ok(())
    }

    /// Evaluate `request` for a sun position the caller already knows
    pub fn compute_with_geometry(
        request: &SpectralRequest,
        geometry: &SolarGeometry,
    ) -> Spectrl2Result<SpectralResult> {
        let inputs = validate_request(request)?;
        let mut result = SpectralResult::zeros(request.units);
        Self::evaluate(request, inputs, geometry, &mut result);
        Ok(result)
    }

    fn evaluate(
        request: &SpectralRequest,
        inputs: RequiredInputs,
        geometry: &SolarGeometry,
        result: &mut SpectralResult,
    ) {
        let units = request.units;
        if result.len() != BAND_TABLE.len() {
            *result = SpectralResult::zeros(units);
        }
        result.units = units;

        let erv = geometry.earth_radius_vector;
        for (i, band) in BAND_TABLE.iter().enumerate() {
            result.x[i] = units.x_coordinate(band.wavelength);
            result.etr[i] = band.etr * erv;
        }

        if !geometry.is_daylight() {
            warn!(
                "sun is below the horizon (zenith {:.3}, airmass {}); only the extraterrestrial spectrum is reported",
                geometry.zenith, geometry.airmass
            );
            result.direct.fill(0.0);
            result.diffuse.fill(0.0);
            result.global.fill(0.0);
            return;
        }

        let panel = PanelGeometry::new(request, geometry);
        if panel.tracking {
            debug!("tracking the sun: effective tilt {:.4}", panel.tilt);
        }

        let location = &request.location;
        let ozone = resolve_ozone(
            request.ozone,
            geometry.day_of_year,
            location.latitude,
            location.longitude,
        );

        let cos_zenith = geometry.cos_zenith();
        let atmosphere = Atmosphere::new(
            ozone,
            inputs.watvap,
            inputs.tau500,
            request.alpha,
            request.assym,
            geometry.airmass,
            geometry.pressure_airmass,
            cos_zenith,
        );
        let corrector = TiltCorrector::new(&panel, cos_zenith);
        let mut tracker = request.reflectance.tracker();

        for (i, band) in BAND_TABLE.iter().enumerate() {
            let etr = result.etr[i];
            let rho = tracker.reflectance_at(band.wavelength);
            let irradiance = corrector.apply(atmosphere.irradiance(band, etr, rho), etr, rho);

            let factor = units.scale_factor(band.wavelength);
            result.direct[i] = irradiance.direct * factor;
            result.diffuse[i] = irradiance.diffuse * factor;
            result.global[i] = irradiance.global * factor;
        }
        debug!(
            "evaluated {} bands in units {}",
            BAND_TABLE.len(),
            units.code()
        );
    }
}
