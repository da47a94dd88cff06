//! Per-wavelength transmittances and irradiance
//!
//! For every band the model evaluates the Bird & Riordan transmittances twice:
//! once along the actual slant path (airmass $M$, pressure-corrected airmass
//! $M'$) and once along a fixed reference path of airmass 1.8, which is used
//! to estimate how much of the ground-reflected light the sky sends back down.
//!
//! The direct normal irradiance is
//!
//! $$I_d = H_0 D\, T_o T_w T_u T_r T_a$$
//!
//! and the diffuse irradiance on a horizontal surface is split into Rayleigh,
//! aerosol and ground/sky multiple-reflection parts:
//!
//! $$I_s = (I_r + I_a + I_g)\, C_s$$
//!
//! where $C_s$ corrects the short-wavelength diffuse for $\lambda \le 0.45$ µm.

use crate::aerosol::{optical_depth, single_scattering_albedo, ForwardScatter, REFERENCE_AIRMASS};
use crate::band_table::WavelengthBand;
use crate::FloatValue;
use log::warn;

/// Smallest permitted value of the ground/sky multiple-reflection denominator
pub const MIN_REFLECTION_DENOMINATOR: FloatValue = 1e-6;

/// Upper wavelength of the short-wave diffuse correction
/// unit: µm
pub const DIFFUSE_CORRECTION_LIMIT: FloatValue = 0.45;

/// Ozone slant-path airmass for a given cosine of the zenith angle
///
/// The ozone layer sits about 22 km up, so its path length diverges less than
/// the plane-parallel $1/\cos Z$ near the horizon.
pub fn ozone_airmass(cos_zenith: FloatValue) -> FloatValue {
    1.003454 / (cos_zenith.powi(2) + 0.006908).sqrt()
}

/// Rayleigh scattering transmittance along a path of `airmass`
pub fn rayleigh_transmittance(wavelength: FloatValue, airmass: FloatValue) -> FloatValue {
    let denominator = wavelength.powi(4) * (115.6406 - 1.3366 / wavelength.powi(2));
    (-airmass / denominator).exp()
}

/// Short-wavelength correction applied to the diffuse irradiance
pub fn diffuse_correction(wavelength: FloatValue) -> FloatValue {
    if wavelength <= DIFFUSE_CORRECTION_LIMIT {
        (wavelength + 0.55).powf(1.8)
    } else {
        1.0
    }
}

/// Transmittances along the actual slant path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transmittances {
    pub rayleigh: FloatValue,
    pub ozone: FloatValue,
    pub water_vapour: FloatValue,
    pub mixed_gas: FloatValue,
    pub aerosol_scattering: FloatValue,
    pub aerosol_absorption: FloatValue,
    /// Total aerosol extinction
    pub aerosol: FloatValue,
}

/// Transmittances along the airmass 1.8 reference path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceTransmittances {
    pub rayleigh: FloatValue,
    pub water_vapour: FloatValue,
    pub mixed_gas: FloatValue,
    pub aerosol_scattering: FloatValue,
    pub aerosol_absorption: FloatValue,
}

impl ReferenceTransmittances {
    /// Reflectance of the sky for light coming up from the ground
    pub fn sky_reflectance(&self, forward: &ForwardScatter) -> FloatValue {
        self.mixed_gas
            * self.water_vapour
            * self.aerosol_absorption
            * (0.5 * (1.0 - self.rayleigh)
                + (1.0 - forward.reference) * self.rayleigh * (1.0 - self.aerosol_scattering))
    }
}

/// Horizontal-surface irradiance for one band before any tilt correction
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandIrradiance {
    /// Direct normal irradiance
    pub direct: FloatValue,
    /// Diffuse irradiance
    pub diffuse: FloatValue,
    /// Direct on the surface plus diffuse
    pub global: FloatValue,
}

/// Atmospheric state shared by every band of one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atmosphere {
    /// Total column ozone
    /// unit: atm-cm
    pub ozone: FloatValue,
    /// Precipitable water vapour
    /// unit: cm
    pub watvap: FloatValue,
    /// Aerosol optical depth at 0.5 µm
    pub tau500: FloatValue,
    /// Angstrom exponent
    pub alpha: FloatValue,
    /// Relative optical airmass
    pub airmass: FloatValue,
    /// Pressure-corrected airmass
    pub pressure_airmass: FloatValue,
    /// Ozone slant-path airmass
    pub ozone_airmass: FloatValue,
    /// Cosine of the refracted solar zenith angle
    pub cos_zenith: FloatValue,
    pub forward_scatter: ForwardScatter,
}

impl Atmosphere {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        ozone: FloatValue,
        watvap: FloatValue,
        tau500: FloatValue,
        alpha: FloatValue,
        assym: FloatValue,
        airmass: FloatValue,
        pressure_airmass: FloatValue,
        cos_zenith: FloatValue,
    ) -> Self {
        Self {
            ozone,
            watvap,
            tau500,
            alpha,
            airmass,
            pressure_airmass,
            ozone_airmass: ozone_airmass(cos_zenith),
            cos_zenith,
            forward_scatter: ForwardScatter::new(assym, cos_zenith),
        }
    }

    /// Transmittances of `band` along the actual slant path
    pub fn transmittances(&self, band: &WavelengthBand) -> Transmittances {
        let wl = band.wavelength;
        let omega = single_scattering_albedo(wl);
        let tau = optical_depth(self.tau500, self.alpha, wl);
        let am = self.airmass;
        let amp = self.pressure_airmass;

        let aw = band.water_vapour * self.watvap * am;
        let au = band.mixed_gas * amp;

        Transmittances {
            rayleigh: rayleigh_transmittance(wl, amp),
            ozone: (-band.ozone * self.ozone * self.ozone_airmass).exp(),
            water_vapour: (-0.2385 * aw / (1.0 + 20.07 * aw).powf(0.45)).exp(),
            mixed_gas: (-1.41 * au / (1.0 + 118.3 * au).powf(0.45)).exp(),
            aerosol_scattering: (-omega * tau * am).exp(),
            aerosol_absorption: ((omega - 1.0) * tau * am).exp(),
            aerosol: (-tau * am).exp(),
        }
    }

    /// Transmittances of `band` along the airmass 1.8 reference path
    pub fn reference_transmittances(&self, band: &WavelengthBand) -> ReferenceTransmittances {
        let wl = band.wavelength;
        let omega = single_scattering_albedo(wl);
        let tau = optical_depth(self.tau500, self.alpha, wl);

        let aw = band.water_vapour * self.watvap;
        let au = band.mixed_gas;

        ReferenceTransmittances {
            rayleigh: rayleigh_transmittance(wl, REFERENCE_AIRMASS),
            water_vapour: (-0.4293 * aw / (1.0 + 36.126 * aw).powf(0.45)).exp(),
            mixed_gas: (-2.538 * au / (1.0 + 212.94 * au).powf(0.45)).exp(),
            aerosol_scattering: (-omega * tau * REFERENCE_AIRMASS).exp(),
            aerosol_absorption: ((omega - 1.0) * tau * REFERENCE_AIRMASS).exp(),
        }
    }

    /// Direct, diffuse and global irradiance on a horizontal surface
    ///
    /// `etr` is the extraterrestrial irradiance of the band already corrected
    /// for the earth-sun distance and `ground_reflectance` the interpolated
    /// ground reflectance at the band's wavelength.
    pub fn irradiance(
        &self,
        band: &WavelengthBand,
        etr: FloatValue,
        ground_reflectance: FloatValue,
    ) -> BandIrradiance {
        let t = self.transmittances(band);
        let reference = self.reference_transmittances(band);
        let cz = self.cos_zenith;

        let gaseous = etr * t.ozone * t.water_vapour * t.mixed_gas;
        let direct = gaseous * t.rayleigh * t.aerosol;

        let scattered = gaseous * cz * t.aerosol_absorption;
        let rayleigh = scattered * (1.0 - t.rayleigh.powf(0.95)) / 2.0;
        let aerosol = scattered
            * t.rayleigh.powf(1.5)
            * (1.0 - t.aerosol_scattering)
            * self.forward_scatter.actual;

        let sky_reflectance = reference.sky_reflectance(&self.forward_scatter);
        let coupling = ground_reflectance * sky_reflectance;
        let mut denominator = 1.0 - coupling;
        if denominator < MIN_REFLECTION_DENOMINATOR {
            warn!(
                "ground/sky reflection coupling {:.6} at {} µm is too close to 1; clamping",
                coupling, band.wavelength
            );
            denominator = MIN_REFLECTION_DENOMINATOR;
        }
        let ground = (direct * cz + rayleigh + aerosol) * coupling / denominator;

        let diffuse = (rayleigh + aerosol + ground) * diffuse_correction(band.wavelength);

        BandIrradiance {
            direct,
            diffuse,
            global: direct * cz + diffuse,
        }
    }
}
