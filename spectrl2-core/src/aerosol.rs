//! Aerosol scattering parameters
//!
//! The aerosol asymmetry factor $g$ controls how much of the light scattered by
//! aerosols continues forward towards the ground. Following Bird & Riordan
//! (eqs. 3-11 to 3-16), with $\mathrm{ALG} = \ln(1 - g)$:
//!
//! $$AFS = \mathrm{ALG}\,(1.459 + \mathrm{ALG}\,(0.1595 + 0.4129\,\mathrm{ALG}))$$
//! $$BFS = \mathrm{ALG}\,(0.0783 + \mathrm{ALG}\,(-0.3824 - 0.5874\,\mathrm{ALG}))$$
//! $$F_s = 1 - 0.5\,e^{(AFS + BFS \cos Z)\cos Z}$$
//! $$F_s' = 1 - 0.5\,e^{(AFS + BFS/1.8)/1.8}$$
//!
//! The spectral single-scattering albedo and the Angstrom optical depth are
//! evaluated per wavelength.

use crate::FloatValue;

/// Fixed airmass of the sky-reflectance terms
pub const REFERENCE_AIRMASS: FloatValue = 1.8;

/// Single-scattering albedo at 0.4 µm
pub const OMEGA_04: FloatValue = 0.945;

/// Wavelength variation factor of the single-scattering albedo
pub const OMEGA_PRIME: FloatValue = 0.095;

/// Forward-scatter fractions derived from the asymmetry factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardScatter {
    /// Polynomial term AFS
    pub afs: FloatValue,
    /// Polynomial term BFS
    pub bfs: FloatValue,
    /// Forward-scatter fraction at the actual solar zenith
    pub actual: FloatValue,
    /// Forward-scatter fraction at the reference airmass of 1.8
    pub reference: FloatValue,
}

impl ForwardScatter {
    /// Derive forward-scatter fractions for asymmetry factor `assym` and
    /// cosine of the solar zenith angle `cos_zenith`
    ///
    /// The AFS/BFS polynomials are an empirical fit over realistic aerosol
    /// asymmetry factors (roughly 0.5 to 0.8). As `assym` approaches 1 the
    /// logarithm diverges and the fractions, and with them the diffuse
    /// irradiance, become meaningless.
    pub fn new(assym: FloatValue, cos_zenith: FloatValue) -> Self {
        let alg = (1.0 - assym).ln();
        let afs = alg * (1.459 + alg * (0.1595 + alg * 0.4129));
        let bfs = alg * (0.0783 + alg * (-0.3824 - alg * 0.5874));

        let reference =
            1.0 - 0.5 * ((afs + bfs / REFERENCE_AIRMASS) / REFERENCE_AIRMASS).exp();
        let actual = 1.0 - 0.5 * ((afs + bfs * cos_zenith) * cos_zenith).exp();

        Self {
            afs,
            bfs,
            actual,
            reference,
        }
    }
}

/// Aerosol single-scattering albedo at `wavelength` (µm)
pub fn single_scattering_albedo(wavelength: FloatValue) -> FloatValue {
    OMEGA_04 * (-OMEGA_PRIME * (wavelength / 0.4).ln().powi(2)).exp()
}

/// Aerosol optical depth at `wavelength` (µm) from the optical depth at 0.5 µm
pub fn optical_depth(tau500: FloatValue, alpha: FloatValue, wavelength: FloatValue) -> FloatValue {
    tau500 * (wavelength * 2.0).powf(-alpha)
}
