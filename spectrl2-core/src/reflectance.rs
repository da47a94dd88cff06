//! Ground reflectance curve
//!
//! The ground (albedo) reflectance is specified at six wavelength breakpoints
//! and interpolated linearly in between. Because the pipeline visits the
//! table wavelengths in ascending order, the active band only ever moves
//! forward; [`BandTracker`] carries that cursor through a single invocation.
//!
//! ```rust
//! use spectrl2_core::reflectance::ReflectanceCurve;
//!
//! let curve = ReflectanceCurve::new(
//!     [0.3, 0.7, 0.8, 1.3, 2.5, 4.0],
//!     [0.1, 0.1, 0.5, 0.5, 0.3, 0.3],
//! );
//! curve.validate().unwrap();
//!
//! let mut tracker = curve.tracker();
//! assert_eq!(tracker.reflectance_at(0.3), 0.1);
//! assert!((tracker.reflectance_at(0.75) - 0.3).abs() < 1e-12);
//! ```

use crate::band_table::BAND_TABLE;
use crate::errors::{SpectralError, Spectrl2Result};
use crate::FloatValue;
use serde::{Deserialize, Serialize};

/// Number of breakpoints in a reflectance curve
pub const REFLECTANCE_POINTS: usize = 6;

/// Piecewise-linear ground reflectance as a function of wavelength
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectanceCurve {
    /// Breakpoint wavelengths, strictly ascending
    /// unit: µm
    pub wavelengths: [FloatValue; REFLECTANCE_POINTS],
    /// Reflectance at each breakpoint
    /// unit: dimensionless, [0, 1]
    pub reflectances: [FloatValue; REFLECTANCE_POINTS],
}

impl Default for ReflectanceCurve {
    fn default() -> Self {
        Self::flat(0.2)
    }
}

impl ReflectanceCurve {
    /// Breakpoints used when the caller does not supply their own
    pub const DEFAULT_WAVELENGTHS: [FloatValue; REFLECTANCE_POINTS] = [0.3, 0.7, 0.8, 1.3, 2.5, 4.0];

    pub fn new(
        wavelengths: [FloatValue; REFLECTANCE_POINTS],
        reflectances: [FloatValue; REFLECTANCE_POINTS],
    ) -> Self {
        Self {
            wavelengths,
            reflectances,
        }
    }

    /// A constant reflectance over the default breakpoints
    pub fn flat(reflectance: FloatValue) -> Self {
        Self::new(
            Self::DEFAULT_WAVELENGTHS,
            [reflectance; REFLECTANCE_POINTS],
        )
    }

    /// Check that the curve can be evaluated at every table wavelength
    ///
    /// Breakpoints must be finite and strictly ascending, the first must not
    /// exceed the shortest table wavelength and the last must not fall short
    /// of the longest. Reflectances must lie in [0, 1].
    pub fn validate(&self) -> Spectrl2Result<()> {
        if self.wavelengths.iter().any(|w| !w.is_finite()) {
            return Err(SpectralError::InvalidReflectance(format!(
                "breakpoint wavelengths must be finite, got {:?}",
                self.wavelengths
            )));
        }
        if !self.wavelengths.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(SpectralError::InvalidReflectance(format!(
                "breakpoint wavelengths must be strictly ascending, got {:?}",
                self.wavelengths
            )));
        }

        let shortest = BAND_TABLE[0].wavelength;
        let longest = BAND_TABLE[BAND_TABLE.len() - 1].wavelength;
        if self.wavelengths[0] > shortest || self.wavelengths[REFLECTANCE_POINTS - 1] < longest {
            return Err(SpectralError::InvalidReflectance(format!(
                "breakpoints {:?} do not span {} to {} µm",
                self.wavelengths, shortest, longest
            )));
        }

        if let Some(bad) = self
            .reflectances
            .iter()
            .find(|r| !(0.0..=1.0).contains(*r))
        {
            return Err(SpectralError::InvalidReflectance(format!(
                "reflectance must be within [0, 1], got {}",
                bad
            )));
        }
        Ok(())
    }

    /// Start a band cursor at the first band
    pub fn tracker(&self) -> BandTracker<'_> {
        BandTracker::new(self)
    }
}

/// Forward-only cursor over the bands of a [`ReflectanceCurve`]
///
/// Band `n` spans breakpoints `n - 1` to `n`. A wavelength equal to a
/// breakpoint stays in the lower band.
#[derive(Debug, Clone)]
pub struct BandTracker<'a> {
    curve: &'a ReflectanceCurve,
    band: usize,
}

impl<'a> BandTracker<'a> {
    pub fn new(curve: &'a ReflectanceCurve) -> Self {
        Self { curve, band: 1 }
    }

    /// Index of the current band's upper breakpoint
    pub fn band(&self) -> usize {
        self.band
    }

    /// Interpolated reflectance at `wavelength`
    ///
    /// Wavelengths must be supplied in ascending order.
    pub fn reflectance_at(&mut self, wavelength: FloatValue) -> FloatValue {
        let wv = &self.curve.wavelengths;
        let rf = &self.curve.reflectances;

        while wavelength > wv[self.band] && self.band < REFLECTANCE_POINTS - 1 {
            self.band += 1;
        }

        let upper = self.band;
        let lower = upper - 1;
        let slope = (rf[upper] - rf[lower]) / (wv[upper] - wv[lower]);
        slope * (wavelength - wv[lower]) + rf[lower]
    }
}
