//! Tilted-surface correction
//!
//! Converts the horizontal diffuse and global irradiance of a band onto a
//! tilted collector. The diffuse sky is split into a circumsolar part, which
//! follows the direct beam, and an isotropic part seen through the collector's
//! sky view factor. Ground-reflected light is added through the ground view
//! factor:
//!
//! $$I_{s,t} = I_T \rho \frac{1 - \cos t}{2} + I_s r \frac{\cos\theta}{\cos Z} + I_s (1 - r) \frac{1 + \cos t}{2}$$
//!
//! with $r = I_d / H_0$ the fraction of the extraterrestrial beam reaching the
//! ground.

use crate::geometry::PanelGeometry;
use crate::transmission::BandIrradiance;
use crate::FloatValue;

/// Tilts at or below this are treated as horizontal
/// unit: degrees
pub const MIN_TILT: FloatValue = 1e-4;

/// Correct a band's horizontal irradiance for the collector orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltCorrector {
    cos_tilt: FloatValue,
    cos_incidence: FloatValue,
    cos_zenith: FloatValue,
    active: bool,
}

impl TiltCorrector {
    pub fn new(panel: &PanelGeometry, cos_zenith: FloatValue) -> Self {
        Self {
            cos_tilt: panel.tilt.to_radians().cos(),
            cos_incidence: panel.cos_incidence,
            cos_zenith,
            active: panel.tilt > MIN_TILT,
        }
    }

    /// Whether the collector is tilted enough to need correcting
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply the correction; horizontal collectors are returned unchanged
    pub fn apply(
        &self,
        irradiance: BandIrradiance,
        etr: FloatValue,
        ground_reflectance: FloatValue,
    ) -> BandIrradiance {
        if !self.active {
            return irradiance;
        }
        let BandIrradiance {
            direct,
            diffuse,
            global,
        } = irradiance;

        let ratio = direct / etr;
        let ground = global * ground_reflectance * (1.0 - self.cos_tilt) / 2.0;
        let circumsolar = diffuse * ratio * self.cos_incidence / self.cos_zenith;
        let isotropic = diffuse * (1.0 - ratio) * (1.0 + self.cos_tilt) / 2.0;
        let diffuse = ground + circumsolar + isotropic;

        BandIrradiance {
            direct,
            diffuse,
            global: direct * self.cos_incidence + diffuse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn irradiance() -> BandIrradiance {
        BandIrradiance {
            direct: 1200.0,
            diffuse: 300.0,
            global: 1200.0 * 0.75 + 300.0,
        }
    }

    fn panel(tilt: FloatValue, cos_incidence: FloatValue) -> PanelGeometry {
        PanelGeometry {
            tilt,
            cos_incidence,
            tracking: false,
        }
    }

    #[test]
    fn horizontal_is_untouched() {
        let corrector = TiltCorrector::new(&panel(0.0, 0.75), 0.75);
        assert!(!corrector.is_active());
        assert_eq!(corrector.apply(irradiance(), 1800.0, 0.2), irradiance());

        let corrector = TiltCorrector::new(&panel(MIN_TILT, 0.75), 0.75);
        assert!(!corrector.is_active());
    }

    #[test]
    fn tiny_tilt_matches_horizontal() {
        // Incidence equals zenith for a near-horizontal panel
        let corrector = TiltCorrector::new(&panel(1e-3, 0.75), 0.75);
        assert!(corrector.is_active());
        let corrected = corrector.apply(irradiance(), 1800.0, 0.2);
        assert_relative_eq!(corrected.diffuse, 300.0, max_relative = 1e-6);
        assert_relative_eq!(corrected.global, irradiance().global, max_relative = 1e-6);
    }

    #[test]
    fn vertical_panel_sees_half_the_ground() {
        let corrector = TiltCorrector::new(&panel(90.0, 0.5), 0.75);
        let corrected = corrector.apply(irradiance(), 1800.0, 0.2);

        let ratio = 1200.0 / 1800.0;
        let expected = irradiance().global * 0.2 * 0.5
            + 300.0 * ratio * 0.5 / 0.75
            + 300.0 * (1.0 - ratio) * 0.5;
        assert_relative_eq!(corrected.diffuse, expected, max_relative = 1e-9);
        assert_relative_eq!(corrected.global, 1200.0 * 0.5 + expected, max_relative = 1e-9);
        assert_eq!(corrected.direct, 1200.0);
    }
}
