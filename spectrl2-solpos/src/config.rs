use serde::{Deserialize, Serialize};
use spectrl2_core::FloatValue;

fn default_solcon() -> FloatValue {
    1367.0
}

fn default_sbwid() -> FloatValue {
    7.6
}

fn default_sbrad() -> FloatValue {
    31.7
}

fn default_sbsky() -> FloatValue {
    0.04
}

/// Settings of the SOLPOS resolver that are not part of a single query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolposConfig {
    /// Length of the measurement interval ending at the query time; the sun
    /// is located at the interval midpoint
    /// unit: seconds, [0, 28800]
    #[serde(default)]
    pub interval: i32,
    /// Solar constant
    /// unit: W / m^2
    #[serde(default = "default_solcon")]
    pub solcon: FloatValue,
    /// Width of the shadow band
    /// unit: cm
    #[serde(default = "default_sbwid")]
    pub sbwid: FloatValue,
    /// Radius of the shadow band
    /// unit: cm
    #[serde(default = "default_sbrad")]
    pub sbrad: FloatValue,
    /// Drummond sky anisotropy factor
    #[serde(default = "default_sbsky")]
    pub sbsky: FloatValue,
}

impl Default for SolposConfig {
    fn default() -> Self {
        Self {
            interval: 0,
            solcon: default_solcon(),
            sbwid: default_sbwid(),
            sbrad: default_sbrad(),
            sbsky: default_sbsky(),
        }
    }
}
