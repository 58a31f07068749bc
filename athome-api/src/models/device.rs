use std::fmt;

use serde::{Deserialize, Serialize};

use super::Id;

/// Supported device manufacturer tags.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Manufacturer {
    /// X10 powerline module, addressed by house-device code
    X10,
    /// TPLink/Kasa WiFi plug or bulb, addressed by IP or MAC
    TPLink,
    /// Meross WiFi plug or bulb, addressed by 32-hex-digit UUID
    Meross,
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Manufacturer::X10 => write!(f, "x10"),
            Manufacturer::TPLink => write!(f, "tplink"),
            Manufacturer::Meross => write!(f, "meross"),
        }
    }
}

fn default_channels() -> u16 {
    1
}

/// A controllable device definition as stored by the hub.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Hub-assigned identifier
    pub id: Id,
    /// Display name
    pub name: String,
    /// Room or placement description
    pub location: String,
    /// Manufacturer tag
    pub mfg: Manufacturer,
    /// Manufacturer-specific address
    pub address: String,
    /// Channel driven on multi-channel devices
    #[serde(default)]
    pub channel: u16,
    /// Channel count the device declares
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Included in selected-device bulk commands
    #[serde(default)]
    pub selected: bool,
}
