use serde::{Deserialize, Serialize};

use crate::models::Manufacturer;

fn default_channels() -> u16 {
    1
}

/// Payload for defining a new device.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeviceRequest {
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
    /// Channel count declared by the discovered device
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Included in selected-device bulk commands
    #[serde(default)]
    pub selected: bool,
}

/// Payload for saving an edited device. The edit form round-trips every
/// field, so this is the full definition rather than a patch.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDeviceRequest {
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
    /// Channel count declared by the discovered device
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Included in selected-device bulk commands
    #[serde(default)]
    pub selected: bool,
}

/// A discovered-but-unconfigured device reported by the hub.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableDevice {
    /// Manufacturer-specific address
    pub address: String,
    /// Label reported by the device itself
    pub label: String,
    /// Channel count the device declares
    #[serde(default = "default_channels")]
    pub channels: u16,
}
