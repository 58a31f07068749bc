use std::fmt;

use serde::{Deserialize, Serialize};

use super::Id;
use crate::schedule::DayMask;

/// Effect applied when a program fires.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    /// No effect
    None,
    /// Switch the device on
    On,
    /// Switch the device off
    Off,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::None => write!(f, "none"),
            Command::On => write!(f, "on"),
            Command::Off => write!(f, "off"),
        }
    }
}

/// A device timer program as stored by the hub.
///
/// Field names follow the hub's JSON dialect, which concatenates words
/// (`daymask`, `triggermethod`) instead of separating them.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Hub-assigned identifier
    pub id: Id,
    /// Display name
    pub name: String,
    /// Owning device
    #[serde(rename = "deviceid")]
    pub device_id: Id,
    /// Weekday selection, Monday first
    #[serde(rename = "daymask")]
    pub day_mask: DayMask,
    /// Trigger method as received from the hub. Parsed on use so an
    /// unrecognized value surfaces as a validation error rather than a
    /// decode failure.
    #[serde(rename = "triggermethod")]
    pub trigger_method: String,
    /// Wall-clock trigger time, `HH:MM:SS`, possibly prefixed with a date
    #[serde(default)]
    pub time: String,
    /// Signed minute offset applied to the resolved trigger time
    #[serde(default)]
    pub offset: i32,
    /// Whether the hub scheduler perturbs the fire time
    #[serde(default)]
    pub randomize: bool,
    /// Maximum perturbation in minutes
    #[serde(rename = "randomizeamount", default)]
    pub randomize_amount: u32,
    /// Effect applied at fire time
    pub command: Command,
    /// Dim level passed through to dimmable devices
    #[serde(rename = "dimamount", default)]
    pub dim_amount: u32,
}
