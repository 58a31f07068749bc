use serde::{Deserialize, Serialize};

use crate::models::{Command, Program};
use crate::schedule::DayMask;

/// Payload for defining or updating a device timer program. Field names
/// follow the hub dialect, matching [`Program`].
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramRequest {
    /// Display name
    pub name: String,
    /// Weekday selection, Monday first
    #[serde(rename = "daymask")]
    pub day_mask: DayMask,
    /// Trigger method string (`none`, `clock-time`, `sunrise`, `sunset`)
    #[serde(rename = "triggermethod")]
    pub trigger_method: String,
    /// Wall-clock trigger time, `HH:MM:SS`
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

/// A program as served to the console, with its human-readable summary.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramResponse {
    #[serde(flatten)]
    pub program: Program,
    /// Summary line shown in program tables
    pub summary: String,
}
