use serde::{Deserialize, Serialize};

/// Payload for defining a new action group.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActionGroupRequest {
    /// Display name
    pub name: String,
}

/// Payload for renaming an action group.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateActionGroupRequest {
    /// Display name
    pub name: String,
}
