use serde::{Deserialize, Serialize};

use super::Id;

/// A named device grouping that can be switched as one unit.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionGroup {
    /// Hub-assigned identifier
    pub id: Id,
    /// Display name
    pub name: String,
}
