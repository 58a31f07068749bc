use serde::{Deserialize, Serialize};

/// Today's sunrise and sunset for the configured location, RFC 3339.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunDataResponse {
    /// Sunrise instant
    pub sunrise: String,
    /// Sunset instant
    pub sunset: String,
}
