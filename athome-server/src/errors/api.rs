use athome_api::schedule::{DayMaskError, SolarError, TriggerError};
use athome_api::validation::ValidationError;

use super::HubError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Trigger(#[from] TriggerError),

    #[error("{0}")]
    DayMask(#[from] DayMaskError),

    #[error("{0}")]
    Solar(#[from] SolarError),

    #[error("Hub error: {0}")]
    Hub(#[from] HubError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
