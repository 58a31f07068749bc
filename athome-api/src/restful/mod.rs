mod control;
mod device;
mod group;
mod location;
mod program;

pub use control::*;
pub use device::*;
pub use group::*;
pub use location::*;
pub use program::*;

use serde::{Deserialize, Serialize};

/// Envelope wrapping every successful list/detail payload the console
/// serves, matching what the table components consume.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
