mod device_handle;
mod group_handle;
mod location_handle;
mod program_handle;

pub use device_handle::*;
pub use group_handle::*;
pub use location_handle::*;
pub use program_handle::*;
