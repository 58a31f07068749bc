mod device;
mod group;
mod location;
mod program;

pub use device::*;
pub use group::*;
pub use location::*;
pub use program::*;

pub type Id = i32;
