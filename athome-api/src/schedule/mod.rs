mod day_mask;
mod solar;
mod trigger;

pub use day_mask::{DayMask, DayMaskError};
pub use solar::{SolarError, SunTimes, sun_times};
pub use trigger::{TriggerError, TriggerMethod, effective_time, validate_trigger};
