use std::fmt;
use std::str::FromStr;

use time::macros::format_description;
use time::{Duration, OffsetDateTime, Time};

use super::SunTimes;
use crate::models::Program;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
    /// The clock time could not be parsed as hour:minute:second.
    #[error("Invalid trigger time; expected HH:MM:SS")]
    InvalidTimeFormat,
    /// The trigger method is not one of the known methods.
    #[error("Unknown trigger method: {0}")]
    InvalidTriggerMethod(String),
}

/// How a program decides its base fire time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMethod {
    /// The program never fires on its own
    None,
    /// Fixed wall-clock time of day
    ClockTime,
    /// Today's sunrise
    Sunrise,
    /// Today's sunset
    Sunset,
}

impl FromStr for TriggerMethod {
    type Err = TriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(TriggerMethod::None),
            "clock-time" => Ok(TriggerMethod::ClockTime),
            "sunrise" => Ok(TriggerMethod::Sunrise),
            "sunset" => Ok(TriggerMethod::Sunset),
            other => Err(TriggerError::InvalidTriggerMethod(other.to_string())),
        }
    }
}

impl fmt::Display for TriggerMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerMethod::None => write!(f, "none"),
            TriggerMethod::ClockTime => write!(f, "clock-time"),
            TriggerMethod::Sunrise => write!(f, "sunrise"),
            TriggerMethod::Sunset => write!(f, "sunset"),
        }
    }
}

/// Computes the nominal fire instant for a program.
///
/// `today` anchors clock-time triggers to a date and carries the reader's
/// UTC offset; `sun` supplies today's sunrise/sunset and is `None` when no
/// sun event exists at the configured latitude (polar day or night).
///
/// Returns `Ok(None)` when no effective time is meaningful — the `none`
/// trigger method, or a solar trigger without a sun event — so callers can
/// render an empty field instead of a fabricated time. Randomization is
/// applied by the hub scheduler at execution time and never changes the
/// value reported here.
pub fn effective_time(
    program: &Program,
    sun: Option<&SunTimes>,
    today: OffsetDateTime,
) -> Result<Option<OffsetDateTime>, TriggerError> {
    let base = match program.trigger_method.parse::<TriggerMethod>()? {
        TriggerMethod::None => return Ok(None),
        TriggerMethod::Sunrise => match sun {
            Some(sun) => sun.sunrise,
            None => return Ok(None),
        },
        TriggerMethod::Sunset => match sun {
            Some(sun) => sun.sunset,
            None => return Ok(None),
        },
        TriggerMethod::ClockTime => today.replace_time(parse_clock_time(&program.time)?),
    };

    Ok(Some(base + Duration::minutes(i64::from(program.offset))))
}

/// Checks a trigger method/time pair without resolving an instant, for
/// form validation before a program is saved.
pub fn validate_trigger(method: &str, time: &str) -> Result<(), TriggerError> {
    if method.parse::<TriggerMethod>()? == TriggerMethod::ClockTime {
        parse_clock_time(time)?;
    }

    Ok(())
}

/// Parses `HH:MM:SS`, tolerating the hub's date-prefixed form
/// (`YYYY-MM-DD HH:MM:SS`).
fn parse_clock_time(value: &str) -> Result<Time, TriggerError> {
    let clock = value.rsplit(' ').next().unwrap_or(value);
    let format = format_description!("[hour]:[minute]:[second]");

    Time::parse(clock, &format).map_err(|_| TriggerError::InvalidTimeFormat)
}
