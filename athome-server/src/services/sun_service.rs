use athome_api::models::Location;
use athome_api::schedule::{SolarError, SunTimes, sun_times};
use time::{OffsetDateTime, UtcOffset};

/// Supplies "now" and today's sun times for the configured coordinates.
///
/// Sun times are recomputed on every call so a console left open across
/// midnight never shows yesterday's ephemeris.
pub struct SunService {
    location: Location,
}

impl SunService {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// Current local time, falling back to UTC when the local offset cannot
    /// be determined (multi-threaded processes on some platforms).
    pub fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();

        match UtcOffset::current_local_offset() {
            Ok(offset) => now.to_offset(offset),
            Err(_) => now,
        }
    }

    /// Sunrise/sunset for today at the configured location. Fails during
    /// polar day/night, which callers either surface or render as "no time".
    pub fn today(&self) -> Result<SunTimes, SolarError> {
        let now = self.now();

        sun_times(self.location, now.date(), now.offset())
    }
}
