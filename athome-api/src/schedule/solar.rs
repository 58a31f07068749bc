use std::f64::consts::PI;

use time::{Date, Duration, OffsetDateTime, UtcOffset};

use crate::models::Location;

/// Sunrise and sunset instants for one civil date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: OffsetDateTime,
    pub sunset: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolarError {
    /// The sun neither rises nor sets on this date at this latitude.
    #[error("No sunrise/sunset at this latitude on this date")]
    NoSunEvent,
}

/// Solar zenith angle for official sunrise/sunset, refraction included.
const ZENITH_DEG: f64 = 90.833;

/// Computes sunrise and sunset for `date` at `location`, returned in
/// `offset`.
///
/// NOAA's solar position approximation, evaluated at solar noon. Accurate
/// to a couple of minutes — display quality, not ephemeris quality. During
/// polar day or polar night there is no sun event and `NoSunEvent` is
/// returned.
pub fn sun_times(
    location: Location,
    date: Date,
    offset: UtcOffset,
) -> Result<SunTimes, SolarError> {
    let year_length = f64::from(time::util::days_in_year(date.year()));
    let fractional_year = 2.0 * PI / year_length * f64::from(date.ordinal() - 1);

    let equation_of_time = equation_of_time(fractional_year);
    let declination = declination(fractional_year);

    let latitude = location.latitude.to_radians();
    let cos_hour_angle = ZENITH_DEG.to_radians().cos() / (latitude.cos() * declination.cos())
        - latitude.tan() * declination.tan();

    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return Err(SolarError::NoSunEvent);
    }

    let hour_angle_deg = cos_hour_angle.acos().to_degrees();
    let sunrise_minutes = 720.0 - 4.0 * (location.longitude + hour_angle_deg) - equation_of_time;
    let sunset_minutes = 720.0 - 4.0 * (location.longitude - hour_angle_deg) - equation_of_time;

    let midnight = date.midnight().assume_utc();

    Ok(SunTimes {
        sunrise: (midnight + Duration::seconds((sunrise_minutes * 60.0) as i64)).to_offset(offset),
        sunset: (midnight + Duration::seconds((sunset_minutes * 60.0) as i64)).to_offset(offset),
    })
}

/// Equation of time in minutes for the given fractional year (radians).
fn equation_of_time(fractional_year: f64) -> f64 {
    229.18
        * (0.000075 + 0.001868 * fractional_year.cos()
            - 0.032077 * fractional_year.sin()
            - 0.014615 * (2.0 * fractional_year).cos()
            - 0.040849 * (2.0 * fractional_year).sin())
}

/// Solar declination in radians for the given fractional year (radians).
fn declination(fractional_year: f64) -> f64 {
    0.006918 - 0.399912 * fractional_year.cos() + 0.070257 * fractional_year.sin()
        - 0.006758 * (2.0 * fractional_year).cos()
        + 0.000907 * (2.0 * fractional_year).sin()
        - 0.002697 * (3.0 * fractional_year).cos()
        + 0.00148 * (3.0 * fractional_year).sin()
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    fn minutes_between(a: OffsetDateTime, b: OffsetDateTime) -> i64 {
        (a - b).whole_minutes().abs()
    }

    #[test]
    fn test_new_york_summer_solstice() {
        let location = Location {
            latitude: 40.7128,
            longitude: -74.006,
        };
        let eastern = UtcOffset::from_hms(-4, 0, 0).unwrap();

        let sun = sun_times(location, date!(2020 - 06 - 21), eastern).unwrap();

        // Published times: sunrise 05:25, sunset 20:31 EDT
        assert!(minutes_between(sun.sunrise, datetime!(2020-06-21 05:25 -4)) <= 10);
        assert!(minutes_between(sun.sunset, datetime!(2020-06-21 20:31 -4)) <= 10);
    }

    #[test]
    fn test_equator_equinox() {
        let location = Location {
            latitude: 0.0,
            longitude: 0.0,
        };

        let sun = sun_times(location, date!(2020 - 03 - 20), UtcOffset::UTC).unwrap();

        assert!(minutes_between(sun.sunrise, datetime!(2020-03-20 06:04 UTC)) <= 15);
        assert!(minutes_between(sun.sunset, datetime!(2020-03-20 18:11 UTC)) <= 15);
        assert!(sun.sunrise < sun.sunset);
    }

    #[test]
    fn test_polar_day_and_night() {
        let svalbard = Location {
            latitude: 78.22,
            longitude: 15.64,
        };

        // Midnight sun in June, polar night in December
        assert_eq!(
            sun_times(svalbard, date!(2020 - 06 - 21), UtcOffset::UTC),
            Err(SolarError::NoSunEvent)
        );
        assert_eq!(
            sun_times(svalbard, date!(2020 - 12 - 21), UtcOffset::UTC),
            Err(SolarError::NoSunEvent)
        );
    }

    #[test]
    fn test_offset_preserves_instant() {
        let location = Location {
            latitude: 40.7128,
            longitude: -74.006,
        };
        let eastern = UtcOffset::from_hms(-4, 0, 0).unwrap();

        let utc = sun_times(location, date!(2020 - 06 - 21), UtcOffset::UTC).unwrap();
        let local = sun_times(location, date!(2020 - 06 - 21), eastern).unwrap();

        assert_eq!(utc.sunrise, local.sunrise);
        assert_eq!(utc.sunset, local.sunset);
    }
}
