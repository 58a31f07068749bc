use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Weekday letters used in the mask form, Monday first.
const DAY_LETTERS: [char; 7] = ['M', 'T', 'W', 'T', 'F', 'S', 'S'];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DayMaskError {
    /// The mask string was not exactly 7 characters.
    #[error("Day mask must be exactly 7 characters")]
    InvalidFormat,
}

/// Weekday selection for a program, Monday first.
///
/// The wire form is a 7-character string where a selected day shows its
/// weekday letter (`MTWTFSS`) and an unselected day shows `.`. Round
/// tripping through the string form reproduces the selection exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayMask([bool; 7]);

impl DayMask {
    pub const fn new(days: [bool; 7]) -> Self {
        Self(days)
    }

    pub const fn days(&self) -> [bool; 7] {
        self.0
    }

    /// True when the given weekday (0 = Monday) is selected.
    pub fn is_set(&self, day: usize) -> bool {
        self.0.get(day).copied().unwrap_or(false)
    }

    /// True when no weekday is selected.
    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|set| *set)
    }
}

impl fmt::Display for DayMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (set, letter) in self.0.iter().zip(DAY_LETTERS) {
            f.write_char(if *set { letter } else { '.' })?;
        }
        Ok(())
    }
}

impl FromStr for DayMask {
    type Err = DayMaskError;

    fn from_str(mask: &str) -> Result<Self, Self::Err> {
        if mask.chars().count() != 7 {
            return Err(DayMaskError::InvalidFormat);
        }

        let mut days = [false; 7];
        for (day, c) in days.iter_mut().zip(mask.chars()) {
            *day = c != '.';
        }

        Ok(Self(days))
    }
}

impl Serialize for DayMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mask = String::deserialize(deserializer)?;
        mask.parse().map_err(D::Error::custom)
    }
}

#[cfg(feature = "docs")]
impl utoipa::PartialSchema for DayMask {
    fn schema() -> utoipa::openapi::RefOr<utoipa::openapi::schema::Schema> {
        utoipa::openapi::ObjectBuilder::new()
            .schema_type(utoipa::openapi::schema::Type::String)
            .description(Some("7-character weekday mask, Monday first"))
            .into()
    }
}

#[cfg(feature = "docs")]
impl utoipa::ToSchema for DayMask {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_round_trip_all_selections() {
        // Every 7-bit selection survives encode/decode unchanged
        for bits in 0u8..128 {
            let mut days = [false; 7];
            for (day, slot) in days.iter_mut().enumerate() {
                *slot = bits & (1 << day) != 0;
            }

            let mask = DayMask::new(days);
            let decoded: DayMask = mask.to_string().parse().unwrap();
            assert_eq!(decoded.days(), days);
        }
    }

    #[test]
    fn test_string_round_trip() {
        for mask in ["MTWTFSS", ".......", "MTWTF..", ".....SS", "M...F.S"] {
            let decoded: DayMask = mask.parse().unwrap();
            assert_eq!(decoded.to_string(), mask);
        }
    }

    #[test]
    fn test_encoded_length_is_always_seven() {
        assert_eq!(DayMask::new([true; 7]).to_string().len(), 7);
        assert_eq!(DayMask::new([false; 7]).to_string().len(), 7);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert_eq!("MTWTFS".parse::<DayMask>(), Err(DayMaskError::InvalidFormat));
        assert_eq!(
            "MTWTFSSM".parse::<DayMask>(),
            Err(DayMaskError::InvalidFormat)
        );
        assert_eq!("".parse::<DayMask>(), Err(DayMaskError::InvalidFormat));
    }

    #[test]
    fn test_any_non_dot_selects_the_day() {
        // The decoder only distinguishes `.` from everything else
        let mask: DayMask = "x.x.x.x".parse().unwrap();
        assert_eq!(
            mask.days(),
            [true, false, true, false, true, false, true]
        );
    }

    #[test]
    fn test_serde_uses_string_form() {
        let mask: DayMask = "MTWTF..".parse().unwrap();
        assert_eq!(serde_json::to_string(&mask).unwrap(), "\"MTWTF..\"");

        let parsed: DayMask = serde_json::from_str("\"..W....\"").unwrap();
        assert!(parsed.is_set(2));
        assert!(!parsed.is_set(0));

        assert!(serde_json::from_str::<DayMask>("\"MTW\"").is_err());
    }
}
