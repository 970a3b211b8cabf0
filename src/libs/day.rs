//! Calendar day keys and minute-precision start times.
//!
//! Every date-scoped collection is keyed by a [`DayKey`]. The key is built
//! from the local wall-clock date, so a day's data stays put no matter which
//! UTC offset the machine currently runs under.

use super::error::ValidationError;
use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical calendar day, rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// Today's key from the local clock.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn is_before(&self, other: DayKey) -> bool {
        self.0 < other.0
    }

    /// Days before today are archived and read-only.
    pub fn is_past(&self) -> bool {
        self.is_before(Self::today())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate(s.to_string()))
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Time of day a task starts, with minute precision.
///
/// Only `H:MM` / `HH:MM` strings with a valid hour and minute are accepted,
/// which keeps malformed times out of the timeline layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StartTime(NaiveTime);

impl StartTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Minutes since local midnight.
    pub fn minutes(&self) -> i64 {
        i64::from(self.0.hour() * 60 + self.0.minute())
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0.hour(), self.0.minute())
    }
}

impl FromStr for StartTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidStartTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;

        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        if !hour.chars().chain(minute.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for StartTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StartTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_round_trips_through_text() {
        let key: DayKey = "2025-03-07".parse().unwrap();
        assert_eq!(key.to_string(), "2025-03-07");
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
    }

    #[test]
    fn day_key_rejects_garbage() {
        assert!("2025-13-01".parse::<DayKey>().is_err());
        assert!("07/03/2025".parse::<DayKey>().is_err());
        assert!("".parse::<DayKey>().is_err());
    }

    #[test]
    fn today_uses_local_date() {
        assert_eq!(DayKey::today().date(), Local::now().date_naive());
    }

    #[test]
    fn only_earlier_days_are_past() {
        let today = DayKey::today();
        let yesterday = DayKey::from(today.date().pred_opt().unwrap());
        let tomorrow = DayKey::from(today.date().succ_opt().unwrap());

        assert!(yesterday.is_past());
        assert!(!today.is_past());
        assert!(!tomorrow.is_past());
        assert!(yesterday.is_before(today));
        assert!(!today.is_before(today));
    }

    #[test]
    fn start_time_parses_valid_values() {
        assert_eq!("09:30".parse::<StartTime>().unwrap().minutes(), 570);
        assert_eq!("9:05".parse::<StartTime>().unwrap().minutes(), 545);
        assert_eq!("00:00".parse::<StartTime>().unwrap().minutes(), 0);
        assert_eq!("23:59".parse::<StartTime>().unwrap().to_string(), "23:59");
        assert_eq!("7:00".parse::<StartTime>().unwrap().to_string(), "07:00");
    }

    #[test]
    fn start_time_rejects_malformed_values() {
        for bad in ["24:00", "12:60", "1230", "ab:cd", "12:5", "-1:30", "123:00", ":30", "12:"] {
            assert!(bad.parse::<StartTime>().is_err(), "{} should be rejected", bad);
        }
    }
}
