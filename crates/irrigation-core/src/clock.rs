//! Wall-clock time of day.
//!
//! Schedules live inside a single day, so times carry no date. The
//! ordering of [`TimeOfDay`] is the same as comparing zero-padded
//! `HHMMSS` strings.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A time of day with whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from hour/minute/second. Returns `None` when out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Current local wall-clock time, truncated to the second.
    pub fn now_local() -> Self {
        Self::from_naive(Local::now().time())
    }

    /// Wrap a chrono time, dropping sub-second precision.
    pub fn from_naive(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Packed `HHMMSS` value, e.g. `63000` for 06:30:00.
    pub fn packed(&self) -> u32 {
        self.hour() * 10_000 + self.minute() * 100 + self.second()
    }

    /// Parse `HHMMSS`, `HH:MM:SS` or `HH:MM`.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim();
        if s.len() == 6 && s.bytes().all(|b| b.is_ascii_digit()) {
            let hour = s[0..2].parse().ok()?;
            let minute = s[2..4].parse().ok()?;
            let second = s[4..6].parse().ok()?;
            return Self::from_hms(hour, minute, second);
        }
        NaiveTime::parse_from_str(s, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
            .ok()
            .map(Self::from_naive)
    }

    /// Parse a named input field, reporting the field on failure.
    pub fn parse_field(field: &str, input: &str) -> Result<Self, ValidationError> {
        Self::parse(input).ok_or_else(|| ValidationError::InvalidTime {
            field: field.to_string(),
            value: input.to_string(),
        })
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H%M%S"))
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_field("time", s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
