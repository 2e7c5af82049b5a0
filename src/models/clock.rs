use crate::errors::AppError;
use crate::utils::time::parse_clock;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// Wall-clock time of day, stored as minutes since midnight.
///
/// Valid range is `0..=1440`; `1440` is `24:00`, midnight at the end of
/// the day, and only makes sense as an end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);
    pub const END_OF_DAY: ClockTime = ClockTime(MINUTES_PER_DAY);

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes <= MINUTES_PER_DAY).then_some(ClockTime(minutes))
    }

    pub fn from_hour(hour: u16) -> Option<Self> {
        Self::from_minutes(hour.checked_mul(MINUTES_PER_HOUR)?)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    /// `floor(minutes / 60)`
    pub fn floor_hour(&self) -> u16 {
        self.hour()
    }

    /// `ceil(minutes / 60)`
    pub fn ceil_hour(&self) -> u16 {
        self.0.div_ceil(MINUTES_PER_HOUR)
    }

    /// Signed distance in minutes from `earlier` to `self`.
    pub fn minutes_since(&self, earlier: ClockTime) -> i64 {
        self.0 as i64 - earlier.0 as i64
    }

    pub fn is_end_of_day(&self) -> bool {
        self.0 == MINUTES_PER_DAY
    }

    /// Label used when the value closes an interval: `24:00` shows as `00:00`.
    pub fn end_label(&self) -> String {
        if self.is_end_of_day() {
            ClockTime::MIDNIGHT.to_string()
        } else {
            self.to_string()
        }
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(t: NaiveTime) -> Self {
        ClockTime((t.hour() * 60 + t.minute()) as u16)
    }
}

impl FromStr for ClockTime {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_clock(s)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
