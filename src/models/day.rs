use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Day of the week a session is scheduled on.
///
/// Ordering follows the grid: Monday first, Sunday last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    pub fn short(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.name()
    }

    /// Parse user input: full name or three-letter abbreviation, any case.
    pub fn parse(input: &str) -> AppResult<Self> {
        let needle = input.trim().to_lowercase();

        Day::ALL
            .into_iter()
            .find(|d| d.name().to_lowercase() == needle || d.short().to_lowercase() == needle)
            .ok_or_else(|| AppError::InvalidDay(input.to_string()))
    }

    pub fn today() -> Self {
        Day::from(chrono::Local::now().date_naive().weekday())
    }
}

impl From<Weekday> for Day {
    fn from(w: Weekday) -> Self {
        Day::ALL[w.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Day::parse(&raw).map_err(serde::de::Error::custom)
    }
}
