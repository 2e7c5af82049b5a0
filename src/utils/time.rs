//! Time utilities: parsing HH:MM, duration computations, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use crate::models::clock::ClockTime;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<h>\d{1,2}):(?P<m>\d{2})$").expect("static clock pattern is valid")
});

/// Parse `H:MM` / `HH:MM` into a [`ClockTime`].
///
/// `24:00` is accepted as end of day; every other value must be a valid
/// time of day.
pub fn parse_clock(t: &str) -> AppResult<ClockTime> {
    let trimmed = t.trim();
    let invalid = || AppError::InvalidTime(t.to_string());

    let caps = CLOCK_RE.captures(trimmed).ok_or_else(invalid)?;
    let hour: u32 = caps["h"].parse().map_err(|_| invalid())?;
    let minute: u32 = caps["m"].parse().map_err(|_| invalid())?;

    if hour == 24 && minute == 0 {
        return Ok(ClockTime::END_OF_DAY);
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(ClockTime::from)
        .ok_or_else(invalid)
}

pub fn parse_optional_clock(input: Option<&String>) -> AppResult<Option<ClockTime>> {
    input.map(|s| parse_clock(s)).transpose()
}

pub fn minutes_between(start: ClockTime, end: ClockTime) -> i64 {
    end.minutes_since(start)
}

