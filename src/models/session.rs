use super::{clock::ClockTime, day::Day};
use crate::errors::{AppError, AppResult};
use crate::utils::time::{minutes_between, parse_clock};
use serde::{Deserialize, Serialize};

/// Session as served by the backend / stored on disk: every field is the
/// untyped wire value and has not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSession {
    pub id: i64,
    pub class_id: i64,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

impl RawSession {
    /// Parse and check the raw values.
    ///
    /// Fails on a malformed time, an unknown day name, or an interval whose
    /// end is not strictly after its start.
    pub fn validate(&self) -> AppResult<Session> {
        let day = Day::parse(&self.day_of_week)?;
        let start = parse_clock(&self.start_time)?;
        let end = parse_clock(&self.end_time)?;

        Session::new(self.id, self.class_id, day, start, end)
    }
}

/// A validated, scheduled class occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: i64,
    pub class_id: i64,
    pub day_of_week: Day,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl Session {
    pub fn new(
        id: i64,
        class_id: i64,
        day_of_week: Day,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> AppResult<Self> {
        if end_time <= start_time {
            return Err(AppError::InvertedInterval {
                id,
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }

        Ok(Self {
            id,
            class_id,
            day_of_week,
            start_time,
            end_time,
        })
    }

    pub fn duration_minutes(&self) -> i64 {
        minutes_between(self.start_time, self.end_time)
    }

    /// Half-open overlap test on `[start, end)`.
    pub fn overlaps(&self, other: &Session) -> bool {
        self.start_time < other.end_time && other.start_time < self.end_time
    }

    /// Input-side rule: a session must last at least `min` minutes.
    pub fn ensure_min_duration(&self, min: i64) -> AppResult<()> {
        let minutes = self.duration_minutes();
        if minutes < min {
            return Err(AppError::SessionTooShort {
                id: self.id,
                minutes,
                min,
            });
        }
        Ok(())
    }
}
