use super::{day::Day, gym_class::GymClass, session::RawSession, session::Session};
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classes and sessions fetched together; the input of one layout pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    #[serde(default)]
    pub classes: Vec<GymClass>,
    #[serde(default)]
    pub sessions: Vec<RawSession>,
}

impl ScheduleSnapshot {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &std::path::Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Validate every raw session (first failure wins).
    pub fn validated_sessions(&self) -> AppResult<Vec<Session>> {
        self.sessions.iter().map(RawSession::validate).collect()
    }
}

/// Sessions grouped per day. Every day is present, possibly empty, and
/// iteration runs Monday → Sunday.
pub type SessionsByDay = BTreeMap<Day, Vec<Session>>;

pub fn group_by_day(sessions: Vec<Session>) -> SessionsByDay {
    let mut by_day: SessionsByDay = Day::ALL.iter().map(|d| (*d, Vec::new())).collect();

    for s in sessions {
        by_day.entry(s.day_of_week).or_default().push(s);
    }

    by_day
}
