use super::packer::{ColumnPacker, PlacedSession, RowLayout, SESSION_WIDTH};
use super::slots::derive_time_slots;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::day::Day;
use crate::models::gym_class::{ClassDirectory, GymClass};
use crate::models::session::Session;
use crate::models::snapshot::{ScheduleSnapshot, group_by_day};
use crate::models::time_slot::TimeSlot;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    pub session_width: u32,
    /// Column count above which a warning is logged. Never a hard limit.
    pub column_warning_threshold: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            session_width: SESSION_WIDTH,
            column_warning_threshold: 6,
        }
    }
}

impl From<&Config> for LayoutOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            session_width: cfg.session_width,
            column_warning_threshold: cfg.column_warning_threshold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLayout {
    pub day: Day,
    pub column_count: usize,
    pub rows: Vec<RowLayout>,
}

impl DayLayout {
    pub fn placed(&self) -> impl Iterator<Item = &PlacedSession> {
        self.rows.iter().flat_map(|r| r.blocks.iter())
    }

    pub fn session_count(&self) -> usize {
        self.placed().count()
    }

    pub fn is_empty(&self) -> bool {
        self.session_count() == 0
    }
}

/// Layout of the whole week: the shared hour rows and one packed column
/// layout per day, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekLayout {
    pub slots: Vec<TimeSlot>,
    pub days: Vec<DayLayout>,
}

impl WeekLayout {
    /// Validate the snapshot and compute its layout from scratch.
    pub fn build(snapshot: &ScheduleSnapshot, opts: &LayoutOptions) -> AppResult<Self> {
        let sessions = snapshot.validated_sessions()?;
        Self::from_sessions(sessions, &snapshot.classes, opts)
    }

    pub fn from_sessions(
        sessions: Vec<Session>,
        classes: &[GymClass],
        opts: &LayoutOptions,
    ) -> AppResult<Self> {
        let directory = ClassDirectory::new(classes);
        let total = sessions.len();

        let mut by_day = group_by_day(sessions);
        let slots = derive_time_slots(&by_day);

        tracing::debug!(
            sessions = total,
            classes = directory.len(),
            rows = slots.len(),
            "computing weekly layout"
        );

        let packer = ColumnPacker::new(opts.session_width);
        let mut days = Vec::with_capacity(by_day.len());

        for (day, day_sessions) in by_day.iter_mut() {
            day_sessions.sort_by_key(|s| s.start_time);

            let packing = packer.pack(day_sessions, &slots, &directory)?;

            if packing.column_count > opts.column_warning_threshold {
                tracing::warn!(
                    day = %day,
                    columns = packing.column_count,
                    threshold = opts.column_warning_threshold,
                    "many overlapping sessions on one day"
                );
            }

            days.push(DayLayout {
                day: *day,
                column_count: packing.column_count,
                rows: packing.rows,
            });
        }

        Ok(Self { slots, days })
    }

    pub fn day(&self, day: Day) -> Option<&DayLayout> {
        self.days.iter().find(|d| d.day == day)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn session_count(&self) -> usize {
        self.days.iter().map(DayLayout::session_count).sum()
    }
}
