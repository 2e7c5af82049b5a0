use crate::config::Config;
use crate::core::layout::{LayoutOptions, WeekLayout};
use crate::db::pool::DbPool;
use crate::db::queries::load_snapshot;
use crate::errors::AppResult;
use crate::models::snapshot::ScheduleSnapshot;

pub struct Core;

impl Core {
    /// Layout of an already fetched snapshot.
    pub fn build_week_layout(snapshot: &ScheduleSnapshot, cfg: &Config) -> AppResult<WeekLayout> {
        WeekLayout::build(snapshot, &LayoutOptions::from(cfg))
    }

    /// Fetch classes and sessions from the store, then lay them out.
    /// Nothing is cached: every call recomputes from a fresh snapshot.
    pub fn load_week_layout(pool: &mut DbPool, cfg: &Config) -> AppResult<WeekLayout> {
        let snapshot = load_snapshot(pool)?;
        Self::build_week_layout(&snapshot, cfg)
    }
}
