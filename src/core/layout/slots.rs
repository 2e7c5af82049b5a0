//! Derivation of the hour rows shown on the weekly grid.

use crate::models::snapshot::SessionsByDay;
use crate::models::time_slot::TimeSlot;
use std::collections::BTreeSet;

/// Last hour that can open a row (`23:00 - 00:00`).
const LAST_HOUR: u16 = 23;

/// Compute the ordered hour rows covering every hour touched by a session
/// on any day.
///
/// The hour set is shared by the whole week: an hour used only on Friday
/// still produces a row on Monday. Hours nobody uses are left out.
pub fn derive_time_slots(sessions_by_day: &SessionsByDay) -> Vec<TimeSlot> {
    let mut active_hours: BTreeSet<u16> = BTreeSet::new();

    for session in sessions_by_day.values().flatten() {
        let start_hour = session.start_time.floor_hour();
        let end_hour = session.end_time.ceil_hour();

        // -----------------------------
        // [start_hour, end_hour), never past 23
        // -----------------------------
        for hour in start_hour..end_hour.min(LAST_HOUR + 1) {
            active_hours.insert(hour);
        }
    }

    active_hours
        .into_iter()
        .filter_map(TimeSlot::for_hour)
        .collect()
}
