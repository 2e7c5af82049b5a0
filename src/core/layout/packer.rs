//! Greedy column packing of one day's sessions.
//!
//! Sessions are swept in start-time order across the hour rows. Each one
//! lands in the lowest-indexed column whose open sessions it does not
//! overlap; a new column is opened only when every existing one is busy at
//! that instant, which keeps the column count equal to the maximum number of
//! sessions running at the same time.

use crate::errors::{AppError, AppResult};
use crate::models::gym_class::ClassDirectory;
use crate::models::session::Session;
use crate::models::time_slot::TimeSlot;
use serde::Serialize;

/// Default horizontal size of one column, in pixels.
pub const SESSION_WIDTH: u32 = 120;

/// A session with its position on the grid.
///
/// `top` and `height` are minutes, usable as pixels at 1 px per minute;
/// `top` is measured from the start of the row the session was emitted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedSession {
    #[serde(flatten)]
    pub session: Session,
    pub class_name: String,
    pub col_index: usize,
    pub top: i64,
    pub height: i64,
    pub left: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowLayout {
    pub slot: TimeSlot,
    pub blocks: Vec<PlacedSession>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayPacking {
    pub rows: Vec<RowLayout>,
    pub column_count: usize,
}

impl DayPacking {
    pub fn placed(&self) -> impl Iterator<Item = &PlacedSession> {
        self.rows.iter().flat_map(|r| r.blocks.iter())
    }
}

pub struct ColumnPacker {
    pub session_width: u32,
}

impl Default for ColumnPacker {
    fn default() -> Self {
        Self {
            session_width: SESSION_WIDTH,
        }
    }
}

impl ColumnPacker {
    pub fn new(session_width: u32) -> Self {
        Self { session_width }
    }

    /// Pack one day's sessions over `slots`.
    ///
    /// `sessions` may come in any order: they are stable-sorted by start time
    /// first, so equal start times keep the caller's order. Every session is
    /// emitted exactly once, in the row active when the sweep reaches its
    /// start. A session that no row can reach is a layout error.
    pub fn pack(
        &self,
        sessions: &[Session],
        slots: &[TimeSlot],
        classes: &ClassDirectory,
    ) -> AppResult<DayPacking> {
        let mut order: Vec<&Session> = sessions.iter().collect();
        order.sort_by_key(|s| s.start_time);

        // column index → sessions still open in that column
        let mut block: Vec<Vec<&Session>> = Vec::new();
        let mut pointer = 0;
        let mut rows = Vec::with_capacity(slots.len());

        for slot in slots {
            evict_ended(&mut block, slot);

            let mut placed = Vec::new();

            while let Some(session) = order
                .get(pointer)
                .copied()
                .filter(|s| s.start_time < slot.hour_end)
            {
                let col_index = lowest_free_column(&block, session);
                if col_index == block.len() {
                    block.push(Vec::new());
                }
                block[col_index].push(session);

                tracing::trace!(
                    session = session.id,
                    col = col_index,
                    row = %slot.hour_start,
                    "placed session"
                );

                placed.push(self.place(session, slot, col_index, classes)?);
                pointer += 1;
            }

            rows.push(RowLayout {
                slot: *slot,
                blocks: placed,
            });
        }

        if let Some(orphan) = order.get(pointer) {
            return Err(AppError::Layout(format!(
                "session {} ({} {}-{}) is not covered by any hour row",
                orphan.id,
                orphan.day_of_week,
                orphan.start_time,
                orphan.end_time.end_label()
            )));
        }

        Ok(DayPacking {
            rows,
            column_count: block.len(),
        })
    }

    fn place(
        &self,
        session: &Session,
        slot: &TimeSlot,
        col_index: usize,
        classes: &ClassDirectory,
    ) -> AppResult<PlacedSession> {
        let left = u32::try_from(col_index)
            .ok()
            .and_then(|c| c.checked_mul(self.session_width))
            .ok_or_else(|| {
                AppError::Layout(format!(
                    "column {} at width {} does not fit a pixel offset",
                    col_index, self.session_width
                ))
            })?;

        Ok(PlacedSession {
            session: session.clone(),
            class_name: classes.name_of(session.class_id),
            col_index,
            top: session.start_time.minutes_since(slot.hour_start),
            height: session.duration_minutes(),
            left,
        })
    }
}

/// Drop sessions that ended at or before the start of `slot`: they cannot
/// conflict with anything placed from this row on. Columns stay in place
/// (possibly empty) so indices remain stable.
fn evict_ended(block: &mut [Vec<&Session>], slot: &TimeSlot) {
    for column in block.iter_mut() {
        column.retain(|s| s.end_time > slot.hour_start);
    }
}

/// Lowest column with no open session overlapping `session`, or
/// `block.len()` when every column is busy.
fn lowest_free_column(block: &[Vec<&Session>], session: &Session) -> usize {
    block
        .iter()
        .position(|column| column.iter().all(|open| !open.overlaps(session)))
        .unwrap_or(block.len())
}
