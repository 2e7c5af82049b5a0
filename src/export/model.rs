// src/export/model.rs

use crate::core::layout::WeekLayout;
use serde::Serialize;

/// Flat record of one placed session, for CSV.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PlacementExport {
    pub day: String,
    pub hour_start: String,
    pub session_id: i64,
    pub class_id: i64,
    pub class_name: String,
    pub start_time: String,
    pub end_time: String,
    pub col_index: usize,
    pub top: i64,
    pub height: i64,
    pub left: u32,
}

/// One record per placed session, in grid order (day, row, column).
pub fn layout_to_records(layout: &WeekLayout) -> Vec<PlacementExport> {
    let mut out = Vec::with_capacity(layout.session_count());

    for day in &layout.days {
        for row in &day.rows {
            for p in &row.blocks {
                out.push(PlacementExport {
                    day: day.day.name().to_string(),
                    hour_start: row.slot.hour_start.to_string(),
                    session_id: p.session.id,
                    class_id: p.session.class_id,
                    class_name: p.class_name.clone(),
                    start_time: p.session.start_time.to_string(),
                    end_time: p.session.end_time.to_string(),
                    col_index: p.col_index,
                    top: p.top,
                    height: p.height,
                    left: p.left,
                });
            }
        }
    }

    out
}
