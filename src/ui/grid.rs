//! Terminal rendering of the weekly layout.

use crate::core::layout::{DayLayout, PlacedSession, WeekLayout};
use crate::models::day::Day;
use crate::utils::colors::{CYAN, GREY, RESET, color_for_column};
use crate::utils::formatting::{bold, pad_right};

pub const NO_SESSIONS: &str = "No sessions found";

fn block_label(p: &PlacedSession, color: bool) -> String {
    let text = format!(
        "[{}] {}-{} {} (#{}, top={} h={} left={})",
        p.col_index,
        p.session.start_time,
        p.session.end_time.end_label(),
        p.class_name,
        p.session.id,
        p.top,
        p.height,
        p.left
    );

    if color {
        format!("{}{}{}", color_for_column(p.col_index), text, RESET)
    } else {
        text
    }
}

/// One day: a header, then every shared hour row with the sessions emitted
/// in it. A day without sessions prints a single notice instead.
pub fn render_day(day: &DayLayout, color: bool) -> String {
    let mut out = String::new();

    let header = format!(
        "=== {} ({} column{}) ===",
        day.day,
        day.column_count,
        if day.column_count == 1 { "" } else { "s" }
    );
    if color {
        out.push_str(&bold(&header));
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    if day.is_empty() {
        out.push_str(&format!("  {} for {}.\n", NO_SESSIONS, day.day));
        return out;
    }

    for row in &day.rows {
        let label = pad_right(&row.slot.label(), 13);
        let label = if color {
            format!("{CYAN}{label}{RESET}")
        } else {
            label
        };

        if row.blocks.is_empty() {
            let dot = if color {
                format!("{GREY}·{RESET}")
            } else {
                "·".to_string()
            };
            out.push_str(&format!("  {} | {}\n", label, dot));
            continue;
        }

        for (i, p) in row.blocks.iter().enumerate() {
            let lead = if i == 0 {
                label.clone()
            } else {
                " ".repeat(13)
            };
            out.push_str(&format!("  {} | {}\n", lead, block_label(p, color)));
        }
    }

    out
}

/// Whole week, or one day when `only` is set.
pub fn render_week(layout: &WeekLayout, only: Option<Day>, color: bool) -> String {
    let mut out = String::new();

    if layout.is_empty() {
        out.push_str(&format!("{}.\n", NO_SESSIONS));
    }

    for day in &layout.days {
        if only.is_some_and(|d| d != day.day) {
            continue;
        }
        out.push_str(&render_day(day, color));
        out.push('\n');
    }

    out
}
