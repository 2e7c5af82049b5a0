use crate::db::log::{LogEntry, load_log_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const MAX_OP_WIDTH: usize = 60;

/// Colour of an operation name in the log listing.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "import" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)` cut to `max` visible columns.
fn op_target_label(entry: &LogEntry, max: usize) -> (String, usize) {
    let color = color_for_operation(&entry.operation);

    let rest = if entry.target.is_empty() {
        String::new()
    } else {
        format!(" ({})", entry.target)
    };

    let op_w = entry.operation.width();
    let mut visible_rest = rest.clone();
    if op_w + visible_rest.width() > max {
        let keep = max.saturating_sub(op_w + 3);
        visible_rest = rest.chars().take(keep).collect::<String>() + "...";
    }

    let width = op_w + visible_rest.width();
    (
        format!("{}{}", color.paint(entry.operation.as_str()), visible_rest),
        width,
    )
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log_entries(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let labels: Vec<(String, usize)> = entries
            .iter()
            .map(|e| op_target_label(e, MAX_OP_WIDTH))
            .collect();

        let op_w = labels.iter().map(|(_, w)| *w).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, (label, width)) in entries.iter().zip(labels) {
            let padding = " ".repeat(op_w.saturating_sub(width));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                label,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
