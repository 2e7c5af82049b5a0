//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align on terminal columns, so class names with wide or accented
/// characters still line up.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(pad))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(pad), s)
}

pub fn mins2readable(mins: i64, short: bool) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    if short {
        // es: 01:30
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // es: 01h 30m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
