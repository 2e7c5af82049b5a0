/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Cycled per grid column so neighbouring tracks stay distinguishable.
const COLUMN_PALETTE: [&str; 5] = [GREEN, BLUE, YELLOW, MAGENTA, CYAN];

pub fn color_for_column(col_index: usize) -> &'static str {
    COLUMN_PALETTE[col_index % COLUMN_PALETTE.len()]
}

