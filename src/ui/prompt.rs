//! Interactive yes/no prompts.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin. Anything but `y`/`yes` means no,
/// including end of input.
pub fn confirm(prompt: &str) -> AppResult<bool> {
    let stdin = io::stdin();
    confirm_with(prompt, &mut stdin.lock())
}

pub fn confirm_with<R: BufRead>(prompt: &str, input: &mut R) -> AppResult<bool> {
    warning(prompt);
    print!("Confirm [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
