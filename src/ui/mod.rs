pub mod grid;
pub mod messages;
pub mod prompt;
