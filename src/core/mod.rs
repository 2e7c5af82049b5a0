pub mod class;
pub mod config;
pub mod import;
pub mod layout;
pub mod log;
pub mod logic;
pub mod session;
