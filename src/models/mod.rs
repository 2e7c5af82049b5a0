pub mod clock;
pub mod day;
pub mod gym_class;
pub mod session;
pub mod snapshot;
pub mod time_slot;
