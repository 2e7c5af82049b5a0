//! Weekly schedule layout engine: hour-row derivation and per-day column
//! packing. Pure computation over a fetched snapshot, no I/O.

pub mod packer;
pub mod slots;
pub mod week;

pub use packer::{ColumnPacker, DayPacking, PlacedSession, RowLayout, SESSION_WIDTH};
pub use slots::derive_time_slots;
pub use week::{DayLayout, LayoutOptions, WeekLayout};
