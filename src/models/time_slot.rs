use super::clock::ClockTime;
use serde::{Serialize, Serializer};

/// One hour-long row of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeSlot {
    pub hour_start: ClockTime,
    pub hour_end: ClockTime,
}

impl TimeSlot {
    /// Row for `hour` (0..=23). Returns `None` past the end of the day.
    pub fn for_hour(hour: u16) -> Option<Self> {
        if hour >= 24 {
            return None;
        }
        Some(Self {
            hour_start: ClockTime::from_hour(hour)?,
            hour_end: ClockTime::from_hour(hour + 1)?,
        })
    }

    pub fn hour(&self) -> u16 {
        self.hour_start.hour()
    }

    /// `09:00 - 10:00`; the last row of the day ends at `00:00`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.hour_start, self.hour_end.end_label())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut st = serializer.serialize_struct("TimeSlot", 2)?;
        st.serialize_field("hour_start", &self.hour_start.to_string())?;
        st.serialize_field("hour_end", &self.hour_end.end_label())?;
        st.end()
    }
}
