use chrono::NaiveDate;
use serde::{
    Serialize,
    Deserialize
};

use crate::time::calendarerror::CalendarError;
use crate::time::utility::{add_days, weekday_index};

/// How a holiday anchor is moved onto the day it is observed.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum MondayShift {
    /// Observed on the anchor date itself.
    #[default]
    Unadjusted,
    /// Kept when it falls on a Monday, otherwise moved `(8 - w) mod 7` days
    /// forward, with `w` the weekday index (Sunday = 0).
    NextMonday,
    /// Emiliani law: moved to the Monday on or after the anchor using the
    /// per-weekday table in [`EMILIANI_SHIFT`].
    Emiliani
}

/// Days added by the Emiliani law, indexed by weekday (Sunday = 0).
pub const EMILIANI_SHIFT: [i64; 7] = [
    1, // Sunday
    0, // Monday
    6, // Tuesday
    5, // Wednesday
    4, // Thursday
    3, // Friday
    2  // Saturday
];

const MONDAY: u32 = 1;

impl MondayShift {
    /// Number of days `d` moves forward under this rule.
    pub fn shift_days(&self, d: NaiveDate) -> i64 {
        let weekday = weekday_index(d);
        match self {
            MondayShift::Unadjusted => 0,
            MondayShift::NextMonday if weekday == MONDAY => 0,
            MondayShift::NextMonday => ((8 - weekday) % 7) as i64,
            MondayShift::Emiliani => EMILIANI_SHIFT[weekday as usize]
        }
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> Result<NaiveDate, CalendarError> {
        match self.shift_days(d) {
            0 => Ok(d),
            n => add_days(d, n)
        }
    }
}
