use std::fmt::Debug;

use chrono::NaiveDate;

use crate::time::calendarerror::CalendarError;
use crate::time::recurringholiday::mondayshift::MondayShift;

/// What a holiday rule is computed from. Two rules with the same anchor
/// describe the same holiday; the later one wins when a rule set is built.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum HolidayAnchor {
    FixedDate { month: u32, day: u32 },
    EasterRelated { offset_days: i64 }
}

pub trait RecurringHoliday: Debug + Send + Sync {

    fn anchor(&self) -> HolidayAnchor;

    fn shift(&self) -> MondayShift;

    /// Observed date in `year`, given that year's Easter Sunday. `None` when
    /// the rule has no occurrence in `year` (a Feb 29 anchor in a common year,
    /// or a shift that leaves the year).
    fn get_holiday(&self, year: i32, easter: NaiveDate) -> Result<Option<NaiveDate>, CalendarError>;
}
