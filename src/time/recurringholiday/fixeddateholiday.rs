use chrono::{Datelike, NaiveDate};

use crate::time::calendarerror::CalendarError;
use crate::time::recurringholiday::mondayshift::MondayShift;
use crate::time::recurringholiday::recurringholiday::{
    HolidayAnchor,
    RecurringHoliday
};
use crate::time::utility::days_of_month;

/// A holiday tied to a calendar date, optionally moved to a Monday.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FixedDateHoliday {
    month: u32,
    day: u32,
    shift: MondayShift
}

impl FixedDateHoliday {
    /// `month` is 1-based. Feb 29 is accepted and only occurs in leap years.
    pub fn new(month: u32, day: u32, shift: MondayShift) -> Result<FixedDateHoliday, CalendarError> {
        // 2000 is a leap year, so this admits every day that exists in some year
        let last_day = days_of_month(2000, month)?;
        if day == 0 || day > last_day {
            return Err(CalendarError::InvalidDate { year: 2000, month, day });
        }
        Ok(FixedDateHoliday { month, day, shift })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn anchor(&self) -> HolidayAnchor {
        HolidayAnchor::FixedDate { month: self.month, day: self.day }
    }

    fn shift(&self) -> MondayShift {
        self.shift
    }

    fn get_holiday(&self, year: i32, _easter: NaiveDate) -> Result<Option<NaiveDate>, CalendarError> {
        let Some(d) = NaiveDate::from_ymd_opt(year, self.month, self.day) else {
            return Ok(None);
        };
        let observed = self.shift.adjust(d)?;
        Ok((observed.year() == year).then_some(observed))
    }
}
