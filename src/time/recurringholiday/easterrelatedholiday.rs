use chrono::{Datelike, NaiveDate};

use crate::time::calendarerror::CalendarError;
use crate::time::recurringholiday::mondayshift::MondayShift;
use crate::time::recurringholiday::recurringholiday::{
    HolidayAnchor,
    RecurringHoliday
};
use crate::time::utility::add_days;

/// A holiday a fixed number of days away from Easter Sunday.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct EasterRelatedHoliday {
    offset_days: i64,
    shift: MondayShift
}

impl EasterRelatedHoliday {
    pub fn new(offset_days: i64, shift: MondayShift) -> EasterRelatedHoliday {
        EasterRelatedHoliday { offset_days, shift }
    }

    pub fn offset_days(&self) -> i64 {
        self.offset_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn anchor(&self) -> HolidayAnchor {
        HolidayAnchor::EasterRelated { offset_days: self.offset_days }
    }

    fn shift(&self) -> MondayShift {
        self.shift
    }

    fn get_holiday(&self, year: i32, easter: NaiveDate) -> Result<Option<NaiveDate>, CalendarError> {
        let d = add_days(easter, self.offset_days)?;
        let observed = self.shift.adjust(d)?;
        Ok((observed.year() == year).then_some(observed))
    }
}
