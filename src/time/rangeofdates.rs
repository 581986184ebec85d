use chrono::NaiveDate;

use crate::time::calendarerror::CalendarError;
use crate::time::utility::{days_of_month, ymd};

/// Inclusive range of calendar days. A range whose start is after its end is
/// empty.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> RangeOfDates {
        RangeOfDates { start_date, end_date }
    }

    /// Every day of `month` (1-based) in `year`.
    pub fn month(year: i32, month: u32) -> Result<RangeOfDates, CalendarError> {
        let last_day = days_of_month(year, month)?;
        Ok(RangeOfDates::new(ymd(year, month, 1)?, ymd(year, month, last_day)?))
    }

    /// Days in `(start, end]`; empty when `end <= start`.
    pub fn after(start: NaiveDate, end: NaiveDate) -> RangeOfDates {
        match start.succ_opt() {
            Some(first) => RangeOfDates::new(first, end),
            None => RangeOfDates::new(NaiveDate::MAX, NaiveDate::MIN)
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn is_empty(&self) -> bool {
        self.start_date > self.end_date
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            ((self.end_date - self.start_date).num_days() + 1) as usize
        }
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.start_date) && (d <= self.end_date)
    }

    pub fn iter(&self) -> RangeOfDatesIterator {
        RangeOfDatesIterator {
            next: (!self.is_empty()).then_some(self.start_date),
            end_date: self.end_date
        }
    }
}

impl IntoIterator for RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct RangeOfDatesIterator {
    next: Option<NaiveDate>,
    end_date: NaiveDate
}

impl Iterator for RangeOfDatesIterator {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|d| *d <= self.end_date);
        Some(current)
    }
}
