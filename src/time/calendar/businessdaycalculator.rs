use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendarerror::CalendarError;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::weekendmask::WeekendMask;

/// Holds the calendar for the year currently being walked, starting from the
/// caller's calendar and switching to a freshly built one whenever a date
/// falls in another year. The caller's calendar is never modified.
struct YearCursor<'a> {
    calendar: Cow<'a, HolidayCalendar>
}

impl<'a> YearCursor<'a> {
    fn new(calendar: &'a HolidayCalendar) -> YearCursor<'a> {
        YearCursor { calendar: Cow::Borrowed(calendar) }
    }

    fn calendar_for(&mut self, year: i32) -> Result<&HolidayCalendar, CalendarError> {
        if self.calendar.year() != year {
            tracing::debug!(from = self.calendar.year(), to = year, "switching holiday calendar year");
            self.calendar = Cow::Owned(self.calendar.for_year(year)?);
        }
        Ok(&*self.calendar)
    }
}

/// Business-day arithmetic on top of [`HolidayCalendar`]. A business day is a
/// day outside the weekend that is not a holiday.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct BusinessDayCalculator {
    weekends: WeekendMask
}

impl BusinessDayCalculator {
    pub fn new(weekends: WeekendMask) -> BusinessDayCalculator {
        BusinessDayCalculator { weekends }
    }

    pub fn weekends(&self) -> WeekendMask {
        self.weekends
    }

    /// Whether `d` is a business day. A `calendar` of another year is
    /// re-derived for `d`'s year.
    pub fn is_business_day(&self, calendar: &HolidayCalendar, d: NaiveDate) -> Result<bool, CalendarError> {
        if self.weekends.is_weekend(d) {
            return Ok(false);
        }
        let mut cursor = YearCursor::new(calendar);
        Ok(!cursor.calendar_for(d.year())?.is_holiday_date(d))
    }

    /// The date reached after `count` business days following `start`.
    /// `count <= 0` returns `start`.
    #[tracing::instrument(level = "debug", skip(self, calendar), fields(calendar_year = calendar.year()))]
    pub fn next_business_day(&self,
                             calendar: &HolidayCalendar,
                             start: NaiveDate,
                             count: i64) -> Result<NaiveDate, CalendarError> {
        let mut cursor = YearCursor::new(calendar);
        let mut remaining = count;
        let mut d = start;
        while remaining > 0 {
            d = d.succ_opt().ok_or(CalendarError::DateOutOfRange { date: d, days: 1 })?;
            if self.weekends.is_weekend(d) {
                continue;
            }
            if !cursor.calendar_for(d.year())?.is_holiday_date(d) {
                remaining -= 1;
            }
        }
        Ok(d)
    }

    /// Business days after `start` up to and including `end`; zero when `end`
    /// is not after `start`.
    #[tracing::instrument(level = "debug", skip(self, calendar), fields(calendar_year = calendar.year()))]
    pub fn count_business_days(&self,
                               calendar: &HolidayCalendar,
                               start: NaiveDate,
                               end: NaiveDate) -> Result<usize, CalendarError> {
        let mut cursor = YearCursor::new(calendar);
        let mut days = 0;
        for d in RangeOfDates::after(start, end) {
            if self.weekends.is_weekend(d) {
                continue;
            }
            days += !cursor.calendar_for(d.year())?.is_holiday_date(d) as usize;
        }
        Ok(days)
    }
}

/// [`BusinessDayCalculator::next_business_day`] with a Saturday and Sunday
/// weekend.
pub fn next_business_day(calendar: &HolidayCalendar, start: NaiveDate, count: i64) -> Result<NaiveDate, CalendarError> {
    BusinessDayCalculator::default().next_business_day(calendar, start, count)
}

/// [`BusinessDayCalculator::count_business_days`] with a Saturday and Sunday
/// weekend.
pub fn count_business_days(calendar: &HolidayCalendar, start: NaiveDate, end: NaiveDate) -> Result<usize, CalendarError> {
    BusinessDayCalculator::default().count_business_days(calendar, start, end)
}
