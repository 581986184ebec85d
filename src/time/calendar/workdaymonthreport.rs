use chrono::NaiveDate;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendarerror::CalendarError;
use crate::time::rangeofdates::{RangeOfDates, RangeOfDatesIterator};
use crate::time::weekendmask::WeekendMask;

/// Working days of one month: days whose weekday is not in the weekend set
/// and which are not holidays.
#[derive(Clone, Debug)]
pub struct WorkdayMonthReport {
    calendar: HolidayCalendar,
    weekends: WeekendMask,
    days: RangeOfDates
}

impl WorkdayMonthReport {
    /// Report on `month` (1-based) of `year` with Colombian holidays.
    pub fn new(year: i32, month: u32, weekends: WeekendMask) -> Result<WorkdayMonthReport, CalendarError> {
        WorkdayMonthReport::with_calendar(HolidayCalendar::new(year)?, month, weekends)
    }

    /// Report on `month` of the calendar's year.
    pub fn with_calendar(calendar: HolidayCalendar,
                         month: u32,
                         weekends: WeekendMask) -> Result<WorkdayMonthReport, CalendarError> {
        let days = RangeOfDates::month(calendar.year(), month)?;
        Ok(WorkdayMonthReport { calendar, weekends, days })
    }

    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    pub fn weekends(&self) -> WeekendMask {
        self.weekends
    }

    pub fn days(&self) -> RangeOfDates {
        self.days
    }

    #[inline]
    pub fn is_workday(&self, d: NaiveDate) -> bool {
        self.days.contain(d) && !self.weekends.is_weekend(d) && !self.calendar.is_holiday_date(d)
    }

    /// Workdays in ascending order. Each call starts again from the first day
    /// of the month.
    pub fn iter(&self) -> Workdays<'_> {
        Workdays { report: self, days: self.days.iter() }
    }

    pub fn count(&self) -> usize {
        self.iter().count()
    }

    pub fn list(&self) -> Vec<NaiveDate> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a WorkdayMonthReport {
    type Item = NaiveDate;
    type IntoIter = Workdays<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct Workdays<'a> {
    report: &'a WorkdayMonthReport,
    days: RangeOfDatesIterator
}

impl<'a> Iterator for Workdays<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let report = self.report;
        self.days.find(|&d| report.is_workday(d))
    }
}

#[tracing::instrument(level = "debug", skip(weekends), fields(weekends = ?weekends.weekend_list()))]
pub fn count_workdays(year: i32, month: u32, weekends: WeekendMask) -> Result<usize, CalendarError> {
    Ok(WorkdayMonthReport::new(year, month, weekends)?.count())
}

#[tracing::instrument(level = "debug", skip(weekends), fields(weekends = ?weekends.weekend_list()))]
pub fn list_workdays(year: i32, month: u32, weekends: WeekendMask) -> Result<Vec<NaiveDate>, CalendarError> {
    Ok(WorkdayMonthReport::new(year, month, weekends)?.list())
}
