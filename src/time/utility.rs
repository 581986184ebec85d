use chrono::{
    Datelike,
    NaiveDate,
    TimeDelta,
    Weekday
};

use crate::time::calendarerror::CalendarError;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

/// Number of days in `month` (1-based) of `year`.
pub const fn days_of_month (year: i32, month: u32) -> Result<u32, CalendarError> {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if month < 1 || month > 12 {
        return Err(CalendarError::InvalidMonth(month));
    }

    if is_leap(year) {
        Ok(LEAP_EOM[month as usize])
    } else {
        Ok(NO_LEAP_EOM[month as usize])
    }
}

pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Weekday index with Sunday = 0 ... Saturday = 6.
#[inline]
pub fn weekday_index(d: NaiveDate) -> u32 {
    d.weekday().num_days_from_sunday()
}

pub fn weekday_of(year: i32, month: u32, day: u32) -> Result<Weekday, CalendarError> {
    ymd(year, month, day).map(|d| d.weekday())
}

pub fn add_days(d: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    TimeDelta::try_days(days)
        .and_then(|delta| d.checked_add_signed(delta))
        .ok_or(CalendarError::DateOutOfRange { date: d, days })
}
