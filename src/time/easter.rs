use chrono::NaiveDate;

use crate::time::calendarerror::CalendarError;
use crate::time::utility::ymd;

/// Easter Sunday of `year` in the Gregorian calendar (anonymous Gregorian
/// algorithm, Meeus/Jones/Butcher form).
///
/// Every intermediate value is non-negative for `year >= 0`, so truncating
/// integer division matches the published algorithm there. Negative years are
/// rejected.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, CalendarError> {
    if year < 0 {
        return Err(CalendarError::UnsupportedYear(year));
    }

    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let g = (8 * b + 13) / 25;
    let h = (19 * a + b - d - g + 15) % 30;
    let j = c / 4;
    let k = c % 4;
    let m = (a + 11 * h) / 319;
    let r = (2 * e + 2 * j - k - h + m + 32) % 7;
    let month = (h - m + r + 90) / 25;
    let day = (h - m + r + month + 19) % 32;

    ymd(year, month as u32, day as u32)
}
