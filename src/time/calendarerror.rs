use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised by the civil calendar helpers and by holiday rule validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid month {0}, expected 1 to 12")]
    InvalidMonth(u32),

    #[error("year {0} is outside the supported Gregorian range")]
    UnsupportedYear(i32),

    #[error("shifting {date} by {days} days leaves the representable range")]
    DateOutOfRange { date: NaiveDate, days: i64 },
}
