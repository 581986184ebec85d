//! Business-day arithmetic, including walks that cross into a new year.

use chrono::{NaiveDate, Weekday};

use colombiacalendar::time::calendar::businessdaycalculator::{
    count_business_days,
    next_business_day,
    BusinessDayCalculator
};
use colombiacalendar::time::calendar::holidaycalendar::HolidayCalendar;
use colombiacalendar::time::weekendmask::WeekendMask;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn calendar(year: i32) -> HolidayCalendar {
    HolidayCalendar::new(year).unwrap()
}

#[test]
fn test_next_business_day_after_new_year() {
    for year in [2024, 2025, 2026] {
        let d = next_business_day(&calendar(year), date(year, 1, 1), 1).unwrap();
        assert_eq!(d, date(year, 1, 2), "year {year}");
    }
}

#[test]
fn test_next_business_day_skips_weekend_and_emiliani_monday() {
    // 2024-01-05 is a Friday, Monday 2024-01-08 is a holiday
    assert_eq!(next_business_day(&calendar(2024), date(2024, 1, 5), 1), Ok(date(2024, 1, 9)));
    assert_eq!(next_business_day(&calendar(2024), date(2024, 1, 1), 10), Ok(date(2024, 1, 16)));
}

#[test]
fn test_count_business_days_first_ten_days() {
    // Jan 2..5 and Jan 9, 10; Jan 8 is the moved Epiphany
    assert_eq!(count_business_days(&calendar(2024), date(2024, 1, 1), date(2024, 1, 10)), Ok(6));
}

#[test]
fn test_count_business_days_start_exclusive_end_inclusive() {
    // Sunday 2024-03-24 to Monday 2024-04-01: Mon 25 is a holiday, Thu 28 and Fri 29 too
    assert_eq!(count_business_days(&calendar(2024), date(2024, 3, 24), date(2024, 4, 1)), Ok(3));
    // single day ranges
    assert_eq!(count_business_days(&calendar(2024), date(2024, 4, 1), date(2024, 4, 2)), Ok(1));
    assert_eq!(count_business_days(&calendar(2024), date(2024, 4, 2), date(2024, 4, 2)), Ok(0));
}

#[test]
fn test_whole_year_2024() {
    // 261 weekdays in (Jan 1, Dec 31] minus the 15 holidays among them
    assert_eq!(count_business_days(&calendar(2024), date(2024, 1, 1), date(2024, 12, 31)), Ok(246));
}

// ─── year boundary ───────────────────────────────────────────────────────────

#[test]
fn test_next_business_day_rolls_into_new_year() {
    // Dec 30, Dec 31, (Jan 1 holiday), Jan 2
    assert_eq!(next_business_day(&calendar(2024), date(2024, 12, 27), 3), Ok(date(2025, 1, 2)));
    assert_eq!(next_business_day(&calendar(2024), date(2024, 12, 31), 1), Ok(date(2025, 1, 2)));
}

#[test]
fn test_new_year_holidays_apply_after_rollover() {
    // 2026-01-06 is a Tuesday and a workday: Epiphany 2026 is observed on Jan 12.
    // A 2025 calendar would wrongly mark Jan 6 if it were reused.
    assert_eq!(next_business_day(&calendar(2025), date(2025, 12, 30), 5), Ok(date(2026, 1, 7)));
    // 2025-01-06 is a Monday holiday
    assert_eq!(count_business_days(&calendar(2024), date(2024, 12, 27), date(2025, 1, 10)), Ok(8));
}

#[test]
fn test_calendar_of_another_year_is_rederived() {
    // the walk starts in 2025 although the caller passes a 2020 calendar
    let d = next_business_day(&calendar(2020), date(2025, 1, 3), 1).unwrap();
    assert_eq!(d, date(2025, 1, 7));
}

#[test]
fn test_calculator_with_friday_saturday_weekend() {
    let calculator = BusinessDayCalculator::new(WeekendMask::new(&[Weekday::Fri, Weekday::Sat]));
    // Sunday 2024-01-07 counts, Monday Jan 8 is a holiday
    assert_eq!(
        calculator.count_business_days(&calendar(2024), date(2024, 1, 4), date(2024, 1, 10)),
        Ok(3)
    );
}
