//! Monthly workday counts and lists under different weekend definitions.

use chrono::{NaiveDate, Weekday};

use colombiacalendar::time::calendar::holidaycalendar::HolidayCalendar;
use colombiacalendar::time::calendar::workdaymonthreport::{
    count_workdays,
    list_workdays,
    WorkdayMonthReport
};
use colombiacalendar::time::weekendmask::WeekendMask;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_count_workdays_table() {
    let sat_sun = WeekendMask::new(&[Weekday::Sat, Weekday::Sun]);
    let fri_sat = WeekendMask::new(&[Weekday::Fri, Weekday::Sat]);
    let cases = [
        ("January 2024, Epiphany moved to Jan 8", 2024, 1, sat_sun, 21),
        ("February 2023, no holidays", 2023, 2, sat_sun, 20),
        ("June 2025, Friday/Saturday weekend", 2025, 6, fri_sat, 19),
        ("February 2024, Friday/Saturday weekend", 2024, 2, fri_sat, 21),
        ("March 2024, Friday/Saturday weekend", 2024, 3, fri_sat, 19),
        ("March 2024, Holy Week", 2024, 3, sat_sun, 18),
        ("April 2024, no holidays", 2024, 4, sat_sun, 22),
    ];
    for (name, year, month, weekends, expected) in cases {
        assert_eq!(count_workdays(year, month, weekends), Ok(expected), "{name}");
    }
}

#[test]
fn test_list_workdays_april_2024() {
    let expected: Vec<NaiveDate> = [
        1, 2, 3, 4, 5, 8, 9, 10, 11, 12, 15, 16, 17, 18, 19, 22, 23, 24, 25, 26, 29, 30,
    ]
    .iter()
    .map(|&d| date(2024, 4, d))
    .collect();
    let weekends = WeekendMask::new(&[Weekday::Sat, Weekday::Sun]);
    assert_eq!(list_workdays(2024, 4, weekends), Ok(expected));
}

#[test]
fn test_list_workdays_march_2024() {
    let weekends = WeekendMask::new(&[Weekday::Sat, Weekday::Sun]);
    let days = list_workdays(2024, 3, weekends).unwrap();
    assert!(!days.contains(&date(2024, 3, 25)));
    assert!(!days.contains(&date(2024, 3, 28)));
    assert!(!days.contains(&date(2024, 3, 29)));
    assert_eq!(days.first(), Some(&date(2024, 3, 1)));
    assert_eq!(days.last(), Some(&date(2024, 3, 27)));
}

#[test]
fn test_count_matches_list() {
    let weekends = WeekendMask::new(&[Weekday::Sun]);
    for month in 1..=12 {
        let report = WorkdayMonthReport::new(2025, month, weekends).unwrap();
        assert_eq!(report.count(), report.list().len(), "month {month}");
        assert_eq!(count_workdays(2025, month, weekends), Ok(report.count()));
    }
}

#[test]
fn test_every_day_is_a_weekend() {
    let all = WeekendMask::new(&[
        Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu,
        Weekday::Fri, Weekday::Sat, Weekday::Sun,
    ]);
    assert_eq!(count_workdays(2024, 5, all), Ok(0));
}

#[test]
fn test_report_with_custom_calendar_year() {
    // the calendar's year decides which month is reported
    let report = WorkdayMonthReport::with_calendar(
        HolidayCalendar::new(2026).unwrap(),
        1,
        WeekendMask::empty(),
    )
    .unwrap();
    // 31 days minus Jan 1 and Jan 12
    assert_eq!(report.count(), 29);
    assert!(report.iter().all(|d| d >= date(2026, 1, 1) && d <= date(2026, 1, 31)));
}
