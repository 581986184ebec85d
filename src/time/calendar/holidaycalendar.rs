use std::sync::{Arc, LazyLock};

use chrono::{Datelike, NaiveDate};

use crate::time::calendarerror::CalendarError;
use crate::time::easter::easter_sunday;
use crate::time::recurringholiday::holidayruleset::HolidayRuleSet;

static COLOMBIA: LazyLock<Arc<HolidayRuleSet>> = LazyLock::new(|| Arc::new(HolidayRuleSet::colombia()));

/// Holidays of one year stored as one `u32` per month, bit `d` set when day
/// `d` of that month is a holiday.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
struct HolidayGrid {
    months: [u32; 12]
}

impl HolidayGrid {
    #[inline]
    fn set(&mut self, month: u32, day: u32) {
        if (1..=12).contains(&month) && (1..=31).contains(&day) {
            self.months[(month - 1) as usize] |= 1u32 << day;
        }
    }

    #[inline]
    fn contains(&self, month: u32, day: u32) -> bool {
        (1..=12).contains(&month)
            && (1..=31).contains(&day)
            && (self.months[(month - 1) as usize] & (1u32 << day)) != 0
    }

    fn count(&self) -> usize {
        self.months.iter().map(|m| m.count_ones() as usize).sum()
    }
}

/// Observed public holidays of a single year.
///
/// Every holiday is computed when the calendar is built and the set is never
/// modified afterwards, so a calendar can be shared freely between threads.
/// Moving to another year means building another calendar with [`for_year`].
///
/// [`for_year`]: HolidayCalendar::for_year
#[derive(Clone, Debug)]
pub struct HolidayCalendar {
    year: i32,
    easter: NaiveDate,
    holidays: HolidayGrid,
    rule_set: Arc<HolidayRuleSet>
}

impl HolidayCalendar {
    /// Colombian holidays of `year`.
    pub fn new(year: i32) -> Result<HolidayCalendar, CalendarError> {
        HolidayCalendar::with_rules(year, Arc::clone(&*COLOMBIA))
    }

    pub fn with_rules(year: i32, rule_set: Arc<HolidayRuleSet>) -> Result<HolidayCalendar, CalendarError> {
        let easter = easter_sunday(year)?;
        let mut holidays = HolidayGrid::default();

        for rule in rule_set.rules() {
            if let Some(d) = rule.get_holiday(year, easter)? {
                tracing::trace!(anchor = ?rule.anchor(), shift = ?rule.shift(), observed = %d, "holiday rule applied");
                holidays.set(d.month(), d.day());
            }
        }

        tracing::debug!(year, %easter, holidays = holidays.count(), "holiday calendar built");
        Ok(HolidayCalendar { year, easter, holidays, rule_set })
    }

    /// Calendar of another year built from the same rules.
    pub fn for_year(&self, year: i32) -> Result<HolidayCalendar, CalendarError> {
        HolidayCalendar::with_rules(year, Arc::clone(&self.rule_set))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn easter_sunday(&self) -> NaiveDate {
        self.easter
    }

    /// Month of Easter Sunday, 1-based.
    pub fn easter_month(&self) -> u32 {
        self.easter.month()
    }

    pub fn easter_day(&self) -> u32 {
        self.easter.day()
    }

    pub fn rule_set(&self) -> &Arc<HolidayRuleSet> {
        &self.rule_set
    }

    /// Whether `day` of `month` (1-based) is a holiday in this calendar's
    /// year. Out-of-range input is never a holiday.
    #[inline]
    pub fn is_holiday(&self, month: u32, day: u32) -> bool {
        self.holidays.contains(month, day)
    }

    /// Like [`is_holiday`](HolidayCalendar::is_holiday), false for dates of
    /// any other year.
    #[inline]
    pub fn is_holiday_date(&self, d: NaiveDate) -> bool {
        d.year() == self.year && self.is_holiday(d.month(), d.day())
    }

    /// Holidays in ascending order.
    pub fn holidays(&self) -> Vec<NaiveDate> {
        (1..=12u32)
            .flat_map(|month| (1..=31u32).map(move |day| (month, day)))
            .filter(|&(month, day)| self.holidays.contains(month, day))
            .filter_map(|(month, day)| NaiveDate::from_ymd_opt(self.year, month, day))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.holidays.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PartialEq for HolidayCalendar {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year && self.easter == other.easter && self.holidays == other.holidays
    }
}

impl Eq for HolidayCalendar {}
