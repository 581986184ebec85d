use std::collections::HashSet;

use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};

/// Weekend definition stored as a bitmask.
/// Each bit represents a day: Mon(0), Tue(1), ..., Sun(6)
#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct WeekendMask(u8);

impl WeekendMask {
    pub fn new(weekends: &[Weekday]) -> WeekendMask {
        weekends.iter().copied().collect()
    }

    /// No weekend at all: only holidays are non-working days.
    pub const fn empty() -> WeekendMask {
        WeekendMask(0)
    }

    pub fn saturday_sunday() -> WeekendMask {
        WeekendMask::new(&[Weekday::Sat, Weekday::Sun])
    }

    #[inline]
    pub fn is_weekend_day(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.is_weekend_day(d.weekday())
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn weekend_list(&self) -> Vec<Weekday> {
        let mut weekdays = Vec::with_capacity(7);
        for day in 0..7u8 {
            if (self.0 & (1u8 << day)) != 0 {
                if let Ok(weekday) = Weekday::try_from(day) {
                    weekdays.push(weekday);
                }
            }
        }
        weekdays
    }

    pub fn to_hashset(&self) -> HashSet<Weekday> {
        self.weekend_list().into_iter().collect()
    }
}

impl Default for WeekendMask {
    fn default() -> Self {
        WeekendMask::saturday_sunday()
    }
}

impl FromIterator<Weekday> for WeekendMask {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut mask = 0u8;
        for weekday in iter {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }
}

impl From<Vec<Weekday>> for WeekendMask {
    fn from(weekdays: Vec<Weekday>) -> Self {
        weekdays.into_iter().collect()
    }
}

impl From<WeekendMask> for Vec<Weekday> {
    fn from(mask: WeekendMask) -> Self {
        mask.weekend_list()
    }
}
