use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::time::calendar::businessdaycalculator::BusinessDayCalculator;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendarerror::CalendarError;
use crate::time::recurringholiday::holidayruleset::HolidayRuleSet;
use crate::time::weekendmask::WeekendMask;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    weekends: Option<WeekendMask>,
    #[serde(default)]
    holiday_rules: Option<Vec<serde_json::Value>>
}

/// Weekend definition and holiday rules used to build calendars.
///
/// Loaded from JSON of the form
///
/// ```json
/// {
///     "weekends": ["Sat", "Sun"],
///     "holiday_rules": [
///         { "holiday_type": "FixedDate", "month": 1, "day": 1 },
///         { "holiday_type": "EasterRelated", "offset_days": 40, "shift": "Emiliani" }
///     ]
/// }
/// ```
///
/// A missing `weekends` means Saturday and Sunday, missing `holiday_rules`
/// means the Colombian holidays.
#[derive(Clone, Debug)]
pub struct Configuration {
    weekends: WeekendMask,
    rule_set: Arc<HolidayRuleSet>
}

impl Configuration {
    pub fn new(weekends: WeekendMask, rule_set: HolidayRuleSet) -> Configuration {
        Configuration { weekends, rule_set: Arc::new(rule_set) }
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        tracing::debug!(path = %file_path.as_ref().display(), "configuration file read");
        Configuration::from_json(json_value)
    }

    pub fn from_json_str(json_str: &str) -> Result<Configuration, ConfigurationError> {
        Configuration::from_json(serde_json::from_str(json_str)?)
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ConfigurationError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        let rule_set = match json_prop.holiday_rules {
            Some(json_vec) => HolidayRuleSet::from_json_vec(&json_vec)?,
            None => HolidayRuleSet::colombia()
        };
        Ok(Configuration::new(json_prop.weekends.unwrap_or_default(), rule_set))
    }

    pub fn weekends(&self) -> WeekendMask {
        self.weekends
    }

    pub fn rule_set(&self) -> &Arc<HolidayRuleSet> {
        &self.rule_set
    }

    pub fn calendar(&self, year: i32) -> Result<HolidayCalendar, CalendarError> {
        HolidayCalendar::with_rules(year, Arc::clone(&self.rule_set))
    }

    pub fn business_day_calculator(&self) -> BusinessDayCalculator {
        BusinessDayCalculator::new(self.weekends)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new(WeekendMask::default(), HolidayRuleSet::colombia())
    }
}
