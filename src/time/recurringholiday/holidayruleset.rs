use std::sync::Arc;

use serde::Deserialize;

use crate::configurationerror::ConfigurationError;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::mondayshift::MondayShift;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;

// (month, day) anchors, months 1-based
const UNADJUSTED_FIXED: [(u32, u32); 7] = [
    (1, 1),   // Año Nuevo
    (5, 1),   // Día del Trabajo
    (7, 20),  // Independencia
    (8, 7),   // Batalla de Boyacá
    (12, 8),  // Inmaculada Concepción
    (12, 25), // Navidad
    (11, 1)   // Todos los Santos, replaced by its Emiliani rule below
];

const NEXT_MONDAY_FIXED: [(u32, u32); 2] = [
    (11, 11), // Independencia de Cartagena
    (10, 12)  // Día de la Raza
];

const EMILIANI_FIXED: [(u32, u32); 7] = [
    (1, 6),   // Reyes Magos
    (3, 19),  // San José
    (6, 29),  // San Pedro y San Pablo
    (8, 15),  // Asunción
    (10, 12), // Día de la Raza
    (11, 1),  // Todos los Santos
    (11, 11)  // Independencia de Cartagena
];

// (offset from Easter Sunday, shift)
const EASTER_RELATED: [(i64, MondayShift); 5] = [
    (-3, MondayShift::Unadjusted), // Jueves Santo
    (-2, MondayShift::Unadjusted), // Viernes Santo
    (40, MondayShift::Emiliani),   // Ascensión
    (60, MondayShift::Emiliani),   // Corpus Christi
    (68, MondayShift::Emiliani)    // Sagrado Corazón
];

/// Ordered collection of holiday rules. Pushing a rule whose anchor is already
/// present replaces the earlier rule.
#[derive(Clone, Debug, Default)]
pub struct HolidayRuleSet {
    rules: Vec<Arc<dyn RecurringHoliday>>
}

impl HolidayRuleSet {
    pub fn new() -> HolidayRuleSet {
        HolidayRuleSet { rules: Vec::new() }
    }

    /// Colombian public holidays, fixed and Easter-relative, with the
    /// Emiliani law applied.
    pub fn colombia() -> HolidayRuleSet {
        let mut rule_set = HolidayRuleSet::new();
        let fixed = UNADJUSTED_FIXED.iter().map(|&(m, d)| (m, d, MondayShift::Unadjusted))
            .chain(NEXT_MONDAY_FIXED.iter().map(|&(m, d)| (m, d, MondayShift::NextMonday)))
            .chain(EMILIANI_FIXED.iter().map(|&(m, d)| (m, d, MondayShift::Emiliani)));
        for (month, day, shift) in fixed {
            if let Ok(holiday) = FixedDateHoliday::new(month, day, shift) {
                rule_set.push(Arc::new(holiday));
            }
        }
        for (offset_days, shift) in EASTER_RELATED {
            rule_set.push(Arc::new(EasterRelatedHoliday::new(offset_days, shift)));
        }
        rule_set
    }

    pub fn push(&mut self, rule: Arc<dyn RecurringHoliday>) {
        let anchor = rule.anchor();
        if let Some(index) = self.rules.iter().position(|r| r.anchor() == anchor) {
            tracing::trace!(?anchor, "replacing holiday rule");
            self.rules.remove(index);
        }
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn from_json_vec(json_vec: &[serde_json::Value]) -> Result<HolidayRuleSet, ConfigurationError> {
        let mut rule_set = HolidayRuleSet::new();
        for json_value in json_vec {
            rule_set.push(recurring_holiday_from_json(json_value.clone())?);
        }
        Ok(rule_set)
    }
}

#[derive(Deserialize)]
#[serde(tag = "holiday_type")]
enum HolidayRuleJsonProp {
    FixedDate {
        month: u32,
        day: u32,
        #[serde(default)]
        shift: MondayShift
    },
    EasterRelated {
        offset_days: i64,
        #[serde(default)]
        shift: MondayShift
    }
}

fn recurring_holiday_from_json(json_value: serde_json::Value) -> Result<Arc<dyn RecurringHoliday>, ConfigurationError> {
    let json_prop: HolidayRuleJsonProp = serde_json::from_value(json_value)?;
    let holiday: Arc<dyn RecurringHoliday> = match json_prop {
        HolidayRuleJsonProp::FixedDate { month, day, shift } => {
            Arc::new(FixedDateHoliday::new(month, day, shift)?)
        },
        HolidayRuleJsonProp::EasterRelated { offset_days, shift } => {
            Arc::new(EasterRelatedHoliday::new(offset_days, shift))
        }
    };
    Ok(holiday)
}
