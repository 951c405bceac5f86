use crate::core::duration::DurationUnit;
use chrono::TimeDelta;

/// A named billing policy shared by projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worktype {
    pub id: i64,
    pub name: String,        // ⇔ work_type.name (UNIQUE)
    pub rounding: TimeDelta, // ⇔ work_type.rounding (INT seconds, 0 = no rounding)
    pub minimum: TimeDelta,  // ⇔ work_type.minimum (INT seconds)
    pub price_cents: i64,    // ⇔ work_type.price_cents
}

impl Worktype {
    pub fn has_rounding(&self) -> bool {
        !self.rounding.is_zero()
    }
}

/// Raw worktype input, as typed by the user.
///
/// Numbers and unit codes are kept raw so that their errors surface after
/// the name checks.
#[derive(Debug, Clone)]
pub struct NewWorktype {
    pub name: String,
    pub rounding: String,
    /// `DurationUnit` code: 0 = seconds, 1 = minutes, 2 = hours.
    pub rounding_unit: u8,
    pub minimum: String,
    pub min_unit: u8,
    pub price: String,
}

impl NewWorktype {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rounding: "0".to_string(),
            rounding_unit: DurationUnit::Raw.code(),
            minimum: "0".to_string(),
            min_unit: DurationUnit::Raw.code(),
            price: "0".to_string(),
        }
    }

    pub fn rounding(mut self, value: &str, unit: DurationUnit) -> Self {
        self.rounding = value.to_string();
        self.rounding_unit = unit.code();
        self
    }

    pub fn minimum(mut self, value: &str, unit: DurationUnit) -> Self {
        self.minimum = value.to_string();
        self.min_unit = unit.code();
        self
    }

    pub fn price(mut self, value: &str) -> Self {
        self.price = value.to_string();
        self
    }
}
