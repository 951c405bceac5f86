//! Worktype registry: validated creation and lookup of billing policies.

use crate::core::duration::{DurationUnit, normalize};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{find_worktype_by_name, insert_worktype, list_worktypes};
use crate::errors::{AppResult, ValidationError};
use crate::models::worktype::{NewWorktype, Worktype};
use crate::utils::formatting::price2readable;
use chrono::TimeDelta;
use rusqlite::TransactionBehavior;

pub const NAME_MIN_LEN: usize = 4;
pub const NAME_MAX_LEN: usize = 128;

/// Numeric part of a worktype, once parsed and normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Policy {
    rounding: TimeDelta,
    minimum: TimeDelta,
    price_cents: i64,
}

pub struct WorktypeLogic;

impl WorktypeLogic {
    /// Create a worktype and return its id.
    ///
    /// Checks run in order: name length, name uniqueness, numeric fields.
    /// Nothing is written unless every check passes.
    pub fn create(pool: &mut DbPool, input: &NewWorktype) -> AppResult<i64> {
        let name = input.name.trim();
        validate_name_length(name)?;

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        if find_worktype_by_name(&tx, name)?.is_some() {
            return Err(ValidationError::NameTaken.into());
        }

        let policy = parse_policy(input)?;

        let id = insert_worktype(
            &tx,
            name,
            policy.rounding,
            policy.minimum,
            policy.price_cents,
        )?;

        ttlog(
            &tx,
            "worktype_add",
            name,
            &format!(
                "rounding={}s minimum={}s price={}",
                policy.rounding.num_seconds(),
                policy.minimum.num_seconds(),
                price2readable(policy.price_cents)
            ),
        )?;

        tx.commit()?;
        Ok(id)
    }

    pub fn find(pool: &mut DbPool, name: &str) -> AppResult<Option<Worktype>> {
        find_worktype_by_name(&pool.conn, name.trim())
    }

    pub fn list(pool: &mut DbPool) -> AppResult<Vec<Worktype>> {
        list_worktypes(&pool.conn)
    }
}

fn validate_name_length(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(ValidationError::InvalidNameLength);
    }
    Ok(())
}

fn parse_policy(input: &NewWorktype) -> Result<Policy, ValidationError> {
    let rounding = parse_integer(&input.rounding)?;
    let minimum = parse_integer(&input.minimum)?;
    let price_cents = parse_price_cents(&input.price)?;

    let rounding_unit = DurationUnit::from_code(input.rounding_unit)?;
    let min_unit = DurationUnit::from_code(input.min_unit)?;

    Ok(Policy {
        rounding: normalize(rounding, rounding_unit),
        minimum: normalize(minimum, min_unit),
        price_cents,
    })
}

fn parse_integer(s: &str) -> Result<i64, ValidationError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumericInput)
}

/// Parse a decimal price and round it to whole cents.
///
/// Rounding goes through the two-decimal rendering of the parsed value, so
/// ties resolve on the exact binary value (half to even): "2.675" is 2.67.
fn parse_price_cents(s: &str) -> Result<i64, ValidationError> {
    let price = s
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::InvalidNumericInput)?;
    if !price.is_finite() {
        return Err(ValidationError::InvalidNumericInput);
    }

    format!("{:.2}", price)
        .replace('.', "")
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidNumericInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert_eq!(validate_name_length("abc"), Err(ValidationError::InvalidNameLength));
        assert_eq!(validate_name_length("abcd"), Ok(()));
        assert_eq!(validate_name_length(&"x".repeat(128)), Ok(()));
        assert_eq!(
            validate_name_length(&"x".repeat(129)),
            Err(ValidationError::InvalidNameLength)
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert_eq!(validate_name_length("épée"), Ok(()));
    }

    #[test]
    fn prices_round_to_cents() {
        assert_eq!(parse_price_cents("42.5"), Ok(4250));
        assert_eq!(parse_price_cents(" 19.999 "), Ok(2000));
        assert_eq!(parse_price_cents("3"), Ok(300));
        assert_eq!(parse_price_cents("-1.5"), Ok(-150));
        assert_eq!(parse_price_cents("1e300"), Err(ValidationError::InvalidNumericInput));
        assert_eq!(parse_price_cents("abc"), Err(ValidationError::InvalidNumericInput));
        assert_eq!(parse_price_cents("inf"), Err(ValidationError::InvalidNumericInput));
        assert_eq!(parse_price_cents("NaN"), Err(ValidationError::InvalidNumericInput));
    }

    #[test]
    fn price_ties_round_on_the_binary_value() {
        assert_eq!(parse_price_cents("0.125"), Ok(12));
        assert_eq!(parse_price_cents("0.625"), Ok(62));
        assert_eq!(parse_price_cents("2.675"), Ok(267));
        assert_eq!(parse_price_cents("1.005"), Ok(100));
    }

    #[test]
    fn policy_uses_units() {
        let input = NewWorktype::new("Consulting")
            .rounding("15", DurationUnit::Minutes)
            .minimum("1", DurationUnit::Hours)
            .price("80");
        let policy = parse_policy(&input).unwrap();
        assert_eq!(policy.rounding, TimeDelta::minutes(15));
        assert_eq!(policy.minimum, TimeDelta::hours(1));
        assert_eq!(policy.price_cents, 8000);
    }

    #[test]
    fn integers_only_for_durations() {
        let input = NewWorktype::new("Consulting").rounding("1.5", DurationUnit::Hours);
        assert_eq!(parse_policy(&input), Err(ValidationError::InvalidNumericInput));

        let input = NewWorktype::new("Consulting").minimum("", DurationUnit::Raw);
        assert_eq!(parse_policy(&input), Err(ValidationError::InvalidNumericInput));
    }

    #[test]
    fn unknown_unit_codes_are_rejected_with_the_numbers() {
        let input = NewWorktype {
            rounding_unit: 5,
            ..NewWorktype::new("Consulting")
        };
        assert_eq!(parse_policy(&input), Err(ValidationError::InvalidUnit(5)));
    }
}
