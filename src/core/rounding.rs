//! Time aggregation and rounding: turns the worked time of a stopped project
//! into billed time and records the difference as a rounding entry.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_entry, load_project_worktype, set_project_state, total_worked};
use crate::errors::{AppError, AppResult};
use crate::models::entry::ROUNDING_COMMENT;
use crate::models::project_state::ProjectState;
use crate::utils::formatting::delta2readable;
use chrono::{NaiveDateTime, TimeDelta};
use rusqlite::{Connection, TransactionBehavior};

/// Result of reconciling a project at stop time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Sum of all closed entries before reconciliation.
    pub worked: TimeDelta,
    /// `None` when the worktype does not round and the minimum was reached.
    pub billed: Option<TimeDelta>,
    /// `billed - worked`, zero when nothing was billed.
    pub delta: TimeDelta,
    pub rounding_entry: Option<i64>,
}

/// Floor division, rounding toward negative infinity for any sign.
fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q - 1
    } else {
        q
    }
}

/// Billing policy.
///
/// - below `minimum` → bill the minimum;
/// - no rounding → nothing to adjust (`None`);
/// - otherwise → next multiple of `rounding` strictly above `worked`, so an
///   exact multiple still moves up one unit.
pub fn billed_duration(
    worked: TimeDelta,
    rounding: TimeDelta,
    minimum: TimeDelta,
) -> Option<TimeDelta> {
    if worked < minimum {
        return Some(minimum);
    }
    if rounding.is_zero() {
        return None;
    }

    let unit = rounding.num_milliseconds();
    let steps = floor_div(worked.num_milliseconds(), unit) + 1;
    let billed = unit
        .checked_mul(steps)
        .and_then(TimeDelta::try_milliseconds)
        .unwrap_or(TimeDelta::MAX);
    Some(billed)
}

/// Reconcile inside the caller's transaction.
///
/// Not idempotent: the rounding entry is part of the next total, so this must
/// run exactly once per stop.
pub fn reconcile_in(
    conn: &Connection,
    project_id: i64,
    now: &NaiveDateTime,
) -> AppResult<Reconciliation> {
    let worked = total_worked(conn, project_id)?;
    let worktype = load_project_worktype(conn, project_id)?
        .ok_or_else(|| AppError::WorktypeNotFound(format!("for project #{}", project_id)))?;

    let target = project_id.to_string();

    let Some(billed) = billed_duration(worked, worktype.rounding, worktype.minimum) else {
        set_project_state(conn, project_id, ProjectState::Finished)?;
        ttlog(
            conn,
            "finish",
            &target,
            &format!(
                "Finished without rounding, worked {}",
                delta2readable(worked, false, true)
            ),
        )?;
        return Ok(Reconciliation {
            worked,
            billed: None,
            delta: TimeDelta::zero(),
            rounding_entry: None,
        });
    };

    let delta = billed - worked;
    let end = now.checked_add_signed(delta).ok_or_else(|| {
        AppError::Other(format!(
            "Rounding entry end out of range for project #{}",
            project_id
        ))
    })?;

    let entry_id = insert_entry(conn, project_id, now, Some(&end), Some(ROUNDING_COMMENT))?;
    set_project_state(conn, project_id, ProjectState::Finished)?;

    ttlog(
        conn,
        "rounding",
        &target,
        &format!(
            "worked {} → billed {} ({}, worktype {})",
            delta2readable(worked, false, true),
            delta2readable(billed, false, true),
            delta2readable(delta, true, true),
            worktype.name
        ),
    )?;

    Ok(Reconciliation {
        worked,
        billed: Some(billed),
        delta,
        rounding_entry: Some(entry_id),
    })
}

pub struct RoundingLogic;

impl RoundingLogic {
    /// Standalone reconciliation in its own transaction.
    pub fn reconcile(
        pool: &mut DbPool,
        project_id: i64,
        now: &NaiveDateTime,
    ) -> AppResult<Reconciliation> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rec = reconcile_in(&tx, project_id, now)?;
        tx.commit()?;
        Ok(rec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mins(m: i64) -> TimeDelta {
        TimeDelta::minutes(m)
    }

    #[test]
    fn rounds_up_to_next_multiple() {
        assert_eq!(billed_duration(mins(45), mins(30), mins(0)), Some(mins(60)));
        assert_eq!(billed_duration(mins(1), mins(15), mins(0)), Some(mins(15)));
    }

    #[test]
    fn exact_multiple_still_rounds_up() {
        assert_eq!(billed_duration(mins(30), mins(30), mins(0)), Some(mins(60)));
        assert_eq!(billed_duration(mins(0), mins(30), mins(0)), Some(mins(30)));
    }

    #[test]
    fn minimum_wins_over_rounding() {
        assert_eq!(billed_duration(mins(5), mins(30), mins(15)), Some(mins(15)));
        assert_eq!(billed_duration(mins(5), mins(0), mins(15)), Some(mins(15)));
    }

    #[test]
    fn reaching_the_minimum_falls_through_to_rounding() {
        assert_eq!(billed_duration(mins(15), mins(10), mins(15)), Some(mins(20)));
        assert_eq!(billed_duration(mins(15), mins(0), mins(15)), None);
    }

    #[test]
    fn no_rounding_means_no_adjustment() {
        assert_eq!(billed_duration(mins(47), mins(0), mins(0)), None);
    }

    #[test]
    fn sub_second_work_counts() {
        let worked = TimeDelta::milliseconds(60_500);
        assert_eq!(billed_duration(worked, mins(1), mins(0)), Some(mins(2)));
    }

    #[test]
    fn floor_division_follows_the_sign() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(7, -2), -4);
        assert_eq!(floor_div(-6, 2), -3);
    }
}
