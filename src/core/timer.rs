//! Project timer state machine: start, pause and stop.
//!
//! Every transition runs in an IMMEDIATE transaction, which takes SQLite's
//! write lock before the ownership and state checks. Two concurrent stops on
//! the same project are therefore serialized and the second one is rejected.

use crate::core::rounding::{Reconciliation, reconcile_in};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    close_open_entries, insert_entry, load_latest_entry, load_open_entry, load_owned_project,
    set_project_state,
};
use crate::errors::AppResult;
use crate::models::project_state::ProjectState;
use chrono::NaiveDateTime;
use rusqlite::{Connection, TransactionBehavior};

/// Outcome of a timer transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// No such project for this caller.
    NotFound,
    /// The project is not in a state that allows the transition.
    Rejected,
}

impl Transition {
    pub fn applied(self) -> bool {
        matches!(self, Transition::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopOutcome {
    pub transition: Transition,
    pub reconciliation: Option<Reconciliation>,
}

/// Open a new interval. Only new or paused projects without a running
/// interval can be started.
pub fn start_in(
    conn: &Connection,
    project_id: i64,
    user_id: i64,
    now: &NaiveDateTime,
) -> AppResult<Transition> {
    let Some(project) = load_owned_project(conn, project_id, user_id)? else {
        return Ok(Transition::NotFound);
    };

    if !project.state.can_start() || load_open_entry(conn, project_id)?.is_some() {
        return Ok(Transition::Rejected);
    }

    insert_entry(conn, project_id, now, None, None)?;
    set_project_state(conn, project_id, ProjectState::Running)?;
    ttlog(conn, "start", &project_id.to_string(), &project.name)?;

    Ok(Transition::Applied)
}

/// Close the running interval. Requires an open entry, whatever the stored state.
pub fn pause_in(
    conn: &Connection,
    project_id: i64,
    user_id: i64,
    now: &NaiveDateTime,
) -> AppResult<Transition> {
    let Some(project) = load_owned_project(conn, project_id, user_id)? else {
        return Ok(Transition::NotFound);
    };

    if load_open_entry(conn, project_id)?.is_none() {
        return Ok(Transition::Rejected);
    }

    close_open_entries(conn, project_id, now)?;
    set_project_state(conn, project_id, ProjectState::Paused)?;
    ttlog(conn, "pause", &project_id.to_string(), &project.name)?;

    Ok(Transition::Applied)
}

/// First half of a stop: close the latest interval if it is still open and
/// mark the project paused. The final state is written by reconciliation.
pub fn stop_in(
    conn: &Connection,
    project_id: i64,
    user_id: i64,
    now: &NaiveDateTime,
) -> AppResult<Transition> {
    let Some(project) = load_owned_project(conn, project_id, user_id)? else {
        return Ok(Transition::NotFound);
    };

    if project.state.is_stopped() {
        return Ok(Transition::Rejected);
    }

    if let Some(latest) = load_latest_entry(conn, project_id)?
        && latest.end.is_none()
    {
        close_open_entries(conn, project_id, now)?;
        set_project_state(conn, project_id, ProjectState::Paused)?;
    }

    ttlog(conn, "stop", &project_id.to_string(), &project.name)?;

    Ok(Transition::Applied)
}

pub struct TimerLogic;

impl TimerLogic {
    pub fn start(
        pool: &mut DbPool,
        project_id: i64,
        user_id: i64,
        now: &NaiveDateTime,
    ) -> AppResult<Transition> {
        Self::in_transaction(pool, |conn| start_in(conn, project_id, user_id, now))
    }

    pub fn pause(
        pool: &mut DbPool,
        project_id: i64,
        user_id: i64,
        now: &NaiveDateTime,
    ) -> AppResult<Transition> {
        Self::in_transaction(pool, |conn| pause_in(conn, project_id, user_id, now))
    }

    /// Stop without reconciling. The caller owes exactly one
    /// `RoundingLogic::reconcile` when this returns `Applied`.
    pub fn stop(
        pool: &mut DbPool,
        project_id: i64,
        user_id: i64,
        now: &NaiveDateTime,
    ) -> AppResult<Transition> {
        Self::in_transaction(pool, |conn| stop_in(conn, project_id, user_id, now))
    }

    /// Stop and reconcile as one unit.
    pub fn finish(
        pool: &mut DbPool,
        project_id: i64,
        user_id: i64,
        now: &NaiveDateTime,
    ) -> AppResult<StopOutcome> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let transition = stop_in(&tx, project_id, user_id, now)?;
        if !transition.applied() {
            return Ok(StopOutcome {
                transition,
                reconciliation: None,
            });
        }

        let reconciliation = reconcile_in(&tx, project_id, now)?;
        tx.commit()?;

        Ok(StopOutcome {
            transition,
            reconciliation: Some(reconciliation),
        })
    }

    /// Run `op` in an immediate transaction; commit only applied transitions.
    fn in_transaction<F>(pool: &mut DbPool, op: F) -> AppResult<Transition>
    where
        F: FnOnce(&Connection) -> AppResult<Transition>,
    {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let transition = op(&*tx)?;
        if transition.applied() {
            tx.commit()?;
        }
        Ok(transition)
    }
}
