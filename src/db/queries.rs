use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use crate::models::project::Project;
use crate::models::project_state::ProjectState;
use crate::models::worktype::Worktype;
use crate::utils::time::{format_ts, parse_optional_ts};
use chrono::{NaiveDateTime, TimeDelta};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Conversion failure reported against the column `name` of `row`.
fn conversion_error(row: &Row, name: &str, ty: Type, err: AppError) -> rusqlite::Error {
    match row.as_ref().column_index(name) {
        Ok(col) => rusqlite::Error::FromSqlConversionFailure(col, ty, Box::new(err)),
        Err(e) => e,
    }
}

fn seconds_column(row: &Row, name: &str) -> Result<TimeDelta> {
    let secs: i64 = row.get(name)?;
    TimeDelta::try_seconds(secs).ok_or_else(|| {
        conversion_error(
            row,
            name,
            Type::Integer,
            AppError::Other(format!("Duration out of range in {}: {}", name, secs)),
        )
    })
}

fn timestamp_column(row: &Row, name: &str) -> Result<Option<NaiveDateTime>> {
    let raw: Option<String> = row.get(name)?;
    parse_optional_ts(raw.as_deref()).map_err(|e| conversion_error(row, name, Type::Text, e))
}

// ---------------------------
// work_type
// ---------------------------

pub fn map_worktype(row: &Row) -> Result<Worktype> {
    Ok(Worktype {
        id: row.get("id")?,
        name: row.get("name")?,
        rounding: seconds_column(row, "rounding")?,
        minimum: seconds_column(row, "minimum")?,
        price_cents: row.get("price_cents")?,
    })
}

pub fn insert_worktype(
    conn: &Connection,
    name: &str,
    rounding: TimeDelta,
    minimum: TimeDelta,
    price_cents: i64,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO work_type (name, rounding, minimum, price_cents)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            name,
            rounding.num_seconds(),
            minimum.num_seconds(),
            price_cents
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_worktype_by_name(conn: &Connection, name: &str) -> AppResult<Option<Worktype>> {
    let wt = conn
        .query_row(
            "SELECT * FROM work_type WHERE name = ?1",
            [name],
            map_worktype,
        )
        .optional()?;
    Ok(wt)
}

pub fn load_worktype(conn: &Connection, id: i64) -> AppResult<Option<Worktype>> {
    let wt = conn
        .query_row("SELECT * FROM work_type WHERE id = ?1", [id], map_worktype)
        .optional()?;
    Ok(wt)
}

pub fn list_worktypes(conn: &Connection) -> AppResult<Vec<Worktype>> {
    let mut stmt = conn.prepare("SELECT * FROM work_type ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_worktype)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Worktype referenced by a project.
pub fn load_project_worktype(conn: &Connection, project_id: i64) -> AppResult<Option<Worktype>> {
    let wt = conn
        .query_row(
            "SELECT W.* FROM work_type W, project P
             WHERE W.id = P.type_id AND P.id = ?1",
            [project_id],
            map_worktype,
        )
        .optional()?;
    Ok(wt)
}

// ---------------------------
// project
// ---------------------------

pub fn map_project(row: &Row) -> Result<Project> {
    let code: i64 = row.get("state")?;
    let state = ProjectState::from_db_code(code).ok_or_else(|| {
        conversion_error(row, "state", Type::Integer, AppError::InvalidState(code))
    })?;

    Ok(Project {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        type_id: row.get("type_id")?,
        state,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_project(
    conn: &Connection,
    user_id: i64,
    name: &str,
    type_id: i64,
    created_at: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO project (user_id, name, type_id, state, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            user_id,
            name,
            type_id,
            ProjectState::NeverStarted.to_db_code(),
            created_at
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Project `project_id` if, and only if, it belongs to `user_id`.
pub fn load_owned_project(
    conn: &Connection,
    project_id: i64,
    user_id: i64,
) -> AppResult<Option<Project>> {
    let p = conn
        .query_row(
            "SELECT * FROM project WHERE id = ?1 AND user_id = ?2",
            params![project_id, user_id],
            map_project,
        )
        .optional()?;
    Ok(p)
}

pub fn load_project(conn: &Connection, project_id: i64) -> AppResult<Option<Project>> {
    let p = conn
        .query_row(
            "SELECT * FROM project WHERE id = ?1",
            [project_id],
            map_project,
        )
        .optional()?;
    Ok(p)
}

pub fn list_projects_by_user(conn: &Connection, user_id: i64) -> AppResult<Vec<Project>> {
    let mut stmt = conn.prepare("SELECT * FROM project WHERE user_id = ?1 ORDER BY id ASC")?;
    let rows = stmt.query_map([user_id], map_project)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn set_project_state(conn: &Connection, project_id: i64, state: ProjectState) -> AppResult<()> {
    conn.execute(
        "UPDATE project SET state = ?1 WHERE id = ?2",
        params![state.to_db_code(), project_id],
    )?;
    Ok(())
}

// ---------------------------
// entry
// ---------------------------

pub fn map_entry(row: &Row) -> Result<Entry> {
    Ok(Entry {
        id: row.get("id")?,
        project_id: row.get("project_id")?,
        start: timestamp_column(row, "start")?,
        end: timestamp_column(row, "end")?,
        comment: row.get("comment")?,
    })
}

pub fn insert_entry(
    conn: &Connection,
    project_id: i64,
    start: &NaiveDateTime,
    end: Option<&NaiveDateTime>,
    comment: Option<&str>,
) -> AppResult<i64> {
    conn.execute(
        r#"INSERT INTO entry (project_id, start, "end", comment)
           VALUES (?1, ?2, ?3, ?4)"#,
        params![project_id, format_ts(start), end.map(format_ts), comment],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<Entry>> {
    let e = conn
        .query_row("SELECT * FROM entry WHERE id = ?1", [id], map_entry)
        .optional()?;
    Ok(e)
}

/// All entries of a project in chronological order.
pub fn load_entries(conn: &Connection, project_id: i64) -> AppResult<Vec<Entry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM entry
         WHERE project_id = ?1
         ORDER BY start ASC, id ASC",
    )?;
    let rows = stmt.query_map([project_id], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Most recent interval with a start and no end.
pub fn load_open_entry(conn: &Connection, project_id: i64) -> AppResult<Option<Entry>> {
    let e = conn
        .query_row(
            r#"SELECT * FROM entry
               WHERE project_id = ?1
                 AND start IS NOT NULL
                 AND "end" IS NULL
               ORDER BY id DESC
               LIMIT 1"#,
            [project_id],
            map_entry,
        )
        .optional()?;
    Ok(e)
}

/// Latest entry by start time, open or not.
pub fn load_latest_entry(conn: &Connection, project_id: i64) -> AppResult<Option<Entry>> {
    let e = conn
        .query_row(
            "SELECT * FROM entry
             WHERE project_id = ?1
             ORDER BY start DESC, id DESC
             LIMIT 1",
            [project_id],
            map_entry,
        )
        .optional()?;
    Ok(e)
}

/// Set `end = now` on every open interval of the project; returns how many were closed.
pub fn close_open_entries(conn: &Connection, project_id: i64, now: &NaiveDateTime) -> AppResult<usize> {
    let n = conn.execute(
        r#"UPDATE entry SET "end" = ?1
           WHERE project_id = ?2
             AND "end" IS NULL
             AND start IS NOT NULL"#,
        params![format_ts(now), project_id],
    )?;
    Ok(n)
}

/// Sum of `end - start` over closed entries; zero when there are none.
pub fn total_worked(conn: &Connection, project_id: i64) -> AppResult<TimeDelta> {
    let total = load_entries(conn, project_id)?
        .iter()
        .filter_map(|e| e.duration())
        .fold(TimeDelta::zero(), |acc, d| acc + d);
    Ok(total)
}
