use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Versioned schema changes applied after the base tables exist, as
/// `(version, message, sql)`. Each one runs once and is recorded in `log` as
/// `migration_applied`. The base schema is current, so none are pending yet.
const MIGRATIONS: &[(&str, &str, &str)] = &[];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create `work_type`, `project` and `entry` with their lookup indexes.
fn create_core_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_type (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL UNIQUE,
            rounding     INTEGER NOT NULL DEFAULT 0,
            minimum      INTEGER NOT NULL DEFAULT 0,
            price_cents  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS project (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      INTEGER NOT NULL,
            name         TEXT NOT NULL,
            type_id      INTEGER NOT NULL REFERENCES work_type(id),
            state        INTEGER NOT NULL DEFAULT 0 CHECK(state IN (0, 1, 2, 3)),
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS entry (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            project_id   INTEGER NOT NULL REFERENCES project(id) ON DELETE CASCADE,
            start        TEXT,
            "end"        TEXT,
            comment      TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_entry_project_start ON entry(project_id, start);
        CREATE INDEX IF NOT EXISTS idx_project_user ON project(user_id, id);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply_migration(conn: &Connection, version: &str, message: &str, sql: &str) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::init_db()` and by `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema
    let fresh = !table_exists(conn, "project")?;
    create_core_tables(conn)?;
    if fresh {
        success("Created work_type, project and entry tables.");
    }

    // 3) Versioned changes
    for (version, message, sql) in MIGRATIONS {
        if !migration_applied(conn, version)? {
            apply_migration(conn, version, message, sql)?;
        }
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
