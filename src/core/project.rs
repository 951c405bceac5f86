use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{
    find_worktype_by_name, insert_project, list_projects_by_user, load_entries,
    load_open_entry, load_owned_project, load_worktype, total_worked,
};
use crate::errors::{AppError, AppResult, ValidationError};
use crate::models::entry::Entry;
use crate::models::project::Project;
use chrono::{Local, TimeDelta};
use rusqlite::TransactionBehavior;

/// A project as shown in listings.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub project: Project,
    pub worktype: String,
    pub worked: TimeDelta,
    pub running: bool,
}

pub struct ProjectLogic;

impl ProjectLogic {
    /// Create a project owned by `user_id`, billed with `worktype_name`.
    pub fn create(
        pool: &mut DbPool,
        user_id: i64,
        name: &str,
        worktype_name: &str,
    ) -> AppResult<i64> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyProjectName.into());
        }

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let worktype = find_worktype_by_name(&tx, worktype_name.trim())?
            .ok_or_else(|| AppError::WorktypeNotFound(worktype_name.trim().to_string()))?;

        let id = insert_project(&tx, user_id, name, worktype.id, &Local::now().to_rfc3339())?;

        ttlog(
            &tx,
            "project_add",
            &id.to_string(),
            &format!("{} (user {}, worktype {})", name, user_id, worktype.name),
        )?;

        tx.commit()?;
        Ok(id)
    }

    pub fn list(pool: &mut DbPool, user_id: i64) -> AppResult<Vec<ProjectSummary>> {
        let conn = &pool.conn;
        let mut out = Vec::new();

        for project in list_projects_by_user(conn, user_id)? {
            let worktype = load_worktype(conn, project.type_id)?
                .map(|w| w.name)
                .unwrap_or_default();
            let worked = total_worked(conn, project.id)?;
            let running = load_open_entry(conn, project.id)?.is_some();

            out.push(ProjectSummary {
                project,
                worktype,
                worked,
                running,
            });
        }

        Ok(out)
    }

    /// Entries of a project owned by `user_id`; `None` for foreign or unknown projects.
    pub fn entries(
        pool: &mut DbPool,
        project_id: i64,
        user_id: i64,
    ) -> AppResult<Option<(Project, Vec<Entry>)>> {
        let conn = &pool.conn;
        let Some(project) = load_owned_project(conn, project_id, user_id)? else {
            return Ok(None);
        };
        let entries = load_entries(conn, project_id)?;
        Ok(Some((project, entries)))
    }
}
