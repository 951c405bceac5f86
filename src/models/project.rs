use super::project_state::ProjectState;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub user_id: i64,        // ⇔ project.user_id (owner)
    pub name: String,        // ⇔ project.name
    pub type_id: i64,        // ⇔ project.type_id → work_type.id
    pub state: ProjectState, // ⇔ project.state (INT 0..=3)
    pub created_at: String,  // ⇔ project.created_at (TEXT, RFC 3339)
}
