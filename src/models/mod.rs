pub mod entry;
pub mod project;
pub mod project_state;
pub mod worktype;
