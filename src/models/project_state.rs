use serde::Serialize;

/// Lifecycle of a project timer.
///
/// `NeverStarted` and `Finished` are kept apart even though neither accepts
/// a stop: a finished project has already been billed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ProjectState {
    NeverStarted,
    Paused,
    Running,
    Finished,
}

impl ProjectState {
    /// Convert enum → DB code
    pub fn to_db_code(self) -> i64 {
        match self {
            ProjectState::NeverStarted => 0,
            ProjectState::Paused => 1,
            ProjectState::Running => 2,
            ProjectState::Finished => 3,
        }
    }

    /// Convert DB code → enum
    pub fn from_db_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(ProjectState::NeverStarted),
            1 => Some(ProjectState::Paused),
            2 => Some(ProjectState::Running),
            3 => Some(ProjectState::Finished),
            _ => None,
        }
    }

    /// A stopped project has no timer to stop.
    pub fn is_stopped(self) -> bool {
        matches!(self, ProjectState::NeverStarted | ProjectState::Finished)
    }

    pub fn can_start(self) -> bool {
        matches!(self, ProjectState::NeverStarted | ProjectState::Paused)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectState::NeverStarted => "new",
            ProjectState::Paused => "paused",
            ProjectState::Running => "running",
            ProjectState::Finished => "finished",
        }
    }
}
