use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;

/// Comment attached to the synthetic entry written at stop time.
pub const ROUNDING_COMMENT: &str = "Rounding entry.";

/// A worked interval `[start, end)`; `end = None` means the timer is running.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub project_id: i64,
    pub start: Option<NaiveDateTime>, // ⇔ entry.start (TEXT, UTC)
    pub end: Option<NaiveDateTime>,   // ⇔ entry."end" (TEXT, UTC, NULL = open)
    pub comment: Option<String>,
}

impl Entry {
    pub fn is_open(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub fn is_rounding(&self) -> bool {
        self.comment.as_deref() == Some(ROUNDING_COMMENT)
    }

    /// Length of a closed interval, `None` while open.
    pub fn duration(&self) -> Option<TimeDelta> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Some(e - s),
            _ => None,
        }
    }
}
