//! ANSI color helper utilities for terminal output.

use crate::models::project_state::ProjectState;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Running → green, paused → yellow, finished → grey, new → reset.
pub fn color_for_state(state: ProjectState) -> &'static str {
    match state {
        ProjectState::Running => GREEN,
        ProjectState::Paused => YELLOW,
        ProjectState::Finished => GREY,
        ProjectState::NeverStarted => RESET,
    }
}

pub fn colorize_state(state: ProjectState) -> String {
    format!("{}{}{}", color_for_state(state), state.label(), RESET)
}

/// Grey placeholder for missing values (an open entry has no end).
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}
