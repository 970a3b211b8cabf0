//! Input validation errors raised at the boundary where user data enters
//! the system (CLI arguments, task creation, legacy rows).

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid start time '{0}', expected HH:MM")]
    InvalidStartTime(String),
    #[error("task title must not be empty")]
    EmptyTitle,
    #[error("task duration must be a positive number of minutes")]
    NonPositiveDuration,
    #[error("unknown priority '{0}', expected low, medium or high")]
    UnknownPriority(String),
    #[error("unknown mood '{0}'")]
    UnknownMood(String),
    #[error("unknown goal horizon '{0}', expected 1week, 1month, 6month or 1year")]
    UnknownGoalHorizon(String),
    #[error("unknown media kind '{0}', expected image or audio")]
    UnknownMediaKind(String),
    #[error("unknown setting '{0}'")]
    UnknownSetting(String),
    #[error("unknown calendar mode '{0}', expected normal or mood")]
    UnknownCalendarMode(String),
    #[error("app lock PIN must be exactly 4 digits")]
    InvalidPin,
}
