use super::day::{DayKey, StartTime};
use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icon used when the user does not pick one.
pub const DEFAULT_TASK_ICON: &str = "📅";

/// Display color tags, in palette order. The first one is the default.
pub const TASK_COLORS: &[&str] = &["blue", "rose", "amber", "emerald", "indigo", "purple"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(ValidationError::UnknownPriority(s.to_string())),
        }
    }
}

/// A task scheduled on one calendar day.
///
/// Field names serialize in camelCase, which is also the shape tasks had in
/// the legacy flat-key store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Length in minutes.
    pub duration: u32,
    pub start_time: StartTime,
    pub icon: String,
    pub date: DayKey,
    pub color: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Minutes since midnight at which the task ends.
    pub fn end_minutes(&self) -> i64 {
        self.start_time.minutes() + i64::from(self.duration)
    }
}

/// User input for a new task, validated by [`TaskDraft::into_task`].
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub duration: i64,
    pub start_time: String,
    pub icon: Option<String>,
    pub date: DayKey,
    pub color: Option<String>,
    pub priority: Priority,
}

impl TaskDraft {
    pub fn new(title: &str, date: DayKey, start_time: &str, duration: i64) -> Self {
        TaskDraft {
            title: title.to_string(),
            description: None,
            duration,
            start_time: start_time.to_string(),
            icon: None,
            date,
            color: None,
            priority: Priority::default(),
        }
    }

    /// Validates the draft and assigns a fresh identifier.
    ///
    /// New tasks always start as not completed.
    pub fn into_task(self) -> Result<Task, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.duration <= 0 {
            return Err(ValidationError::NonPositiveDuration);
        }
        let duration = u32::try_from(self.duration).map_err(|_| ValidationError::NonPositiveDuration)?;
        let start_time: StartTime = self.start_time.parse()?;

        Ok(Task {
            id: new_task_id(),
            title: title.to_string(),
            description: self.description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty()),
            duration,
            start_time,
            icon: self.icon.filter(|i| !i.trim().is_empty()).unwrap_or_else(|| DEFAULT_TASK_ICON.to_string()),
            date: self.date,
            color: self.color.unwrap_or_else(|| TASK_COLORS[0].to_string()),
            priority: self.priority,
            completed: false,
        })
    }
}

fn new_task_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
