//! Display implementation for chronos application messages.
//!
//! This is the single source of truth for message wording. Messages with
//! parameters interpolate them here so call sites stay free of format
//! strings.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' scheduled", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskReopened(title) => format!("Task '{}' marked as not completed", title),
            Message::TasksNotFoundForDate(date) => format!("No tasks scheduled for {}", date),
            Message::TasksHeader(date) => format!("Tasks for {}", date),
            Message::TimelineHeader(date) => format!("Timeline for {}", date),
            Message::IconSuggested(icon) => format!("Suggested icon: {}", icon),
            Message::IconSuggestionFailed(error) => format!("Icon suggestion failed, using default: {}", error),

            // === JOURNAL MESSAGES ===
            Message::MoodSaved(date, label) => format!("Mood for {} set to {}", date, label),
            Message::MoodForDate(date, label) => format!("{}: {}", date, label),
            Message::NoMoodsRecorded => "No moods recorded yet".to_string(),
            Message::JournalSaved(date) => format!("Journal entry for {} saved", date),
            Message::JournalEmpty(date) => format!("No journal entry for {}", date),
            Message::MediaAdded(date, count) => format!("Attachment added to {} ({} total)", date, count),
            Message::MediaRemoved(date, index) => format!("Attachment #{} removed from {}", index, date),
            Message::MediaIndexOutOfRange(index, len) => format!("Attachment #{} does not exist ({} attached)", index, len),
            Message::MediaNotFoundForDate(date) => format!("No attachments for {}", date),
            Message::MediaFileReadFailed(detail) => format!("Failed to read attachment {}", detail),
            Message::GoalSaved(label) => format!("{} saved", label),

            // === SETTINGS MESSAGES ===
            Message::SettingSaved(key) => format!("Setting '{}' saved", key),
            Message::SettingInvalid(key, error) => format!("Invalid value for setting '{}': {}", key, error),
            Message::SettingUnknownKey(key) => format!("Unknown setting '{}'", key),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigModuleIconApi => "Icon suggestion (Gemini API)".to_string(),
            Message::ConfigModuleAlerts => "Task alerts".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptIconApiKey => "Gemini API key".to_string(),
            Message::PromptIconModel => "Model name".to_string(),
            Message::PromptAlertInterval => "Check interval (seconds)".to_string(),
            Message::PromptAlertBound => "Forget fired alerts after (entries)".to_string(),

            // === ALERT MESSAGES ===
            Message::WatcherStarted(count, interval) => format!("Watching {} task(s) for today, checking every {}s", count, interval),
            Message::WatcherNoTasksToday => "No tasks scheduled for today, nothing to watch".to_string(),
            Message::AlertFired(icon, title, label) => format!("{} {}: {}", icon, title, label),
            Message::AlertVibrate => "📳 Vibrate".to_string(),

            // === LEGACY IMPORT MESSAGES ===
            Message::LegacyImportStarted(source) => format!("Importing legacy data from {}", source),
            Message::LegacyImportSkippedNoSource => "No legacy store found, skipping legacy import".to_string(),
            Message::LegacyKeyParseFailed(key, error) => format!("Failed to parse legacy key \"{}\", keeping raw value: {}", key, error),
            Message::LegacyRowSkipped(key, reason) => format!("Skipped a row of legacy key \"{}\": {}", key, reason),
            Message::LegacyImportCompleted(rows, raw, skipped) => {
                format!("Legacy import complete: {} rows written, {} raw fallbacks, {} rows skipped", rows, raw, skipped)
            }
            Message::LegacyImportConfirm => "Importing will overwrite matching tasks, moods, journal entries, media, goals and settings. Proceed?".to_string(),
            Message::LegacyImportStepApplied => "Legacy store import step is recorded".to_string(),
            Message::LegacyImportCancelled => "Import cancelled, nothing was changed".to_string(),
            Message::LegacyFileReadFailed(path) => format!("Failed to read legacy store file: {}", path),

            // === VALIDATION MESSAGES ===
            Message::InvalidInput(error) => format!("Invalid input: {}", error),
            Message::PastDayReadOnly(date) => format!("{} is in the past and read-only (use --force to change it)", date),

            // === DATABASE MESSAGES ===
            Message::SettingDecodeFailed(key, error) => format!("Stored value of setting '{}' could not be decoded, using default: {}", key, error),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),
        };

        write!(f, "{}", text)
    }
}
