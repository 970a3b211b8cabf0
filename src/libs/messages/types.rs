/// Every message chronos can show to the user.
///
/// Variants carry the dynamic parts of the text; the wording itself is in
/// the `Display` implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),         // title
    TaskDeleted(String),         // id
    TaskNotFound(String),        // id
    TaskCompleted(String),       // title
    TaskReopened(String),        // title
    TasksNotFoundForDate(String), // date
    TasksHeader(String),         // date
    TimelineHeader(String),      // date
    IconSuggested(String),       // icon
    IconSuggestionFailed(String), // error

    // === JOURNAL MESSAGES ===
    MoodSaved(String, String),  // date, mood label
    MoodForDate(String, String), // date, mood label
    NoMoodsRecorded,
    JournalSaved(String),       // date
    JournalEmpty(String),       // date
    MediaAdded(String, usize),  // date, new count
    MediaRemoved(String, usize), // date, index
    MediaIndexOutOfRange(usize, usize), // index, len
    MediaNotFoundForDate(String), // date
    MediaFileReadFailed(String),  // path and error
    GoalSaved(String),          // horizon label

    // === SETTINGS MESSAGES ===
    SettingSaved(String),       // key
    SettingInvalid(String, String), // key, error
    SettingUnknownKey(String),  // key

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigModuleIconApi,
    ConfigModuleAlerts,
    PromptSelectModules,
    PromptIconApiKey,
    PromptIconModel,
    PromptAlertInterval,
    PromptAlertBound,

    // === ALERT MESSAGES ===
    WatcherStarted(usize, u64), // task count, interval seconds
    WatcherNoTasksToday,
    AlertFired(String, String, String), // icon, title, label
    AlertVibrate,

    // === LEGACY IMPORT MESSAGES ===
    LegacyImportStarted(String), // source
    LegacyImportSkippedNoSource,
    LegacyKeyParseFailed(String, String), // key, error
    LegacyRowSkipped(String, String),     // key, reason
    LegacyImportCompleted(usize, usize, usize), // rows, raw fallbacks, skipped
    LegacyImportConfirm,
    LegacyImportCancelled,
    LegacyImportStepApplied,
    LegacyFileReadFailed(String), // path

    // === VALIDATION MESSAGES ===
    InvalidInput(String),
    PastDayReadOnly(String), // date

    // === DATABASE MESSAGES ===
    SettingDecodeFailed(String, String), // key, error

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32), // from, to
    RollbackCompleted(u32),
}
