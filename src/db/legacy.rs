//! Import from the legacy flat key-value store.
//!
//! The old store kept each collection under a single key as one JSON blob
//! (`date -> value` or `id -> value`), plus one key per setting. Import is
//! best effort:
//!
//! - a key that is absent or empty is skipped
//! - a blob that is not valid JSON, or not a JSON object, is kept verbatim in
//!   the `legacy_raw` table under its key, and the other keys still import
//! - a malformed row inside a valid blob is skipped with a warning
//! - a setting that does not decode as JSON of the right shape is stored as
//!   its raw string
//!
//! Every write is an upsert, so importing the same store again leaves the
//! database unchanged.

use super::goals::Goals;
use super::journal::{JournalEntries, JournalMedia};
use super::moods::Moods;
use super::settings::Settings;
use super::tasks::Tasks;
use crate::libs::day::DayKey;
use crate::libs::journal::{GoalHorizon, MediaKind, Mood};
use crate::libs::messages::Message;
use crate::libs::settings::{Setting, SettingKey};
use crate::libs::task::Task;
use crate::{msg_info, msg_warning};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

pub const LEGACY_TASKS: &str = "chronos_tasks";
pub const LEGACY_MOODS: &str = "chronos_moods";
pub const LEGACY_JOURNAL: &str = "chronos_journal";
pub const LEGACY_JOURNAL_IMAGES: &str = "chronos_journal_images";
pub const LEGACY_JOURNAL_AUDIOS: &str = "chronos_journal_audios";
pub const LEGACY_GOALS: &str = "chronos_goals";

/// Prefix of every legacy key; setting ids are the key without it.
pub const LEGACY_PREFIX: &str = "chronos_";

/// Source of legacy values, looked up by key.
pub trait LegacyStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Human-readable origin, used in log output.
    fn describe(&self) -> String {
        "legacy store".to_string()
    }
}

/// Legacy values held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryLegacyStore {
    entries: HashMap<String, String>,
}

impl MemoryLegacyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl LegacyStore for MemoryLegacyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// A JSON file dumped from the old store: one object of `key -> value`.
///
/// Values are normally the raw stored strings. Non-string values are
/// accepted too and taken as already-decoded JSON.
#[derive(Debug, Clone)]
pub struct JsonFileLegacyStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileLegacyStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let dump: Map<String, Value> = serde_json::from_str(&fs::read_to_string(&path)?)?;

        let entries = dump
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(raw) => (key, raw),
                other => (key, other.to_string()),
            })
            .collect();

        Ok(Self { path, entries })
    }
}

impl LegacyStore for JsonFileLegacyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// What an import wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub tasks: usize,
    pub moods: usize,
    pub journal_entries: usize,
    pub journal_images: usize,
    pub journal_audios: usize,
    pub goals: usize,
    pub settings: usize,
    /// Legacy keys kept verbatim in `legacy_raw`.
    pub raw_fallbacks: Vec<String>,
    pub skipped_rows: usize,
}

impl ImportReport {
    pub fn rows_written(&self) -> usize {
        self.tasks + self.moods + self.journal_entries + self.journal_images + self.journal_audios + self.goals + self.settings
    }

    fn skip(&mut self, key: &str, reason: impl Into<String>) {
        msg_warning!(Message::LegacyRowSkipped(key.to_string(), reason.into()));
        self.skipped_rows += 1;
    }
}

/// Raw legacy blobs that could not be imported as structured rows.
///
/// A blob that fails to parse is stored here under its legacy key and the
/// import goes on, so nothing from the old store is lost. The parsed entity
/// tables never see it.
pub struct LegacyRaw<'a> {
    conn: &'a Connection,
}

impl<'a> LegacyRaw<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        LegacyRaw { conn }
    }

    pub fn get_all(&self) -> Result<BTreeMap<String, String>> {
        let mut stmt = self.conn.prepare("SELECT key, content FROM legacy_raw")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(rows)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let content = self
            .conn
            .query_row("SELECT content FROM legacy_raw WHERE key = ?1", params![key], |row| row.get(0))
            .optional()?;
        Ok(content)
    }

    pub fn save(&self, key: &str, content: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO legacy_raw (key, content) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET content = excluded.content",
            params![key, content],
        )?;
        Ok(())
    }
}

/// Imports every known legacy key from `store` into the collections.
///
/// Only storage errors abort the import; bad legacy data never does.
pub fn import_legacy(conn: &Connection, store: &dyn LegacyStore) -> Result<ImportReport> {
    msg_info!(Message::LegacyImportStarted(store.describe()));
    let mut report = ImportReport::default();

    import_tasks(conn, store, &mut report)?;
    import_moods(conn, store, &mut report)?;
    import_journal(conn, store, &mut report)?;
    import_media(conn, store, MediaKind::Image, &mut report)?;
    import_media(conn, store, MediaKind::Audio, &mut report)?;
    import_goals(conn, store, &mut report)?;
    import_settings(conn, store, &mut report)?;

    msg_info!(Message::LegacyImportCompleted(
        report.rows_written(),
        report.raw_fallbacks.len(),
        report.skipped_rows
    ));
    Ok(report)
}

/// Reads a collection blob, keeping it raw when it is not a JSON object.
fn collection(conn: &Connection, store: &dyn LegacyStore, key: &str, report: &mut ImportReport) -> Result<Option<Map<String, Value>>> {
    let Some(raw) = store.get(key).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    let problem = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(map)) => return Ok(Some(map)),
        Ok(_) => "expected a JSON object".to_string(),
        Err(e) => e.to_string(),
    };

    msg_warning!(Message::LegacyKeyParseFailed(key.to_string(), problem));
    LegacyRaw::new(conn).save(key, &raw)?;
    report.raw_fallbacks.push(key.to_string());
    Ok(None)
}

fn day_key(key: &str, date: &str, report: &mut ImportReport) -> Option<DayKey> {
    match date.parse() {
        Ok(day) => Some(day),
        Err(e) => {
            report.skip(key, format!("{}", e));
            None
        }
    }
}

fn import_tasks(conn: &Connection, store: &dyn LegacyStore, report: &mut ImportReport) -> Result<()> {
    let Some(days) = collection(conn, store, LEGACY_TASKS, report)? else {
        return Ok(());
    };
    let tasks = Tasks::new(conn);

    for (date, day_tasks) in days {
        let Value::Array(items) = day_tasks else {
            report.skip(LEGACY_TASKS, format!("tasks of {} are not a list", date));
            continue;
        };
        for item in items {
            match serde_json::from_value::<Task>(item) {
                Ok(task) => {
                    tasks.put(&task)?;
                    report.tasks += 1;
                }
                Err(e) => report.skip(LEGACY_TASKS, e.to_string()),
            }
        }
    }
    Ok(())
}

fn import_moods(conn: &Connection, store: &dyn LegacyStore, report: &mut ImportReport) -> Result<()> {
    let Some(days) = collection(conn, store, LEGACY_MOODS, report)? else {
        return Ok(());
    };
    let moods = Moods::new(conn);

    for (date, mood) in days {
        let Some(day) = day_key(LEGACY_MOODS, &date, report) else {
            continue;
        };
        match mood.as_str().map(str::parse::<Mood>) {
            Some(Ok(mood)) => {
                moods.save(day, mood)?;
                report.moods += 1;
            }
            Some(Err(e)) => report.skip(LEGACY_MOODS, e.to_string()),
            None => report.skip(LEGACY_MOODS, format!("mood of {} is not a string", date)),
        }
    }
    Ok(())
}

fn import_journal(conn: &Connection, store: &dyn LegacyStore, report: &mut ImportReport) -> Result<()> {
    let Some(days) = collection(conn, store, LEGACY_JOURNAL, report)? else {
        return Ok(());
    };
    let entries = JournalEntries::new(conn);

    for (date, content) in days {
        let Some(day) = day_key(LEGACY_JOURNAL, &date, report) else {
            continue;
        };
        match content {
            Value::String(content) => {
                entries.save(day, &content)?;
                report.journal_entries += 1;
            }
            _ => report.skip(LEGACY_JOURNAL, format!("entry of {} is not text", date)),
        }
    }
    Ok(())
}

fn import_media(conn: &Connection, store: &dyn LegacyStore, kind: MediaKind, report: &mut ImportReport) -> Result<()> {
    let key = match kind {
        MediaKind::Image => LEGACY_JOURNAL_IMAGES,
        MediaKind::Audio => LEGACY_JOURNAL_AUDIOS,
    };
    let Some(days) = collection(conn, store, key, report)? else {
        return Ok(());
    };
    let media = JournalMedia::new(conn, kind);

    for (date, items) in days {
        let Some(day) = day_key(key, &date, report) else {
            continue;
        };
        match serde_json::from_value::<Vec<String>>(items) {
            Ok(items) => {
                media.save(day, &items)?;
                match kind {
                    MediaKind::Image => report.journal_images += 1,
                    MediaKind::Audio => report.journal_audios += 1,
                }
            }
            Err(e) => report.skip(key, e.to_string()),
        }
    }
    Ok(())
}

fn import_goals(conn: &Connection, store: &dyn LegacyStore, report: &mut ImportReport) -> Result<()> {
    let Some(goals_blob) = collection(conn, store, LEGACY_GOALS, report)? else {
        return Ok(());
    };
    let goals = Goals::new(conn);

    for (id, content) in goals_blob {
        let horizon = match id.parse::<GoalHorizon>() {
            Ok(horizon) => horizon,
            Err(e) => {
                report.skip(LEGACY_GOALS, e.to_string());
                continue;
            }
        };
        match content {
            Value::String(content) => {
                goals.save(horizon, &content)?;
                report.goals += 1;
            }
            _ => report.skip(LEGACY_GOALS, format!("goal {} is not text", id)),
        }
    }
    Ok(())
}

fn import_settings(conn: &Connection, store: &dyn LegacyStore, report: &mut ImportReport) -> Result<()> {
    let settings = Settings::new(conn);

    for key in SettingKey::ALL {
        let legacy_key = format!("{}{}", LEGACY_PREFIX, key.id());
        let Some(raw) = store.get(&legacy_key).filter(|raw| !raw.is_empty()) else {
            continue;
        };

        // Plain strings such as the user name were stored without JSON
        // quoting, and a PIN like "0420" parses as a number.
        let decoded = serde_json::from_str::<Value>(&raw)
            .ok()
            .filter(|value| Setting::from_value(key, value.clone()).is_ok());

        let value = match decoded {
            Some(value) => value,
            None => {
                if Setting::from_value(key, Value::String(raw.clone())).is_err() {
                    msg_warning!(Message::LegacyKeyParseFailed(legacy_key.clone(), raw.clone()));
                }
                Value::String(raw)
            }
        };

        settings.save_value(key.id(), &value)?;
        report.settings += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::db::Db;

    #[test]
    fn memory_store_returns_inserted_values() {
        let store = MemoryLegacyStore::new().with(LEGACY_MOODS, "{}");
        assert_eq!(store.get(LEGACY_MOODS).as_deref(), Some("{}"));
        assert_eq!(store.get(LEGACY_GOALS), None);
    }

    #[test]
    fn json_file_store_accepts_strings_and_decoded_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.json");
        fs::write(&path, r#"{"chronos_user_name":"Ada","chronos_moods":{"2025-01-01":"calm"}}"#).unwrap();

        let store = JsonFileLegacyStore::open(&path).unwrap();
        assert_eq!(store.get("chronos_user_name").as_deref(), Some("Ada"));
        assert_eq!(store.get(LEGACY_MOODS).as_deref(), Some(r#"{"2025-01-01":"calm"}"#));
    }

    #[test]
    fn non_object_blob_is_kept_raw() {
        let db = Db::in_memory().unwrap();
        let store = MemoryLegacyStore::new().with(LEGACY_GOALS, "[1,2,3]");

        let report = import_legacy(&db.conn, &store).unwrap();
        assert_eq!(report.raw_fallbacks, vec![LEGACY_GOALS.to_string()]);
        assert_eq!(LegacyRaw::new(&db.conn).get(LEGACY_GOALS).unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn numeric_pin_is_stored_as_text() {
        let db = Db::in_memory().unwrap();
        let store = MemoryLegacyStore::new().with("chronos_app_lock_pin", "0420");

        import_legacy(&db.conn, &store).unwrap();
        assert_eq!(
            Settings::new(&db.conn).get(SettingKey::AppLockPin).unwrap(),
            Some(Setting::AppLockPin("0420".to_string()))
        );
    }
}
