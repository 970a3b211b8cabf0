use crate::libs::messages::Message;
use crate::libs::settings::{NotificationSettings, Setting, SettingKey};
use crate::msg_warning;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::collections::BTreeMap;

const UPSERT_SETTING: &str = "INSERT INTO settings (id, value) VALUES (?1, ?2)
    ON CONFLICT(id) DO UPDATE SET value = excluded.value";

/// Settings stored as `id -> JSON` rows, read back through [`Setting`].
pub struct Settings<'a> {
    conn: &'a Connection,
}

impl<'a> Settings<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Settings { conn }
    }

    /// Raw stored values by id, including ids chronos does not know.
    pub fn get_all(&self) -> Result<BTreeMap<String, Value>> {
        let mut stmt = self.conn.prepare("SELECT id, value FROM settings")?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut settings = BTreeMap::new();
        for (id, value) in rows {
            settings.insert(id, serde_json::from_str(&value)?);
        }
        Ok(settings)
    }

    pub fn get_value(&self, id: &str) -> Result<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM settings WHERE id = ?1", params![id], |row| row.get(0))
            .optional()?;

        match raw {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Typed read. A stored value of the wrong shape is an error.
    pub fn get(&self, key: SettingKey) -> Result<Option<Setting>> {
        match self.get_value(key.id())? {
            Some(value) => Ok(Some(Setting::from_value(key, value)?)),
            None => Ok(None),
        }
    }

    /// Typed read that falls back to the key's default when the value is
    /// missing or cannot be decoded.
    pub fn get_or_default(&self, key: SettingKey) -> Result<Option<Setting>> {
        match self.get(key) {
            Ok(Some(setting)) => Ok(Some(setting)),
            Ok(None) => Ok(key.default_setting()),
            Err(e) if e.is::<serde_json::Error>() => {
                msg_warning!(Message::SettingDecodeFailed(key.to_string(), e.to_string()));
                Ok(key.default_setting())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, setting: &Setting) -> Result<()> {
        self.save_value(setting.key().id(), &setting.to_value()?)
    }

    /// Untyped write, used when importing values chronos cannot decode.
    pub fn save_value(&self, id: &str, value: &Value) -> Result<()> {
        self.conn.execute(UPSERT_SETTING, params![id, serde_json::to_string(value)?])?;
        Ok(())
    }

    pub fn notification_settings(&self) -> Result<NotificationSettings> {
        match self.get_or_default(SettingKey::NotificationSettings)? {
            Some(Setting::NotificationSettings(settings)) => Ok(settings),
            _ => Ok(NotificationSettings::default()),
        }
    }

    pub fn vibration_enabled(&self) -> Result<bool> {
        match self.get_or_default(SettingKey::VibrationEnabled)? {
            Some(Setting::VibrationEnabled(enabled)) => Ok(enabled),
            _ => Ok(true),
        }
    }
}
