//! Journal text and media attachments.
//!
//! Text is one note per day. Media is an ordered list of encoded payloads
//! per day, stored as a JSON array; images and audio clips live in separate
//! tables with the same shape.

use crate::libs::day::DayKey;
use crate::libs::journal::MediaKind;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;

pub struct JournalEntries<'a> {
    conn: &'a Connection,
}

impl<'a> JournalEntries<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        JournalEntries { conn }
    }

    pub fn get_all(&self) -> Result<BTreeMap<DayKey, String>> {
        let mut stmt = self.conn.prepare("SELECT date, content FROM journal_entries")?;
        let entries = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(entries)
    }

    pub fn get(&self, date: DayKey) -> Result<Option<String>> {
        let content = self
            .conn
            .query_row("SELECT content FROM journal_entries WHERE date = ?1", params![date], |row| row.get(0))
            .optional()?;
        Ok(content)
    }

    pub fn save(&self, date: DayKey, content: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO journal_entries (date, content) VALUES (?1, ?2)
             ON CONFLICT(date) DO UPDATE SET content = excluded.content",
            params![date, content],
        )?;
        Ok(())
    }
}

pub struct JournalMedia<'a> {
    conn: &'a Connection,
    kind: MediaKind,
}

impl<'a> JournalMedia<'a> {
    pub fn new(conn: &'a Connection, kind: MediaKind) -> Self {
        JournalMedia { conn, kind }
    }

    fn table(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => "journal_images",
            MediaKind::Audio => "journal_audios",
        }
    }

    pub fn get_all(&self) -> Result<BTreeMap<DayKey, Vec<String>>> {
        let mut stmt = self.conn.prepare(&format!("SELECT date, data FROM {}", self.table()))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get::<_, DayKey>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let mut media = BTreeMap::new();
        for (date, data) in rows {
            media.insert(date, serde_json::from_str(&data)?);
        }
        Ok(media)
    }

    /// Attachments of one day, in the order they were added.
    pub fn get(&self, date: DayKey) -> Result<Vec<String>> {
        let data: Option<String> = self
            .conn
            .query_row(&format!("SELECT data FROM {} WHERE date = ?1", self.table()), params![date], |row| row.get(0))
            .optional()?;

        match data {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the whole list for `date`.
    pub fn save(&self, date: DayKey, items: &[String]) -> Result<()> {
        self.conn.execute(
            &format!(
                "INSERT INTO {} (date, data) VALUES (?1, ?2) ON CONFLICT(date) DO UPDATE SET data = excluded.data",
                self.table()
            ),
            params![date, serde_json::to_string(items)?],
        )?;
        Ok(())
    }

    /// Adds one payload at the end and returns the new count.
    pub fn append(&self, date: DayKey, item: String) -> Result<usize> {
        let mut items = self.get(date)?;
        items.push(item);
        self.save(date, &items)?;
        Ok(items.len())
    }

    /// Removes the payload at `index`, if there is one.
    pub fn remove(&self, date: DayKey, index: usize) -> Result<Option<String>> {
        let mut items = self.get(date)?;
        if index >= items.len() {
            return Ok(None);
        }
        let removed = items.remove(index);
        self.save(date, &items)?;
        Ok(Some(removed))
    }
}
