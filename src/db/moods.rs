use crate::libs::day::DayKey;
use crate::libs::journal::Mood;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;

const UPSERT_MOOD: &str = "INSERT INTO moods (date, mood_id) VALUES (?1, ?2)
    ON CONFLICT(date) DO UPDATE SET mood_id = excluded.mood_id";

/// One mood per day.
pub struct Moods<'a> {
    conn: &'a Connection,
}

impl<'a> Moods<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Moods { conn }
    }

    pub fn get_all(&self) -> Result<BTreeMap<DayKey, Mood>> {
        let mut stmt = self.conn.prepare("SELECT date, mood_id FROM moods")?;
        let moods = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(moods)
    }

    pub fn get(&self, date: DayKey) -> Result<Option<Mood>> {
        let mood = self
            .conn
            .query_row("SELECT mood_id FROM moods WHERE date = ?1", params![date], |row| row.get(0))
            .optional()?;
        Ok(mood)
    }

    pub fn save(&self, date: DayKey, mood: Mood) -> Result<()> {
        self.conn.execute(UPSERT_MOOD, params![date, mood])?;
        Ok(())
    }
}
