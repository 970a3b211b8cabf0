use crate::libs::journal::GoalHorizon;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;

/// Free-text goals, one per horizon.
pub struct Goals<'a> {
    conn: &'a Connection,
}

impl<'a> Goals<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Goals { conn }
    }

    /// All four horizons; unset ones map to an empty string.
    pub fn get_all(&self) -> Result<BTreeMap<GoalHorizon, String>> {
        let mut goals: BTreeMap<GoalHorizon, String> = GoalHorizon::ALL.into_iter().map(|h| (h, String::new())).collect();

        let mut stmt = self.conn.prepare("SELECT id, content FROM goals")?;
        for row in stmt.query_map([], |row| Ok((row.get::<_, GoalHorizon>(0)?, row.get::<_, String>(1)?)))? {
            let (horizon, content) = row?;
            goals.insert(horizon, content);
        }
        Ok(goals)
    }

    pub fn get(&self, horizon: GoalHorizon) -> Result<String> {
        let content: Option<String> = self
            .conn
            .query_row("SELECT content FROM goals WHERE id = ?1", params![horizon], |row| row.get(0))
            .optional()?;
        Ok(content.unwrap_or_default())
    }

    pub fn save(&self, horizon: GoalHorizon, content: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO goals (id, content) VALUES (?1, ?2) ON CONFLICT(id) DO UPDATE SET content = excluded.content",
            params![horizon, content],
        )?;
        Ok(())
    }
}
