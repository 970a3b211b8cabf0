use crate::libs::day::DayKey;
use crate::libs::task::Task;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;

const SELECT_TASKS: &str = "SELECT id, title, description, duration, start_time, icon, date, color, priority, completed FROM tasks";
const UPSERT_TASK: &str = "INSERT INTO tasks (id, title, description, duration, start_time, icon, date, color, priority, completed)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
    ON CONFLICT(id) DO UPDATE SET
        title = excluded.title,
        description = excluded.description,
        duration = excluded.duration,
        start_time = excluded.start_time,
        icon = excluded.icon,
        date = excluded.date,
        color = excluded.color,
        priority = excluded.priority,
        completed = excluded.completed";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SET_COMPLETED: &str = "UPDATE tasks SET completed = ?2 WHERE id = ?1";

/// Task collection, keyed by id with a secondary index on the day.
///
/// Rows come back in insertion order; callers that need chronological order
/// sort by start time themselves.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Tasks { conn }
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            duration: row.get(3)?,
            start_time: row.get(4)?,
            icon: row.get(5)?,
            date: row.get(6)?,
            color: row.get(7)?,
            priority: row.get(8)?,
            completed: row.get(9)?,
        })
    }

    /// Every task grouped by day.
    pub fn get_all(&self) -> Result<BTreeMap<DayKey, Vec<Task>>> {
        let mut stmt = self.conn.prepare(&format!("{} ORDER BY rowid", SELECT_TASKS))?;
        let mut grouped: BTreeMap<DayKey, Vec<Task>> = BTreeMap::new();
        for task in stmt.query_map([], Self::from_row)? {
            let task = task?;
            grouped.entry(task.date).or_default().push(task);
        }
        Ok(grouped)
    }

    /// Tasks of one day; empty when nothing is scheduled.
    pub fn get_by_date(&self, date: DayKey) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("{} WHERE date = ?1 ORDER BY rowid", SELECT_TASKS))?;
        let tasks = stmt.query_map(params![date], Self::from_row)?.collect::<Result<Vec<_>, _>>()?;
        Ok(tasks)
    }

    pub fn get(&self, id: &str) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], Self::from_row)
            .optional()?;
        Ok(task)
    }

    /// Inserts the task or fully replaces the stored one with the same id.
    pub fn put(&self, task: &Task) -> Result<()> {
        self.conn.execute(
            UPSERT_TASK,
            params![
                task.id,
                task.title,
                task.description,
                task.duration,
                task.start_time,
                task.icon,
                task.date,
                task.color,
                task.priority,
                task.completed,
            ],
        )?;
        Ok(())
    }

    /// Removes a task. Returns whether a row was actually deleted; a missing
    /// id is not an error.
    pub fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.conn.execute(DELETE_TASK, params![id])? > 0)
    }

    /// Flips the completion flag and returns the updated task.
    pub fn toggle_completed(&self, id: &str) -> Result<Option<Task>> {
        let Some(mut task) = self.get(id)? else {
            return Ok(None);
        };
        task.completed = !task.completed;
        self.conn.execute(SET_COMPLETED, params![task.id, task.completed])?;
        Ok(Some(task))
    }
}
