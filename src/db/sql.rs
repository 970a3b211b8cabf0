//! SQLite conversions for the domain value types.
//!
//! All of them are stored as their canonical text form, so rows stay
//! readable with the `sqlite3` shell.

use crate::libs::day::{DayKey, StartTime};
use crate::libs::journal::{GoalHorizon, Mood};
use crate::libs::task::Priority;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::str::FromStr;

fn parse_text<T>(value: ValueRef<'_>) -> FromSqlResult<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.as_str()?.parse().map_err(|e| FromSqlError::Other(Box::new(e)))
}

macro_rules! text_column {
    ($ty:ty, $to_text:expr) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                let to_text: fn(&$ty) -> String = $to_text;
                Ok(ToSqlOutput::from(to_text(self)))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                parse_text(value)
            }
        }
    };
}

text_column!(DayKey, |day| day.to_string());
text_column!(StartTime, |time| time.to_string());
text_column!(Priority, |priority| priority.as_str().to_string());
text_column!(Mood, |mood| mood.id().to_string());
text_column!(GoalHorizon, |horizon| horizon.id().to_string());

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn values_survive_a_round_trip_through_sqlite() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t (day TEXT, start TEXT, priority TEXT, mood TEXT)", []).unwrap();

        let day: DayKey = "2025-01-31".parse().unwrap();
        let start: StartTime = "7:05".parse().unwrap();
        conn.execute(
            "INSERT INTO t VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![day, start, Priority::High, Mood::Calm],
        )
        .unwrap();

        let raw: (String, String) = conn.query_row("SELECT day, start FROM t", [], |row| Ok((row.get(0)?, row.get(1)?))).unwrap();
        assert_eq!(raw, ("2025-01-31".to_string(), "07:05".to_string()));

        let typed: (DayKey, StartTime, Priority, Mood) = conn
            .query_row("SELECT day, start, priority, mood FROM t", [], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .unwrap();
        assert_eq!(typed, (day, start, Priority::High, Mood::Calm));
    }

    #[test]
    fn garbage_text_is_a_conversion_error() {
        let conn = Connection::open_in_memory().unwrap();
        let result: rusqlite::Result<Mood> = conn.query_row("SELECT 'grumpy'", [], |row| row.get(0));
        assert!(result.is_err());
    }
}
