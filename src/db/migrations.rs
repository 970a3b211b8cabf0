//! Versioned schema migrations.
//!
//! Every migration has a version number and a name. Applied versions are
//! recorded in the `migrations` table, and all pending migrations run in
//! one transaction at startup, so a failed step leaves the database as it
//! was.
//!
//! ## Registered migrations
//!
//! 1. `create_collections`: the entity tables and their indexes
//! 2. `import_legacy_flat_store`: one-time import of the old flat key-value
//!    store. Without a legacy source it is recorded as applied and does
//!    nothing, so it never runs again either way.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chronos::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("chronos.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::legacy::{import_legacy, LegacyStore};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// Version of the one-time legacy store import.
pub const LEGACY_IMPORT_VERSION: u32 = 2;

/// Inputs a migration may need beyond the transaction itself.
#[derive(Default, Clone, Copy)]
pub struct MigrationContext<'a> {
    /// Source for the legacy import step.
    pub legacy: Option<&'a dyn LegacyStore>,
}

#[derive(Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction, &MigrationContext<'_>) -> Result<()>,
}

pub struct MigrationManager {
    /// Sorted by version.
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_collections", |tx, _| {
            tx.execute_batch(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id TEXT NOT NULL PRIMARY KEY,
                    date TEXT NOT NULL,
                    title TEXT NOT NULL,
                    description TEXT,
                    duration INTEGER NOT NULL,
                    start_time TEXT NOT NULL,
                    icon TEXT NOT NULL,
                    color TEXT NOT NULL,
                    priority TEXT NOT NULL DEFAULT 'medium',
                    completed BOOLEAN NOT NULL DEFAULT FALSE
                );
                CREATE INDEX IF NOT EXISTS idx_tasks_date ON tasks(date);

                CREATE TABLE IF NOT EXISTS moods (
                    date TEXT NOT NULL PRIMARY KEY,
                    mood_id TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS journal_entries (
                    date TEXT NOT NULL PRIMARY KEY,
                    content TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS journal_images (
                    date TEXT NOT NULL PRIMARY KEY,
                    data TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS journal_audios (
                    date TEXT NOT NULL PRIMARY KEY,
                    data TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS goals (
                    id TEXT NOT NULL PRIMARY KEY,
                    content TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS settings (
                    id TEXT NOT NULL PRIMARY KEY,
                    value TEXT NOT NULL
                );

                CREATE TABLE IF NOT EXISTS legacy_raw (
                    key TEXT NOT NULL PRIMARY KEY,
                    content TEXT NOT NULL
                );",
            )?;
            Ok(())
        });

        self.add_migration(LEGACY_IMPORT_VERSION, "import_legacy_flat_store", |tx, ctx| {
            match ctx.legacy {
                Some(store) => {
                    import_legacy(tx, store)?;
                }
                None => msg_debug!(Message::LegacyImportSkippedNoSource),
            }
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction, &MigrationContext<'_>) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies pending migrations without a legacy source.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        self.run_migrations_with(conn, &MigrationContext::default())
    }

    /// Applies pending migrations in one transaction.
    pub fn run_migrations_with(&self, conn: &mut Connection, ctx: &MigrationContext<'_>) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx, ctx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, 0 for a fresh database.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        if !has_migrations_table(conn)? {
            return Ok(0);
        }

        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
        Ok(version.unwrap_or(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        if !has_migrations_table(conn)? {
            return Ok(false);
        }
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;
        Ok(count > 0)
    }

    /// `(version, name, applied_at)` for every applied migration.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        if !has_migrations_table(conn)? {
            return Ok(Vec::new());
        }

        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Forgets migrations above `target_version` (debug builds only).
    ///
    /// Schema changes are not reversed; the forgotten migrations simply run
    /// again on next start.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));
        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;
        msg_success!(Message::RollbackCompleted(target_version));

        Ok(())
    }
}

fn has_migrations_table(conn: &Connection) -> Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type = 'table' AND name = 'migrations'",
        [],
        |row| row.get(0),
    )?;
    Ok(exists)
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
