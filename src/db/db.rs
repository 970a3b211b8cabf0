use super::legacy::{JsonFileLegacyStore, LegacyStore};
use super::migrations::{MigrationContext, MigrationManager};
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "chronos.db";

/// Dump of the previous flat key-value store. When present next to the
/// database on first start, it feeds the legacy import migration.
pub const LEGACY_FILE_NAME: &str = "legacy_store.json";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the user's data directory and applies pending
    /// migrations, importing the legacy dump if one is lying around.
    pub fn new() -> Result<Db> {
        Self::new_in(&DataStorage::new())
    }

    /// Like [`Db::new`], inside `storage`.
    pub fn new_in(storage: &DataStorage) -> Result<Db> {
        let db_path = storage.get_path(DB_FILE_NAME)?;
        let legacy_path = storage.get_path(LEGACY_FILE_NAME)?;

        if legacy_path.exists() {
            match JsonFileLegacyStore::open(&legacy_path) {
                Ok(legacy) => return Self::open_with_legacy(db_path, &legacy),
                Err(e) => {
                    msg_warning!(Message::LegacyFileReadFailed(format!("{}: {}", legacy_path.display(), e)));
                }
            }
        }

        Self::open(db_path)
    }

    /// Opens (or creates) the database at `path` and migrates it.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        Self::migrate(Connection::open(path)?, &MigrationContext::default())
    }

    /// Like [`Db::open`], with `legacy` available to the import migration.
    pub fn open_with_legacy(path: impl AsRef<Path>, legacy: &dyn LegacyStore) -> Result<Db> {
        Self::migrate(Connection::open(path)?, &MigrationContext { legacy: Some(legacy) })
    }

    /// Fresh, fully migrated in-memory database.
    pub fn in_memory() -> Result<Db> {
        Self::migrate(Connection::open_in_memory()?, &MigrationContext::default())
    }

    /// Raw connection to the default database file, without migrating it.
    /// Used by the migration status commands.
    pub fn new_without_migrations() -> Result<Connection> {
        let db_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Connection::open(db_path)?)
    }

    fn migrate(mut conn: Connection, ctx: &MigrationContext<'_>) -> Result<Db> {
        MigrationManager::new().run_migrations_with(&mut conn, ctx)?;
        msg_debug!("Database ready");
        Ok(Db { conn })
    }
}
