use super::db::Db;
use super::goals::Goals;
use super::journal::{JournalEntries, JournalMedia};
use super::legacy::{import_legacy, ImportReport, LegacyRaw, LegacyStore};
use super::moods::Moods;
use super::settings::Settings;
use super::tasks::Tasks;
use crate::libs::journal::MediaKind;
use anyhow::Result;
use std::path::Path;

/// The persistence service.
///
/// Built once at startup and handed to whatever needs storage. Repositories
/// borrow its connection, so they are cheap to create per call.
pub struct Storage {
    db: Db,
}

impl Storage {
    /// Storage in the user's data directory.
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn in_memory() -> Result<Self> {
        Ok(Self::from_db(Db::in_memory()?))
    }

    pub fn from_db(db: Db) -> Self {
        Storage { db }
    }

    pub fn tasks(&self) -> Tasks<'_> {
        Tasks::new(&self.db.conn)
    }

    pub fn moods(&self) -> Moods<'_> {
        Moods::new(&self.db.conn)
    }

    pub fn journal(&self) -> JournalEntries<'_> {
        JournalEntries::new(&self.db.conn)
    }

    pub fn media(&self, kind: MediaKind) -> JournalMedia<'_> {
        JournalMedia::new(&self.db.conn, kind)
    }

    pub fn goals(&self) -> Goals<'_> {
        Goals::new(&self.db.conn)
    }

    pub fn settings(&self) -> Settings<'_> {
        Settings::new(&self.db.conn)
    }

    pub fn legacy_raw(&self) -> LegacyRaw<'_> {
        LegacyRaw::new(&self.db.conn)
    }

    /// Imports a legacy store on demand, all or nothing.
    ///
    /// Matching rows are overwritten; rows the store does not mention are
    /// left alone.
    pub fn import_legacy(&mut self, store: &dyn LegacyStore) -> Result<ImportReport> {
        let tx = self.db.conn.transaction()?;
        let report = import_legacy(&tx, store)?;
        tx.commit()?;
        Ok(report)
    }
}
