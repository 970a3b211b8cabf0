//! Local persistence for chronos.
//!
//! An embedded SQLite database holds one table per collection: tasks (by id,
//! indexed by day), moods, journal entries, journal images and audio (by
//! day), goals and settings (by id). Schema changes and the one-time import
//! of the legacy flat key-value store are versioned migrations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chronos::db::storage::Storage;
//! use chronos::libs::day::DayKey;
//!
//! let storage = Storage::new()?;
//! let today = storage.tasks().get_by_date(DayKey::today())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup.
pub mod db;

/// Goals per horizon.
pub mod goals;

/// Journal text, images and audio.
pub mod journal;

/// Legacy store import and raw fallbacks.
pub mod legacy;

/// Versioned schema migrations.
pub mod migrations;

/// Daily moods.
pub mod moods;

/// Typed settings.
pub mod settings;

mod sql;

/// Persistence service handing out repositories.
pub mod storage;

/// Tasks by id and by day.
pub mod tasks;
