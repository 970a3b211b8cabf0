//! Core library modules for chronos.
//!
//! Domain types (days, tasks, moods, goals, settings), the timeline layout
//! engine, the alert checker and the ambient pieces: configuration, data
//! directory, messages and table views.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chronos::libs::day::DayKey;
//! use chronos::libs::task::TaskDraft;
//! use chronos::libs::timeline::layout_day;
//!
//! let task = TaskDraft::new("Standup", DayKey::today(), "09:30", 15).into_task()?;
//! let slots = layout_day(std::slice::from_ref(&task));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod alerts;
pub mod config;
pub mod data_storage;
pub mod day;
pub mod error;
pub mod icon;
pub mod journal;
pub mod media;
pub mod messages;
pub mod settings;
pub mod task;
pub mod timeline;
pub mod view;
