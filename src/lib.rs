//! # Chronos
//!
//! A command-line calendar and journal: schedule tasks on a daily timeline,
//! record daily moods, keep a journal with image and audio attachments and
//! track goals.
//!
//! ## Features
//!
//! - **Timeline Layout**: overlapping tasks are packed side by side in columns
//! - **Local Storage**: embedded SQLite with versioned migrations
//! - **Legacy Import**: one-time, repeatable import of the old flat key-value store
//! - **Alerts**: advance and boundary alerts for today's tasks
//! - **Icon Suggestion**: optional Gemini-backed task icons with a fixed fallback
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chronos::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
