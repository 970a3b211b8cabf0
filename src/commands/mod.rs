//! Command-line interface for chronos.
//!
//! Commands that touch stored data share one [`Storage`] built here, so the
//! database is opened and migrated once per invocation.

pub mod goal;
pub mod import_legacy;
pub mod init;
pub mod journal;
pub mod media;
pub mod migrations;
pub mod mood;
pub mod settings;
pub mod task;
pub mod timeline;
pub mod watch;

use crate::db::storage::Storage;
use crate::libs::{day::DayKey, messages::Message};
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Schedule, list, complete and delete tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Show a day's timeline with overlapping tasks side by side")]
    Timeline(timeline::TimelineArgs),
    #[command(about = "Record or show daily moods", arg_required_else_help = true)]
    Mood(mood::MoodArgs),
    #[command(about = "Write or read the journal", arg_required_else_help = true)]
    Journal(journal::JournalArgs),
    #[command(about = "Manage journal images and audio clips", arg_required_else_help = true)]
    Media(media::MediaArgs),
    #[command(about = "Set or list goals", arg_required_else_help = true)]
    Goal(goal::GoalArgs),
    #[command(about = "Show or change settings", arg_required_else_help = true)]
    Settings(settings::SettingsArgs),
    #[command(about = "Import a legacy flat-key store dump (overwrites matching data)")]
    ImportLegacy(import_legacy::ImportLegacyArgs),
    #[command(about = "Database migration status and history", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
    #[command(about = "Watch today's tasks and print alerts")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
            command => {
                let mut storage = Storage::new()?;
                match command {
                    Commands::Task(args) => task::cmd(args, &storage).await,
                    Commands::Timeline(args) => timeline::cmd(args, &storage),
                    Commands::Mood(args) => mood::cmd(args, &storage),
                    Commands::Journal(args) => journal::cmd(args, &storage),
                    Commands::Media(args) => media::cmd(args, &storage),
                    Commands::Goal(args) => goal::cmd(args, &storage),
                    Commands::Settings(args) => settings::cmd(args, &storage),
                    Commands::ImportLegacy(args) => import_legacy::cmd(args, &mut storage),
                    Commands::Watch => watch::cmd(&storage).await,
                    Commands::Init(_) | Commands::Migrations(_) => Ok(()),
                }
            }
        }
    }
}

/// Refuses changes to a past day unless `force` is set.
pub(crate) fn ensure_editable(date: DayKey, force: bool) -> Result<()> {
    if date.is_past() && !force {
        msg_bail_anyhow!(Message::PastDayReadOnly(date.to_string()));
    }
    Ok(())
}
