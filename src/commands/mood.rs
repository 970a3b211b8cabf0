use super::ensure_editable;
use crate::{
    db::storage::Storage,
    libs::{day::DayKey, journal::Mood, messages::Message, view::View},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MoodArgs {
    #[command(subcommand)]
    command: MoodCommand,
}

#[derive(Debug, Subcommand)]
enum MoodCommand {
    /// Record the mood of a day: stressed, sad, none, calm, happy or energetic
    Set {
        mood: Mood,
        #[arg(short, long)]
        date: Option<DayKey>,
        /// Allow changing a past day
        #[arg(long)]
        force: bool,
    },
    /// Show the mood of a day
    Show {
        #[arg(short, long)]
        date: Option<DayKey>,
    },
    /// List every recorded mood
    List,
}

pub fn cmd(args: MoodArgs, storage: &Storage) -> Result<()> {
    match args.command {
        MoodCommand::Set { mood, date, force } => {
            let date = date.unwrap_or_else(DayKey::today);
            ensure_editable(date, force)?;
            storage.moods().save(date, mood)?;
            msg_success!(Message::MoodSaved(date.to_string(), mood.label().to_string()));
        }
        MoodCommand::Show { date } => {
            let date = date.unwrap_or_else(DayKey::today);
            let mood = storage.moods().get(date)?.unwrap_or_default();
            msg_print!(Message::MoodForDate(date.to_string(), mood.label().to_string()));
        }
        MoodCommand::List => {
            let moods = storage.moods().get_all()?;
            if moods.is_empty() {
                msg_info!(Message::NoMoodsRecorded);
            } else {
                View::moods(&moods);
            }
        }
    }
    Ok(())
}
