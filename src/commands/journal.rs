use super::ensure_editable;
use crate::{
    db::storage::Storage,
    libs::{day::DayKey, messages::Message},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct JournalArgs {
    #[command(subcommand)]
    command: JournalCommand,
}

#[derive(Debug, Subcommand)]
enum JournalCommand {
    /// Replace a day's journal entry
    Write {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(short, long)]
        date: Option<DayKey>,
        /// Allow changing a past day
        #[arg(long)]
        force: bool,
    },
    /// Print a day's journal entry
    Show {
        #[arg(short, long)]
        date: Option<DayKey>,
    },
}

pub fn cmd(args: JournalArgs, storage: &Storage) -> Result<()> {
    match args.command {
        JournalCommand::Write { text, date, force } => {
            let date = date.unwrap_or_else(DayKey::today);
            ensure_editable(date, force)?;
            storage.journal().save(date, &text.join(" "))?;
            msg_success!(Message::JournalSaved(date.to_string()));
        }
        JournalCommand::Show { date } => {
            let date = date.unwrap_or_else(DayKey::today);
            match storage.journal().get(date)? {
                Some(content) if !content.is_empty() => msg_print!(content),
                _ => msg_info!(Message::JournalEmpty(date.to_string())),
            }
        }
    }
    Ok(())
}
