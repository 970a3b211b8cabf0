use super::ensure_editable;
use crate::{
    db::storage::Storage,
    libs::{day::DayKey, journal::MediaKind, media::read_data_url, messages::Message, view::View},
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MediaArgs {
    /// image or audio
    #[arg(short, long, global = true, default_value = "image")]
    kind: MediaKind,
    #[arg(short, long, global = true)]
    date: Option<DayKey>,
    /// Allow changing a past day
    #[arg(long, global = true)]
    force: bool,
    #[command(subcommand)]
    command: MediaCommand,
}

#[derive(Debug, Subcommand)]
enum MediaCommand {
    /// Attach a file to the day
    Add { file: PathBuf },
    /// List the day's attachments
    List,
    /// Remove the attachment at an index
    Remove { index: usize },
}

pub fn cmd(args: MediaArgs, storage: &Storage) -> Result<()> {
    let date = args.date.unwrap_or_else(DayKey::today);
    let media = storage.media(args.kind);

    match args.command {
        MediaCommand::Add { file } => {
            ensure_editable(date, args.force)?;
            let item = read_data_url(args.kind, &file)
                .map_err(|e| msg_error_anyhow!(Message::MediaFileReadFailed(format!("{}: {}", file.display(), e))))?;
            let count = media.append(date, item)?;
            msg_success!(Message::MediaAdded(date.to_string(), count));
        }
        MediaCommand::List => {
            let items = media.get(date)?;
            if items.is_empty() {
                msg_info!(Message::MediaNotFoundForDate(date.to_string()));
            } else {
                View::media(&items);
            }
        }
        MediaCommand::Remove { index } => {
            ensure_editable(date, args.force)?;
            let len = media.get(date)?.len();
            match media.remove(date, index)? {
                Some(_) => msg_success!(Message::MediaRemoved(date.to_string(), index)),
                None => return Err(msg_error_anyhow!(Message::MediaIndexOutOfRange(index, len))),
            }
        }
    }
    Ok(())
}
