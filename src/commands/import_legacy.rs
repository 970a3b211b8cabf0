use crate::{
    db::{legacy::JsonFileLegacyStore, storage::Storage},
    libs::messages::Message,
    msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportLegacyArgs {
    /// JSON dump of the legacy store (key -> raw value)
    file: PathBuf,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ImportLegacyArgs, storage: &mut Storage) -> Result<()> {
    let store = JsonFileLegacyStore::open(&args.file)
        .map_err(|e| msg_error_anyhow!(Message::LegacyFileReadFailed(format!("{}: {}", args.file.display(), e))))?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::LegacyImportConfirm.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::LegacyImportCancelled);
            return Ok(());
        }
    }

    let report = storage.import_legacy(&store)?;
    msg_success!(Message::LegacyImportCompleted(
        report.rows_written(),
        report.raw_fallbacks.len(),
        report.skipped_rows
    ));
    Ok(())
}
