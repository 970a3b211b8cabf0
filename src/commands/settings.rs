use crate::{
    db::storage::Storage,
    libs::{
        messages::Message,
        settings::{Setting, SettingKey},
        view::View,
    },
    msg_error_anyhow, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Show every setting with its effective value
    Show,
    /// Change a setting. Structured settings take JSON
    Set { key: String, value: String },
}

pub fn cmd(args: SettingsArgs, storage: &Storage) -> Result<()> {
    let settings = storage.settings();

    match args.command {
        SettingsCommand::Show => {
            let mut rows = Vec::new();
            for key in SettingKey::ALL {
                let value = match settings.get_or_default(key)? {
                    Some(Setting::AppLockPin(_)) => "****".to_string(),
                    Some(setting) => setting.to_value()?.to_string(),
                    None => "-".to_string(),
                };
                rows.push((key.to_string(), value));
            }
            View::settings(&rows);
        }
        SettingsCommand::Set { key, value } => {
            let key: SettingKey = key.parse().map_err(|_| msg_error_anyhow!(Message::SettingUnknownKey(key.clone())))?;
            let setting = Setting::parse(key, &value).map_err(|e| msg_error_anyhow!(Message::SettingInvalid(key.to_string(), e.to_string())))?;
            settings.save(&setting)?;
            msg_success!(Message::SettingSaved(key.to_string()));
        }
    }
    Ok(())
}
