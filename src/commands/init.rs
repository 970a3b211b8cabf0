use crate::{
    libs::{config::Config, messages::Message},
    msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Print the current configuration instead of running the wizard
    #[arg(short, long)]
    show: bool,
}

/// Runs the setup wizard and saves the result.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.show {
        let mut config = Config::read()?;
        if let Some(icon_api) = config.icon_api.as_mut() {
            icon_api.api_key = "********".to_string();
        }
        msg_print!(serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
