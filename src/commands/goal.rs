use crate::{
    db::storage::Storage,
    libs::{journal::GoalHorizon, messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    command: GoalCommand,
}

#[derive(Debug, Subcommand)]
enum GoalCommand {
    /// Set the goal for a horizon: 1week, 1month, 6month or 1year
    Set {
        horizon: GoalHorizon,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List all goals
    List,
}

pub fn cmd(args: GoalArgs, storage: &Storage) -> Result<()> {
    match args.command {
        GoalCommand::Set { horizon, text } => {
            storage.goals().save(horizon, &text.join(" "))?;
            msg_success!(Message::GoalSaved(horizon.label().to_string()));
        }
        GoalCommand::List => View::goals(&storage.goals().get_all()?),
    }
    Ok(())
}
