use super::ensure_editable;
use crate::{
    api::gemini::GeminiClient,
    db::storage::Storage,
    libs::{
        config::Config,
        day::DayKey,
        icon::suggest_icon_or_default,
        messages::Message,
        task::{Priority, TaskDraft},
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Schedule a new task
    Add(AddArgs),
    /// List a day's tasks by start time
    List {
        /// Day to show (YYYY-MM-DD), today by default
        #[arg(short, long)]
        date: Option<DayKey>,
    },
    /// Toggle a task's completion
    Done {
        id: String,
        /// Allow changing a task on a past day
        #[arg(long)]
        force: bool,
    },
    /// Delete a task; unknown ids are ignored
    Delete { id: String },
}

#[derive(Debug, Args)]
struct AddArgs {
    title: String,
    /// Start time, HH:MM
    #[arg(short, long)]
    start: String,
    /// Duration in minutes
    #[arg(short = 'm', long, default_value_t = 60)]
    duration: i64,
    /// Day (YYYY-MM-DD), today by default
    #[arg(short, long)]
    date: Option<DayKey>,
    #[arg(long)]
    description: Option<String>,
    /// Icon glyph; overrides --suggest-icon
    #[arg(short, long)]
    icon: Option<String>,
    /// Color tag
    #[arg(short, long)]
    color: Option<String>,
    #[arg(short, long, default_value = "medium")]
    priority: Priority,
    /// Ask the configured icon API for an icon
    #[arg(long)]
    suggest_icon: bool,
    /// Allow scheduling on a past day
    #[arg(long)]
    force: bool,
}

pub async fn cmd(args: TaskArgs, storage: &Storage) -> Result<()> {
    match args.command {
        TaskCommand::Add(add) => add_task(add, storage).await,
        TaskCommand::List { date } => {
            let date = date.unwrap_or_else(DayKey::today);
            let mut tasks = storage.tasks().get_by_date(date)?;
            if tasks.is_empty() {
                msg_info!(Message::TasksNotFoundForDate(date.to_string()));
                return Ok(());
            }
            tasks.sort_by_key(|task| task.start_time);
            msg_print!(Message::TasksHeader(date.to_string()), true);
            View::tasks(&tasks);
            Ok(())
        }
        TaskCommand::Done { id, force } => {
            let Some(task) = storage.tasks().get(&id)? else {
                return Err(msg_error_anyhow!(Message::TaskNotFound(id)));
            };
            ensure_editable(task.date, force)?;
            match storage.tasks().toggle_completed(&id)? {
                Some(task) if task.completed => {
                    msg_success!(Message::TaskCompleted(task.title));
                    Ok(())
                }
                Some(task) => {
                    msg_success!(Message::TaskReopened(task.title));
                    Ok(())
                }
                None => Err(msg_error_anyhow!(Message::TaskNotFound(id))),
            }
        }
        TaskCommand::Delete { id } => {
            if storage.tasks().delete(&id)? {
                msg_success!(Message::TaskDeleted(id));
            } else {
                msg_info!(Message::TaskNotFound(id));
            }
            Ok(())
        }
    }
}

async fn add_task(add: AddArgs, storage: &Storage) -> Result<()> {
    let date = add.date.unwrap_or_else(DayKey::today);
    ensure_editable(date, add.force)?;

    let mut draft = TaskDraft::new(&add.title, date, &add.start, add.duration);
    draft.description = add.description;
    draft.color = add.color;
    draft.priority = add.priority;
    draft.icon = add.icon;

    if draft.icon.is_none() && add.suggest_icon {
        if let Some(icon_api) = Config::read()?.icon_api {
            let icon = suggest_icon_or_default(&GeminiClient::new(&icon_api), &add.title).await;
            msg_info!(Message::IconSuggested(icon.clone()));
            draft.icon = Some(icon);
        }
    }

    let task = draft.into_task().map_err(|e| msg_error_anyhow!(Message::InvalidInput(e.to_string())))?;
    storage.tasks().put(&task)?;
    msg_success!(Message::TaskCreated(task.title));
    Ok(())
}
