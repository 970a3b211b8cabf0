use crate::{
    db::storage::Storage,
    libs::{day::DayKey, messages::Message, timeline::layout_day, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct TimelineArgs {
    /// Day to lay out (YYYY-MM-DD), today by default
    #[arg(short, long)]
    date: Option<DayKey>,
}

pub fn cmd(args: TimelineArgs, storage: &Storage) -> Result<()> {
    let date = args.date.unwrap_or_else(DayKey::today);
    let tasks = storage.tasks().get_by_date(date)?;

    let slots = layout_day(&tasks);
    if slots.is_empty() {
        msg_info!(Message::TasksNotFoundForDate(date.to_string()));
        return Ok(());
    }

    msg_print!(Message::TimelineHeader(date.to_string()), true);
    View::timeline(&slots);
    Ok(())
}
