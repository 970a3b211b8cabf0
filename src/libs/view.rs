use super::day::DayKey;
use super::journal::{GoalHorizon, Mood};
use super::task::Task;
use super::timeline::TimelineSlot;
use prettytable::{row, Table};
use std::collections::BTreeMap;

/// Width of the timeline lane bar in characters.
const LANE_WIDTH: usize = 24;

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "MIN", "", "TITLE", "PRIORITY", "DONE"]);
        for task in tasks {
            let done = if task.completed { "✔" } else { "" };
            table.add_row(row![
                task.id,
                task.start_time,
                task.duration,
                task.icon,
                task.title,
                task.priority,
                done
            ]);
        }
        table.printstd();
    }

    /// Timeline slots with a lane bar showing column and width.
    pub fn timeline(slots: &[TimelineSlot<'_>]) {
        let mut sorted: Vec<&TimelineSlot<'_>> = slots.iter().collect();
        sorted.sort_by_key(|slot| (slot.task.start_time, slot.column));

        let mut table = Table::new();
        table.add_row(row!["START", "END", "LANE", "", "TITLE", "WIDTH %", "OFFSET %"]);
        for slot in sorted {
            let end = slot.task.end_minutes();
            table.add_row(row![
                slot.task.start_time,
                format!("{:02}:{:02}", end / 60, end % 60),
                lane(slot),
                slot.task.icon,
                slot.task.title,
                format!("{:.1}", slot.width_percent()),
                format!("{:.1}", slot.offset_percent())
            ]);
        }
        table.printstd();
    }

    pub fn moods(moods: &BTreeMap<DayKey, Mood>) {
        let mut table = Table::new();
        table.add_row(row!["DATE", "MOOD"]);
        for (date, mood) in moods {
            table.add_row(row![date, mood]);
        }
        table.printstd();
    }

    pub fn goals(goals: &BTreeMap<GoalHorizon, String>) {
        let mut table = Table::new();
        table.add_row(row!["HORIZON", "GOAL"]);
        for (horizon, content) in goals {
            table.add_row(row![horizon.label(), content]);
        }
        table.printstd();
    }

    pub fn settings(settings: &[(String, String)]) {
        let mut table = Table::new();
        table.add_row(row!["SETTING", "VALUE"]);
        for (key, value) in settings {
            table.add_row(row![key, value]);
        }
        table.printstd();
    }

    /// Attachments are shown by index and a short preview.
    pub fn media(items: &[String]) {
        let mut table = Table::new();
        table.add_row(row!["#", "SIZE", "PREVIEW"]);
        for (index, item) in items.iter().enumerate() {
            table.add_row(row![index, item.len(), preview(item)]);
        }
        table.printstd();
    }
}

fn lane(slot: &TimelineSlot<'_>) -> String {
    let cell = (LANE_WIDTH / slot.total_columns).max(1);
    let before = cell * slot.column;
    let after = LANE_WIDTH.saturating_sub(before + cell);
    format!("{}{}{}", "·".repeat(before), "█".repeat(cell), "·".repeat(after))
}

fn preview(item: &str) -> String {
    let head: String = item.chars().take(32).collect();
    if head.len() < item.len() {
        format!("{}…", head)
    } else {
        head
    }
}
