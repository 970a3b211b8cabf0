//! Side-by-side column layout for one day's timeline.
//!
//! Tasks are sorted by start time and packed first-fit into columns: a task
//! joins the first column whose last task has ended by the time it starts,
//! otherwise it opens a new column. Every slot then records the number of
//! columns opened for the whole day, so all tasks on a day share the same
//! width (`100 / total_columns` percent) even when only some of them overlap.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chronos::libs::timeline::layout_day;
//!
//! for slot in layout_day(&tasks) {
//!     println!("{} -> column {} of {}", slot.task.title, slot.column, slot.total_columns);
//! }
//! ```

use super::task::Task;

/// Placement of one task on the day's timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelineSlot<'a> {
    pub task: &'a Task,
    /// Zero-based column index, always below `total_columns`.
    pub column: usize,
    /// Number of columns opened for the whole day.
    pub total_columns: usize,
}

impl TimelineSlot<'_> {
    /// Rendered width as a percentage of the day column.
    pub fn width_percent(&self) -> f64 {
        100.0 / self.total_columns as f64
    }

    /// Horizontal offset as a percentage of the day column.
    pub fn offset_percent(&self) -> f64 {
        self.column as f64 * self.width_percent()
    }
}

/// Lays out the tasks of a single day.
///
/// Returns slots column by column, each column in placement order. Tasks
/// sharing a start time keep their input order. Durations are taken as
/// given; start times are already validated by [`crate::libs::day::StartTime`].
pub fn layout_day(tasks: &[Task]) -> Vec<TimelineSlot<'_>> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by_key(|task| task.start_time.minutes());

    // Within a column, intervals never overlap.
    let mut columns: Vec<Vec<&Task>> = Vec::new();

    for task in sorted {
        let start = task.start_time.minutes();
        let free = columns
            .iter_mut()
            .find(|column| column.last().is_some_and(|last| last.end_minutes() <= start));

        match free {
            Some(column) => column.push(task),
            None => columns.push(vec![task]),
        }
    }

    let total_columns = columns.len();
    columns
        .into_iter()
        .enumerate()
        .flat_map(|(column, placed)| placed.into_iter().map(move |task| TimelineSlot { task, column, total_columns }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::day::DayKey;
    use crate::libs::task::TaskDraft;

    fn task(title: &str, start: &str, duration: i64) -> Task {
        let day: DayKey = "2025-05-20".parse().unwrap();
        TaskDraft::new(title, day, start, duration).into_task().unwrap()
    }

    fn column_of(slots: &[TimelineSlot<'_>], title: &str) -> usize {
        slots.iter().find(|s| s.task.title == title).map(|s| s.column).unwrap()
    }

    fn overlaps(a: &Task, b: &Task) -> bool {
        a.start_time.minutes() < b.end_minutes() && b.start_time.minutes() < a.end_minutes()
    }

    #[test]
    fn empty_day_has_no_slots() {
        assert!(layout_day(&[]).is_empty());
    }

    #[test]
    fn overlapping_tasks_get_separate_columns() {
        let tasks = vec![task("A", "09:00", 60), task("B", "09:30", 30), task("C", "10:00", 30)];
        let slots = layout_day(&tasks);

        assert_eq!(slots.len(), 3);
        assert_eq!(column_of(&slots, "A"), 0);
        assert_eq!(column_of(&slots, "B"), 1);
        assert_eq!(column_of(&slots, "C"), 0);
        assert!(slots.iter().all(|s| s.total_columns == 2));
    }

    #[test]
    fn back_to_back_tasks_share_a_column() {
        let tasks = vec![task("A", "08:00", 60), task("B", "09:00", 60), task("C", "10:00", 15)];
        let slots = layout_day(&tasks);

        assert!(slots.iter().all(|s| s.column == 0 && s.total_columns == 1));
        assert_eq!(slots[0].width_percent(), 100.0);
    }

    #[test]
    fn identical_start_times_fan_out_in_input_order() {
        let tasks = vec![task("first", "14:00", 30), task("second", "14:00", 30), task("third", "14:00", 30)];
        let slots = layout_day(&tasks);

        assert_eq!(column_of(&slots, "first"), 0);
        assert_eq!(column_of(&slots, "second"), 1);
        assert_eq!(column_of(&slots, "third"), 2);
    }

    #[test]
    fn width_is_based_on_the_whole_day() {
        // Two overlapping tasks in the morning, one lonely task at night.
        let tasks = vec![task("A", "09:00", 60), task("B", "09:15", 60), task("night", "22:00", 30)];
        let slots = layout_day(&tasks);

        let night = slots.iter().find(|s| s.task.title == "night").unwrap();
        assert_eq!(night.total_columns, 2);
        assert_eq!(night.width_percent(), 50.0);

        let b = slots.iter().find(|s| s.task.title == "B").unwrap();
        assert_eq!(b.offset_percent(), 50.0);
    }

    #[test]
    fn input_order_does_not_matter_for_placement() {
        let tasks = vec![task("C", "10:00", 30), task("B", "09:30", 30), task("A", "09:00", 60)];
        let slots = layout_day(&tasks);

        assert_eq!(column_of(&slots, "A"), 0);
        assert_eq!(column_of(&slots, "B"), 1);
        assert_eq!(column_of(&slots, "C"), 0);
    }

    #[test]
    fn slots_are_grouped_by_column() {
        let tasks = vec![task("A", "09:00", 60), task("B", "09:30", 30), task("C", "10:00", 30)];
        let titles: Vec<&str> = layout_day(&tasks).iter().map(|s| s.task.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "C", "B"]);
    }

    #[test]
    fn no_overlapping_pair_shares_a_column() {
        let tasks = vec![
            task("a", "06:00", 240),
            task("b", "07:00", 30),
            task("c", "07:15", 90),
            task("d", "07:30", 15),
            task("e", "08:00", 60),
            task("f", "08:45", 10),
            task("g", "10:00", 120),
            task("h", "10:00", 5),
            task("i", "11:30", 45),
            task("j", "23:30", 90),
        ];
        let slots = layout_day(&tasks);
        assert_eq!(slots.len(), tasks.len());

        for slot in &slots {
            assert!(slot.column < slot.total_columns);
        }
        for (i, x) in slots.iter().enumerate() {
            for y in slots.iter().skip(i + 1) {
                if overlaps(x.task, y.task) {
                    assert_ne!(x.column, y.column, "{} and {} overlap", x.task.title, y.task.title);
                }
            }
        }
    }
}
