#[cfg(test)]
mod tests {
    use chronos::db::storage::Storage;
    use chronos::libs::alerts::{AlertKind, AlertPreferences, AlertTracker};
    use chronos::libs::day::DayKey;
    use chronos::libs::settings::{NotificationSettings, Setting};
    use chronos::libs::task::{Task, TaskDraft};
    use chronos::libs::timeline::layout_day;
    use test_context::{test_context, TestContext};

    struct DayTestContext {
        storage: Storage,
        date: DayKey,
    }

    impl TestContext for DayTestContext {
        fn setup() -> Self {
            let storage = Storage::in_memory().unwrap();
            let date: DayKey = "2025-06-02".parse().unwrap();
            for (title, start, duration) in [
                ("Deep work", "09:00", 120),
                ("Coffee", "09:30", 15),
                ("Call", "10:00", 60),
                ("Lunch", "12:00", 60),
                ("Walk", "11:00", 60),
            ] {
                let task = TaskDraft::new(title, date, start, duration).into_task().unwrap();
                storage.tasks().put(&task).unwrap();
            }
            DayTestContext { storage, date }
        }
    }

    fn overlaps(a: &Task, b: &Task) -> bool {
        a.start_time.minutes() < b.end_minutes() && b.start_time.minutes() < a.end_minutes()
    }

    #[test_context(DayTestContext)]
    #[test]
    fn test_stored_day_lays_out_without_overlaps(ctx: &mut DayTestContext) {
        let tasks = ctx.storage.tasks().get_by_date(ctx.date).unwrap();
        let slots = layout_day(&tasks);

        assert_eq!(slots.len(), tasks.len());
        assert!(slots.iter().all(|s| s.total_columns == 2 && s.column < s.total_columns));

        for a in &slots {
            for b in &slots {
                if a.task.id != b.task.id && a.column == b.column {
                    assert!(!overlaps(a.task, b.task), "{} overlaps {}", a.task.title, b.task.title);
                }
            }
        }

        let lunch = slots.iter().find(|s| s.task.title == "Lunch").unwrap();
        assert_eq!(lunch.column, 0);
        assert!((lunch.width_percent() - 50.0).abs() < 1e-9);
    }

    #[test_context(DayTestContext)]
    #[test]
    fn test_other_days_are_empty(ctx: &mut DayTestContext) {
        let tasks = ctx.storage.tasks().get_by_date("2025-06-03".parse().unwrap()).unwrap();
        assert!(layout_day(&tasks).is_empty());
    }

    #[test_context(DayTestContext)]
    #[test]
    fn test_alerts_follow_stored_preferences(ctx: &mut DayTestContext) {
        let settings = ctx.storage.settings();
        settings
            .save(&Setting::NotificationSettings(NotificationSettings { advance: false, boundaries: true }))
            .unwrap();
        settings.save(&Setting::VibrationEnabled(false)).unwrap();

        let prefs = AlertPreferences {
            notifications: settings.notification_settings().unwrap(),
            vibration_enabled: settings.vibration_enabled().unwrap(),
        };
        let tasks = ctx.storage.tasks().get_by_date(ctx.date).unwrap();
        let mut tracker = AlertTracker::default();

        // 08:45 is fifteen minutes before "Deep work"; advance alerts are off.
        assert!(tracker.check(&tasks, 8 * 60 + 45, &prefs).is_empty());

        let at_nine = tracker.check(&tasks, 9 * 60, &prefs);
        assert_eq!(at_nine.len(), 1);
        assert_eq!(at_nine[0].kind, AlertKind::StartingNow);
        assert!(!at_nine[0].vibrate);

        // 11:00: "Deep work" completes, "Call" completes, "Walk" starts.
        let kinds: Vec<AlertKind> = tracker.check(&tasks, 11 * 60, &prefs).into_iter().map(|a| a.kind).collect();
        assert_eq!(kinds.iter().filter(|k| **k == AlertKind::Completed).count(), 2);
        assert_eq!(kinds.iter().filter(|k| **k == AlertKind::StartingNow).count(), 1);

        assert!(tracker.check(&tasks, 11 * 60, &prefs).is_empty());
    }
}
