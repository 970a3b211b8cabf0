#[cfg(test)]
mod tests {
    use chronos::db::db::Db;
    use chronos::db::legacy::{
        JsonFileLegacyStore, MemoryLegacyStore, LEGACY_GOALS, LEGACY_JOURNAL, LEGACY_JOURNAL_AUDIOS, LEGACY_JOURNAL_IMAGES,
        LEGACY_MOODS, LEGACY_TASKS,
    };
    use chronos::db::storage::Storage;
    use chronos::libs::day::DayKey;
    use chronos::libs::journal::{GoalHorizon, MediaKind, Mood};
    use chronos::libs::settings::{CalendarMode, Setting, SettingKey};
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const TASKS_BLOB: &str = r#"{
        "2025-01-10": [
            {"id":"t1","title":"Gym","duration":60,"startTime":"07:00","icon":"🏋️","date":"2025-01-10","color":"rose","priority":"high","completed":true},
            {"id":"t2","title":"Review","description":"Q1 plan","duration":30,"startTime":"09:30","icon":"📝","date":"2025-01-10","color":"blue"}
        ],
        "2025-01-11": [
            {"id":"t3","title":"Brunch","duration":90,"startTime":"11:00","icon":"🥞","date":"2025-01-11","color":"amber","priority":"low","completed":false}
        ]
    }"#;

    struct LegacyTestContext {
        temp_dir: TempDir,
        storage: Storage,
    }

    impl TestContext for LegacyTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = Storage::open(temp_dir.path().join("chronos.db")).unwrap();
            LegacyTestContext { temp_dir, storage }
        }
    }

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn full_store() -> MemoryLegacyStore {
        MemoryLegacyStore::new()
            .with(LEGACY_TASKS, TASKS_BLOB)
            .with(LEGACY_MOODS, r#"{"2025-01-10":"happy","2025-01-11":"stressed"}"#)
            .with(LEGACY_JOURNAL, r#"{"2025-01-10":"Good start to the year."}"#)
            .with(LEGACY_JOURNAL_IMAGES, r#"{"2025-01-10":["data:image/png;base64,AAAA"]}"#)
            .with(LEGACY_JOURNAL_AUDIOS, r#"{"2025-01-11":["data:audio/webm;base64,BBBB","data:audio/webm;base64,CCCC"]}"#)
            .with(LEGACY_GOALS, r#"{"1week":"Sleep by 23:00","1year":"Learn Rust"}"#)
            .with("chronos_user_name", "Ada")
            .with("chronos_vibration_enabled", "false")
            .with("chronos_calendar_mode", r#""mood""#)
            .with("chronos_notif_settings", r#"{"advance":false,"boundaries":true}"#)
            .with("chronos_app_lock_pin", "0420")
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_import_migrates_every_collection(ctx: &mut LegacyTestContext) {
        let report = ctx.storage.import_legacy(&full_store()).unwrap();

        assert_eq!(report.tasks, 3);
        assert_eq!(report.moods, 2);
        assert_eq!(report.journal_entries, 1);
        assert_eq!(report.journal_images, 1);
        assert_eq!(report.journal_audios, 1);
        assert_eq!(report.goals, 2);
        assert_eq!(report.settings, 5);
        assert!(report.raw_fallbacks.is_empty());
        assert_eq!(report.skipped_rows, 0);

        let tasks = ctx.storage.tasks().get_by_date(day("2025-01-10")).unwrap();
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
        assert!(tasks[0].completed);
        assert_eq!(tasks[1].description.as_deref(), Some("Q1 plan"));

        assert_eq!(ctx.storage.moods().get(day("2025-01-11")).unwrap(), Some(Mood::Stressed));
        assert_eq!(
            ctx.storage.journal().get(day("2025-01-10")).unwrap().as_deref(),
            Some("Good start to the year.")
        );
        assert_eq!(ctx.storage.media(MediaKind::Audio).get(day("2025-01-11")).unwrap().len(), 2);
        assert_eq!(ctx.storage.goals().get(GoalHorizon::OneYear).unwrap(), "Learn Rust");
        assert_eq!(ctx.storage.goals().get(GoalHorizon::OneMonth).unwrap(), "");
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_import_keeps_loosely_typed_settings(ctx: &mut LegacyTestContext) {
        ctx.storage.import_legacy(&full_store()).unwrap();
        let settings = ctx.storage.settings();

        assert_eq!(settings.get(SettingKey::UserName).unwrap(), Some(Setting::UserName("Ada".into())));
        assert_eq!(settings.get(SettingKey::AppLockPin).unwrap(), Some(Setting::AppLockPin("0420".into())));
        assert_eq!(settings.get(SettingKey::CalendarMode).unwrap(), Some(Setting::CalendarMode(CalendarMode::Mood)));
        assert!(!settings.vibration_enabled().unwrap());
        assert!(!settings.notification_settings().unwrap().advance);
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_invalid_journal_is_kept_raw(ctx: &mut LegacyTestContext) {
        let store = MemoryLegacyStore::new()
            .with(LEGACY_JOURNAL, "{not json")
            .with(LEGACY_MOODS, r#"{"2025-01-10":"calm"}"#);

        let report = ctx.storage.import_legacy(&store).unwrap();

        assert_eq!(report.raw_fallbacks, vec![LEGACY_JOURNAL.to_string()]);
        assert_eq!(report.moods, 1);
        assert!(ctx.storage.journal().get_all().unwrap().is_empty());
        assert_eq!(ctx.storage.legacy_raw().get(LEGACY_JOURNAL).unwrap().as_deref(), Some("{not json"));
        assert_eq!(ctx.storage.moods().get(day("2025-01-10")).unwrap(), Some(Mood::Calm));
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_non_object_blob_is_kept_raw(ctx: &mut LegacyTestContext) {
        let store = MemoryLegacyStore::new().with(LEGACY_GOALS, r#"["not","a","map"]"#);

        let report = ctx.storage.import_legacy(&store).unwrap();

        assert_eq!(report.raw_fallbacks, vec![LEGACY_GOALS.to_string()]);
        assert_eq!(report.goals, 0);
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_malformed_rows_are_skipped(ctx: &mut LegacyTestContext) {
        let store = MemoryLegacyStore::new()
            .with(
                LEGACY_TASKS,
                r#"{"2025-01-10":[{"id":"ok","title":"Fine","duration":30,"startTime":"08:00","icon":"✅","date":"2025-01-10","color":"blue"},{"title":"No id"}]}"#,
            )
            .with(LEGACY_MOODS, r#"{"yesterday":"calm","2025-01-10":"ecstatic","2025-01-11":"sad"}"#)
            .with(LEGACY_GOALS, r#"{"10year":"Retire","1month":"Ship it"}"#);

        let report = ctx.storage.import_legacy(&store).unwrap();

        assert_eq!(report.tasks, 1);
        assert_eq!(report.moods, 1);
        assert_eq!(report.goals, 1);
        assert_eq!(report.skipped_rows, 4);
        assert!(ctx.storage.tasks().get("ok").unwrap().is_some());
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_empty_store_imports_nothing(ctx: &mut LegacyTestContext) {
        let store = MemoryLegacyStore::new().with(LEGACY_TASKS, "");

        let report = ctx.storage.import_legacy(&store).unwrap();

        assert_eq!(report.rows_written(), 0);
        assert!(report.raw_fallbacks.is_empty());
        assert!(ctx.storage.tasks().get_all().unwrap().is_empty());
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_import_twice_gives_same_contents(ctx: &mut LegacyTestContext) {
        let store = full_store();

        let first = ctx.storage.import_legacy(&store).unwrap();
        let tasks = ctx.storage.tasks().get_all().unwrap();
        let moods = ctx.storage.moods().get_all().unwrap();
        let settings = ctx.storage.settings().get_all().unwrap();

        let second = ctx.storage.import_legacy(&store).unwrap();

        assert_eq!(first, second);
        assert_eq!(ctx.storage.tasks().get_all().unwrap(), tasks);
        assert_eq!(ctx.storage.moods().get_all().unwrap(), moods);
        assert_eq!(ctx.storage.settings().get_all().unwrap(), settings);
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_reimport_leaves_unmentioned_rows(ctx: &mut LegacyTestContext) {
        ctx.storage.moods().save(day("2024-12-31"), Mood::Energetic).unwrap();

        ctx.storage.import_legacy(&full_store()).unwrap();

        assert_eq!(ctx.storage.moods().get(day("2024-12-31")).unwrap(), Some(Mood::Energetic));
        assert_eq!(ctx.storage.moods().get(day("2025-01-10")).unwrap(), Some(Mood::Happy));
    }

    #[test_context(LegacyTestContext)]
    #[test]
    fn test_json_file_store(ctx: &mut LegacyTestContext) {
        let path = ctx.temp_dir.path().join("legacy_store.json");
        let dump = json!({
            "chronos_moods": {"2025-01-10": "sad"},
            "chronos_user_name": "Grace",
            "chronos_vibration_enabled": false,
        });
        fs::write(&path, dump.to_string()).unwrap();

        let store = JsonFileLegacyStore::open(&path).unwrap();
        let report = ctx.storage.import_legacy(&store).unwrap();

        assert_eq!(report.moods, 1);
        assert_eq!(report.settings, 2);
        assert_eq!(ctx.storage.settings().get(SettingKey::UserName).unwrap(), Some(Setting::UserName("Grace".into())));
        assert!(!ctx.storage.settings().vibration_enabled().unwrap());
    }

    #[test]
    fn test_open_with_legacy_imports_on_first_start() {
        let temp_dir = tempfile::tempdir().unwrap();
        let db = Db::open_with_legacy(temp_dir.path().join("chronos.db"), &full_store()).unwrap();
        let storage = Storage::from_db(db);

        assert_eq!(storage.tasks().get_all().unwrap().values().map(Vec::len).sum::<usize>(), 3);
        assert_eq!(storage.goals().get(GoalHorizon::OneWeek).unwrap(), "Sleep by 23:00");
    }
}
