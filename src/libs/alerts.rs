//! Schedule-based task alerts.
//!
//! A background watcher wakes up on a fixed interval, looks at today's tasks
//! held in memory and fires an alert when the current minute hits one of a
//! task's checkpoints:
//!
//! | Checkpoint     | Label                  | Kind     |
//! |----------------|------------------------|----------|
//! | start − 15 min | "Starts in 15 minutes" | advance  |
//! | start − 5 min  | "Starts in 5 minutes"  | advance  |
//! | end − 15 min   | "Ends in 15 minutes"   | advance  |
//! | end − 5 min    | "Ends in 5 minutes"    | advance  |
//! | start          | "Task starting now"    | boundary |
//! | end            | "Task completed"       | boundary |
//!
//! Each `(task id, label)` pair fires at most once while it is remembered.
//! The memory is wiped once it grows past a bound so it cannot grow forever.

use super::settings::NotificationSettings;
use super::task::Task;
use chrono::{Local, Timelike};
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

/// Default number of remembered alerts before the memory is cleared.
pub const DEFAULT_SENTINEL_BOUND: usize = 100;

/// Default interval between checks.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    StartsIn15,
    StartsIn5,
    EndsIn15,
    EndsIn5,
    StartingNow,
    Completed,
}

impl AlertKind {
    pub const ALL: [AlertKind; 6] = [
        AlertKind::StartsIn15,
        AlertKind::StartsIn5,
        AlertKind::EndsIn15,
        AlertKind::EndsIn5,
        AlertKind::StartingNow,
        AlertKind::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::StartsIn15 => "Starts in 15 minutes",
            AlertKind::StartsIn5 => "Starts in 5 minutes",
            AlertKind::EndsIn15 => "Ends in 15 minutes",
            AlertKind::EndsIn5 => "Ends in 5 minutes",
            AlertKind::StartingNow => "Task starting now",
            AlertKind::Completed => "Task completed",
        }
    }

    /// Boundary alerts mark the actual start or end of a task.
    pub fn is_boundary(&self) -> bool {
        matches!(self, AlertKind::StartingNow | AlertKind::Completed)
    }

    /// Minute of the day this alert is due for `task`.
    pub fn due_minute(&self, task: &Task) -> i64 {
        let start = task.start_time.minutes();
        let end = task.end_minutes();
        match self {
            AlertKind::StartsIn15 => start - 15,
            AlertKind::StartsIn5 => start - 5,
            AlertKind::EndsIn15 => end - 15,
            AlertKind::EndsIn5 => end - 5,
            AlertKind::StartingNow => start,
            AlertKind::Completed => end,
        }
    }
}

/// An alert ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub task_id: String,
    pub title: String,
    pub icon: String,
    pub kind: AlertKind,
    /// Show the text; false when only the vibration is wanted.
    pub notify: bool,
    /// Boundary alert with vibration enabled.
    pub vibrate: bool,
}

/// Delivery preferences applied to every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertPreferences {
    pub notifications: NotificationSettings,
    pub vibration_enabled: bool,
}

impl Default for AlertPreferences {
    fn default() -> Self {
        AlertPreferences { notifications: NotificationSettings::default(), vibration_enabled: true }
    }
}

/// Remembers which alerts already fired.
#[derive(Debug)]
pub struct AlertTracker {
    fired: HashSet<String>,
    bound: usize,
}

impl Default for AlertTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL_BOUND)
    }
}

impl AlertTracker {
    pub fn new(bound: usize) -> Self {
        AlertTracker { fired: HashSet::new(), bound }
    }

    /// Number of remembered alerts.
    pub fn remembered(&self) -> usize {
        self.fired.len()
    }

    /// Runs one pass over today's tasks at `now_minutes` past midnight.
    ///
    /// A due checkpoint is remembered even when the preferences suppress it,
    /// so toggling preferences mid-minute does not replay it.
    pub fn check(&mut self, tasks: &[Task], now_minutes: i64, prefs: &AlertPreferences) -> Vec<Alert> {
        let mut alerts = Vec::new();

        for task in tasks {
            for kind in AlertKind::ALL {
                if kind.due_minute(task) != now_minutes {
                    continue;
                }
                let key = format!("{}-{}", task.id, kind.label());
                if !self.fired.insert(key) {
                    continue;
                }

                let wanted = if kind.is_boundary() { prefs.notifications.boundaries } else { prefs.notifications.advance };
                let vibrate = kind.is_boundary() && prefs.vibration_enabled;
                if wanted || vibrate {
                    alerts.push(Alert {
                        task_id: task.id.clone(),
                        title: task.title.clone(),
                        icon: task.icon.clone(),
                        kind,
                        notify: wanted,
                        vibrate,
                    });
                }
            }
        }

        if self.fired.len() > self.bound {
            self.fired.clear();
        }

        alerts
    }
}

/// Periodic alert loop over an in-memory task snapshot.
///
/// The watcher never touches storage; whoever owns the snapshot replaces its
/// contents when tasks change.
pub struct AlertWatcher {
    tasks: Arc<RwLock<Vec<Task>>>,
    prefs: AlertPreferences,
    interval: Duration,
    tracker: AlertTracker,
}

impl AlertWatcher {
    pub fn new(tasks: Arc<RwLock<Vec<Task>>>, prefs: AlertPreferences, interval: Duration, bound: usize) -> Self {
        AlertWatcher { tasks, prefs, interval, tracker: AlertTracker::new(bound) }
    }

    /// Runs one check against the local clock.
    pub fn tick(&mut self) -> Vec<Alert> {
        let now = Local::now();
        let now_minutes = i64::from(now.hour() * 60 + now.minute());
        let snapshot = self.tasks.read().clone();
        self.tracker.check(&snapshot, now_minutes, &self.prefs)
    }

    /// Checks forever, handing each alert to `on_alert`.
    pub async fn run<F>(mut self, mut on_alert: F)
    where
        F: FnMut(Alert),
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            for alert in self.tick() {
                on_alert(alert);
            }
        }
    }
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

    fn minutes(hm: &str) -> i64 {
        hm.parse::<crate::libs::day::StartTime>().unwrap().minutes()
    }

    #[test]
    fn fires_each_checkpoint_once() {
        let tasks = vec![task("Write", "10:00", 60)];
        let prefs = AlertPreferences::default();
        let mut tracker = AlertTracker::default();

        let alerts = tracker.check(&tasks, minutes("09:45"), &prefs);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].kind, AlertKind::StartsIn15);
        assert!(!alerts[0].vibrate);

        // Same minute checked again (30 s interval) stays quiet.
        assert!(tracker.check(&tasks, minutes("09:45"), &prefs).is_empty());

        let alerts = tracker.check(&tasks, minutes("10:00"), &prefs);
        assert_eq!(alerts[0].kind, AlertKind::StartingNow);
        assert!(alerts[0].vibrate);

        let alerts = tracker.check(&tasks, minutes("11:00"), &prefs);
        assert_eq!(alerts[0].kind, AlertKind::Completed);
    }

    #[test]
    fn quiet_between_checkpoints() {
        let tasks = vec![task("Write", "10:00", 60)];
        let mut tracker = AlertTracker::default();
        assert!(tracker.check(&tasks, minutes("09:50"), &AlertPreferences::default()).is_empty());
        assert_eq!(tracker.remembered(), 0);
    }

    #[test]
    fn overlapping_checkpoints_fire_together() {
        // "Ends in 15 minutes" of the first and "Starts in 15 minutes" of the next coincide.
        let tasks = vec![task("Short", "10:00", 20), task("Next", "10:20", 30)];
        let alerts = AlertTracker::default().check(&tasks, minutes("10:05"), &AlertPreferences::default());
        let kinds: Vec<AlertKind> = alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AlertKind::EndsIn15, AlertKind::StartsIn15]);
    }

    #[test]
    fn preferences_filter_delivery_but_still_mark_fired() {
        let tasks = vec![task("Call", "12:00", 30)];
        let prefs = AlertPreferences {
            notifications: NotificationSettings { advance: false, boundaries: true },
            vibration_enabled: false,
        };
        let mut tracker = AlertTracker::default();

        assert!(tracker.check(&tasks, minutes("11:45"), &prefs).is_empty());
        assert_eq!(tracker.remembered(), 1);

        let alerts = tracker.check(&tasks, minutes("12:00"), &prefs);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].notify);
        assert!(!alerts[0].vibrate);
    }

    #[test]
    fn vibration_alone_vibrates_without_text() {
        let tasks = vec![task("Call", "12:00", 30)];
        let prefs = AlertPreferences {
            notifications: NotificationSettings { advance: false, boundaries: false },
            vibration_enabled: true,
        };
        let alerts = AlertTracker::default().check(&tasks, minutes("12:00"), &prefs);
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].vibrate);
        assert!(!alerts[0].notify);
    }

    #[test]
    fn nothing_wanted_delivers_nothing() {
        let tasks = vec![task("Call", "12:00", 30)];
        let prefs = AlertPreferences {
            notifications: NotificationSettings { advance: false, boundaries: false },
            vibration_enabled: false,
        };
        let mut tracker = AlertTracker::default();
        assert!(tracker.check(&tasks, minutes("12:00"), &prefs).is_empty());
        assert!(tracker.check(&tasks, minutes("12:30"), &prefs).is_empty());
    }

    #[test]
    fn memory_is_cleared_past_the_bound() {
        let tasks: Vec<Task> = (0..4).map(|i| task(&format!("t{}", i), "08:00", 30)).collect();
        let mut tracker = AlertTracker::new(3);

        let alerts = tracker.check(&tasks, minutes("08:00"), &AlertPreferences::default());
        assert_eq!(alerts.len(), 4);
        assert_eq!(tracker.remembered(), 0);

        // Forgotten, so the same minute fires again.
        assert_eq!(tracker.check(&tasks, minutes("08:00"), &AlertPreferences::default()).len(), 4);
    }
}
