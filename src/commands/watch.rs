use crate::{
    db::storage::Storage,
    libs::{
        alerts::{Alert, AlertPreferences, AlertWatcher},
        config::Config,
        day::DayKey,
        messages::Message,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// How often today's tasks are re-read from storage into the snapshot.
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Lines to print for one alert. A vibrate-only alert shows no text.
fn announcement(alert: &Alert) -> Vec<Message> {
    let mut lines = Vec::new();
    if alert.notify {
        lines.push(Message::AlertFired(alert.icon.clone(), alert.title.clone(), alert.kind.label().to_string()));
    }
    if alert.vibrate {
        lines.push(Message::AlertVibrate);
    }
    lines
}

fn announce(alert: Alert) {
    for line in announcement(&alert) {
        msg_print!(line);
    }
}

/// Watches today's tasks until interrupted.
///
/// The watcher only sees the in-memory snapshot; this loop owns storage and
/// refreshes the snapshot, which also picks up the next day after midnight.
pub async fn cmd(storage: &Storage) -> Result<()> {
    let alert_config = Config::read()?.alerts.unwrap_or_default();
    let settings = storage.settings();
    let prefs = AlertPreferences {
        notifications: settings.notification_settings()?,
        vibration_enabled: settings.vibration_enabled()?,
    };

    let today = storage.tasks().get_by_date(DayKey::today())?;
    if today.is_empty() {
        msg_info!(Message::WatcherNoTasksToday);
    }
    msg_info!(Message::WatcherStarted(today.len(), alert_config.poll_interval));

    let snapshot = Arc::new(RwLock::new(today));
    let watcher = AlertWatcher::new(
        Arc::clone(&snapshot),
        prefs,
        Duration::from_secs(alert_config.poll_interval.max(1)),
        alert_config.sentinel_bound,
    );
    let alerts = tokio::spawn(watcher.run(announce));

    let mut refresh = tokio::time::interval(REFRESH_INTERVAL);
    refresh.tick().await;

    let result = loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break Ok(()),
            _ = refresh.tick() => {
                match storage.tasks().get_by_date(DayKey::today()) {
                    Ok(tasks) => *snapshot.write() = tasks,
                    Err(e) => break Err(e),
                }
            }
        }
    };

    alerts.abort();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::alerts::AlertKind;

    fn alert(notify: bool, vibrate: bool) -> Alert {
        Alert {
            task_id: "t1".into(),
            title: "Call".into(),
            icon: "📞".into(),
            kind: AlertKind::StartingNow,
            notify,
            vibrate,
        }
    }

    #[test]
    fn vibrate_only_alert_prints_no_text() {
        assert_eq!(announcement(&alert(false, true)), vec![Message::AlertVibrate]);
    }

    #[test]
    fn notified_alert_prints_text_then_vibration() {
        let lines = announcement(&alert(true, true));
        assert_eq!(lines.len(), 2);
        assert!(matches!(lines[0], Message::AlertFired(..)));
        assert_eq!(lines[1], Message::AlertVibrate);

        assert_eq!(announcement(&alert(true, false)).len(), 1);
    }
}
