//! Typed application settings.
//!
//! Settings are stored as `id -> JSON value` rows. Instead of handing out
//! untyped JSON, every known id maps to a [`SettingKey`] and every value to
//! the matching [`Setting`] variant.

use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_USER_NAME: &str = "Jordan N.";
pub const DEFAULT_PROFILE_IMAGE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=Jordan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    UserName,
    ProfileImage,
    NotificationSettings,
    VibrationEnabled,
    ThemeConfig,
    CalendarMode,
    AppLockPin,
}

impl SettingKey {
    pub const ALL: [SettingKey; 7] = [
        SettingKey::UserName,
        SettingKey::ProfileImage,
        SettingKey::NotificationSettings,
        SettingKey::VibrationEnabled,
        SettingKey::ThemeConfig,
        SettingKey::CalendarMode,
        SettingKey::AppLockPin,
    ];

    /// Row id in the settings collection.
    pub fn id(&self) -> &'static str {
        match self {
            SettingKey::UserName => "user_name",
            SettingKey::ProfileImage => "profile_image",
            SettingKey::NotificationSettings => "notif_settings",
            SettingKey::VibrationEnabled => "vibration_enabled",
            SettingKey::ThemeConfig => "theme_config",
            SettingKey::CalendarMode => "calendar_mode",
            SettingKey::AppLockPin => "app_lock_pin",
        }
    }

    /// Value used when nothing is stored. The lock PIN has none.
    pub fn default_setting(&self) -> Option<Setting> {
        match self {
            SettingKey::UserName => Some(Setting::UserName(DEFAULT_USER_NAME.to_string())),
            SettingKey::ProfileImage => Some(Setting::ProfileImage(DEFAULT_PROFILE_IMAGE.to_string())),
            SettingKey::NotificationSettings => Some(Setting::NotificationSettings(NotificationSettings::default())),
            SettingKey::VibrationEnabled => Some(Setting::VibrationEnabled(true)),
            SettingKey::ThemeConfig => Some(Setting::ThemeConfig(ThemeConfig::default())),
            SettingKey::CalendarMode => Some(Setting::CalendarMode(CalendarMode::default())),
            SettingKey::AppLockPin => None,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SettingKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SettingKey::ALL
            .into_iter()
            .find(|k| k.id() == wanted)
            .ok_or_else(|| ValidationError::UnknownSetting(s.to_string()))
    }
}

/// Which task alerts are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// "Starts in / ends in N minutes" alerts.
    pub advance: bool,
    /// "Task starting now" and "Task completed" alerts.
    pub boundaries: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings { advance: true, boundaries: true }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    #[default]
    Normal,
    Mood,
}

impl FromStr for CalendarMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(CalendarMode::Normal),
            "mood" => Ok(CalendarMode::Mood),
            _ => Err(ValidationError::UnknownCalendarMode(s.to_string())),
        }
    }
}

/// Visual theme preferences. Opaque to chronos itself; stored for the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub accent_color: String,
    pub background_preset: String,
    pub show_particles: bool,
    pub particle_type: String,
    pub journal_style: String,
    pub show_mood_star: bool,
    pub show_resonance: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            accent_color: "blue".to_string(),
            background_preset: "midnight".to_string(),
            show_particles: true,
            particle_type: "meteors".to_string(),
            journal_style: "astral".to_string(),
            show_mood_star: true,
            show_resonance: true,
        }
    }
}

/// A stored setting together with its typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    UserName(String),
    ProfileImage(String),
    NotificationSettings(NotificationSettings),
    VibrationEnabled(bool),
    ThemeConfig(ThemeConfig),
    CalendarMode(CalendarMode),
    AppLockPin(String),
}

impl Setting {
    pub fn key(&self) -> SettingKey {
        match self {
            Setting::UserName(_) => SettingKey::UserName,
            Setting::ProfileImage(_) => SettingKey::ProfileImage,
            Setting::NotificationSettings(_) => SettingKey::NotificationSettings,
            Setting::VibrationEnabled(_) => SettingKey::VibrationEnabled,
            Setting::ThemeConfig(_) => SettingKey::ThemeConfig,
            Setting::CalendarMode(_) => SettingKey::CalendarMode,
            Setting::AppLockPin(_) => SettingKey::AppLockPin,
        }
    }

    /// Builds a lock PIN setting, accepting exactly four digits.
    pub fn app_lock_pin(pin: &str) -> Result<Setting, ValidationError> {
        if pin.len() == 4 && pin.chars().all(|c| c.is_ascii_digit()) {
            Ok(Setting::AppLockPin(pin.to_string()))
        } else {
            Err(ValidationError::InvalidPin)
        }
    }

    /// JSON form written to the settings collection.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            Setting::UserName(v) | Setting::ProfileImage(v) | Setting::AppLockPin(v) => Ok(Value::String(v.clone())),
            Setting::NotificationSettings(v) => serde_json::to_value(v),
            Setting::VibrationEnabled(v) => Ok(Value::Bool(*v)),
            Setting::ThemeConfig(v) => serde_json::to_value(v),
            Setting::CalendarMode(v) => serde_json::to_value(v),
        }
    }

    /// Decodes a stored JSON value for `key`.
    pub fn from_value(key: SettingKey, value: Value) -> serde_json::Result<Setting> {
        Ok(match key {
            SettingKey::UserName => Setting::UserName(serde_json::from_value(value)?),
            SettingKey::ProfileImage => Setting::ProfileImage(serde_json::from_value(value)?),
            SettingKey::NotificationSettings => Setting::NotificationSettings(serde_json::from_value(value)?),
            SettingKey::VibrationEnabled => Setting::VibrationEnabled(serde_json::from_value(value)?),
            SettingKey::ThemeConfig => Setting::ThemeConfig(serde_json::from_value(value)?),
            SettingKey::CalendarMode => Setting::CalendarMode(serde_json::from_value(value)?),
            SettingKey::AppLockPin => Setting::AppLockPin(serde_json::from_value(value)?),
        })
    }

    /// Parses user text for `key`: bare strings for text settings, JSON for
    /// the structured ones.
    pub fn parse(key: SettingKey, input: &str) -> anyhow::Result<Setting> {
        let setting = match key {
            SettingKey::UserName => Setting::UserName(input.trim().to_string()),
            SettingKey::ProfileImage => Setting::ProfileImage(input.trim().to_string()),
            SettingKey::AppLockPin => Setting::app_lock_pin(input.trim())?,
            SettingKey::CalendarMode => Setting::CalendarMode(input.parse()?),
            SettingKey::VibrationEnabled => Setting::VibrationEnabled(input.trim().parse()?),
            SettingKey::NotificationSettings | SettingKey::ThemeConfig => Setting::from_value(key, serde_json::from_str(input)?)?,
        };
        Ok(setting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn setting_values_round_trip() {
        let settings = vec![
            Setting::UserName("Ada".into()),
            Setting::NotificationSettings(NotificationSettings { advance: false, boundaries: true }),
            Setting::VibrationEnabled(false),
            Setting::ThemeConfig(ThemeConfig::default()),
            Setting::CalendarMode(CalendarMode::Mood),
            Setting::AppLockPin("1234".into()),
        ];
        for setting in settings {
            let value = setting.to_value().unwrap();
            assert_eq!(Setting::from_value(setting.key(), value).unwrap(), setting);
        }
    }

    #[test]
    fn mismatched_value_is_an_error() {
        assert!(Setting::from_value(SettingKey::NotificationSettings, json!("advance")).is_err());
        assert!(Setting::from_value(SettingKey::VibrationEnabled, json!("yes")).is_err());
    }

    #[test]
    fn pin_requires_four_digits() {
        assert!(Setting::app_lock_pin("1234").is_ok());
        assert_eq!(Setting::app_lock_pin("12a4"), Err(ValidationError::InvalidPin));
        assert_eq!(Setting::app_lock_pin("12345"), Err(ValidationError::InvalidPin));
    }

    #[test]
    fn parse_accepts_plain_and_json_input() {
        assert_eq!(Setting::parse(SettingKey::UserName, " Ada ").unwrap(), Setting::UserName("Ada".into()));
        assert_eq!(Setting::parse(SettingKey::VibrationEnabled, "false").unwrap(), Setting::VibrationEnabled(false));
        assert_eq!(
            Setting::parse(SettingKey::NotificationSettings, r#"{"advance":false,"boundaries":false}"#).unwrap(),
            Setting::NotificationSettings(NotificationSettings { advance: false, boundaries: false })
        );
        assert!(Setting::parse(SettingKey::CalendarMode, "weekly").is_err());
    }

    #[test]
    fn keys_parse_from_ids() {
        assert_eq!("notif_settings".parse::<SettingKey>().unwrap(), SettingKey::NotificationSettings);
        assert!("chronos_user_name".parse::<SettingKey>().is_err());
        assert!(SettingKey::AppLockPin.default_setting().is_none());
    }
}
