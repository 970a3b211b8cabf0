//! Configuration for the chronos application.
//!
//! The configuration is a JSON file (`config.json`) in the per-user data
//! directory. Every section is optional; a missing file means every section
//! takes its defaults.
//!
//! ## Sections
//!
//! - **icon_api**: Gemini credentials for icon suggestions
//! - **alerts**: polling interval and de-duplication bound of the alert watcher
//!
//! ```rust,no_run
//! use chronos::libs::config::Config;
//!
//! let config = Config::read()?;
//! let alerts = config.alerts.unwrap_or_default();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::alerts::{DEFAULT_POLL_INTERVAL_SECS, DEFAULT_SENTINEL_BOUND};
use super::data_storage::DataStorage;
use crate::api::gemini::GeminiConfig;
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Alert watcher tuning.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AlertConfig {
    /// Seconds between two checks.
    pub poll_interval: u64,
    /// Fired alerts remembered before the memory is cleared.
    pub sentinel_bound: usize,
}

impl Default for AlertConfig {
    fn default() -> Self {
        AlertConfig {
            poll_interval: DEFAULT_POLL_INTERVAL_SECS,
            sentinel_bound: DEFAULT_SENTINEL_BOUND,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_api: Option<GeminiConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<AlertConfig>,
}

impl Config {
    /// Reads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    /// Reads the configuration from `storage`, defaulting when no file exists.
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let path = storage.get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| msg_error_anyhow!(format!("{}: {}", Message::ConfigParseError, e)))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    /// Writes pretty-printed JSON into `storage`.
    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let path = storage.get_path(CONFIG_FILE_NAME)?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            GeminiConfig::module(),
            ConfigModule {
                key: "alerts".to_string(),
                name: Message::ConfigModuleAlerts.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "icon_api" => config.icon_api = Some(GeminiConfig::init(&config.icon_api)?),
                "alerts" => {
                    let default = config.alerts.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleAlerts);
                    config.alerts = Some(AlertConfig {
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAlertInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                        sentinel_bound: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptAlertBound.to_string())
                            .default(default.sentinel_bound)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
