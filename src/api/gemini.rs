//! Gemini client for task icon suggestions.
//!
//! Sends the task title to the `generateContent` endpoint and asks for a
//! single emoji back. Output is capped at a handful of tokens, so the answer
//! is either a glyph or something short enough to reject.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chronos::api::gemini::{GeminiClient, GeminiConfig};
//! use chronos::libs::icon::suggest_icon_or_default;
//!
//! let client = GeminiClient::new(&config);
//! let icon = suggest_icon_or_default(&client, "Morning run").await;
//! ```

use crate::libs::config::ConfigModule;
use crate::libs::icon::IconSuggester;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const MAX_OUTPUT_TOKENS: u32 = 10;
const TEMPERATURE: f32 = 0.5;

/// Connection settings for the Gemini API.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL without the `/models` path.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl GeminiConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "icon_api".to_string(),
            name: Message::ConfigModuleIconApi.to_string(),
        }
    }

    /// Interactive setup, pre-filled from `config` when present.
    pub fn init(config: &Option<GeminiConfig>) -> Result<Self> {
        let current = config.clone().unwrap_or(Self {
            api_key: String::new(),
            model: default_model(),
            api_url: default_api_url(),
        });

        msg_print!(Message::ConfigModuleIconApi);

        let api_key = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptIconApiKey.to_string())
            .allow_empty_password(!current.api_key.is_empty())
            .interact()?;

        Ok(Self {
            api_key: if api_key.is_empty() { current.api_key } else { api_key },
            model: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptIconModel.to_string())
                .default(current.model)
                .interact_text()?,
            api_url: current.api_url,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().filter_map(|p| p.text.as_deref()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn prompt(title: &str) -> String {
        format!(
            "Suggest a single emoji icon that best represents the task: \"{}\". Return only the emoji character and nothing else.",
            title
        )
    }
}

impl IconSuggester for GeminiClient {
    async fn suggest(&self, title: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.config.api_url, self.config.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": Self::prompt(title) }] }],
            "generationConfig": {
                "maxOutputTokens": MAX_OUTPUT_TOKENS,
                "temperature": TEMPERATURE,
            }
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            msg_bail_anyhow!(Message::IconSuggestionFailed(response.status().to_string()));
        }

        Ok(response.json::<GenerateResponse>().await?.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":" 🏃"},{"text":"\n"}]}},{"content":{"parts":[{"text":"x"}]}}]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), " 🏃\n");
    }

    #[test]
    fn empty_response_has_no_text() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
    }

    #[test]
    fn config_fills_defaults() {
        let config: GeminiConfig = serde_json::from_str(r#"{"api_key":"k"}"#).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
