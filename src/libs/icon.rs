//! Icon suggestion with a fixed fallback.
//!
//! Suggesting an icon is a convenience: any failure of the suggester, or an
//! empty answer, quietly becomes [`DEFAULT_ICON`].

use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;

pub const DEFAULT_ICON: &str = "📝";

/// Something that proposes a short glyph for a task title.
#[allow(async_fn_in_trait)]
pub trait IconSuggester {
    async fn suggest(&self, title: &str) -> Result<String>;
}

/// Asks `suggester` for an icon, falling back to [`DEFAULT_ICON`].
pub async fn suggest_icon_or_default<S: IconSuggester>(suggester: &S, title: &str) -> String {
    match suggester.suggest(title).await {
        Ok(icon) => {
            let icon = icon.trim();
            if icon.is_empty() {
                DEFAULT_ICON.to_string()
            } else {
                icon.to_string()
            }
        }
        Err(e) => {
            msg_warning!(Message::IconSuggestionFailed(e.to_string()));
            DEFAULT_ICON.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl IconSuggester for Fixed {
        async fn suggest(&self, _title: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Broken;

    impl IconSuggester for Broken {
        async fn suggest(&self, _title: &str) -> Result<String> {
            anyhow::bail!("network unreachable")
        }
    }

    #[tokio::test]
    async fn trims_suggestion() {
        assert_eq!(suggest_icon_or_default(&Fixed(" 🏋️ \n"), "Gym").await, "🏋️");
    }

    #[tokio::test]
    async fn empty_answer_uses_default() {
        assert_eq!(suggest_icon_or_default(&Fixed("   "), "Gym").await, DEFAULT_ICON);
    }

    #[tokio::test]
    async fn failure_uses_default() {
        assert_eq!(suggest_icon_or_default(&Broken, "Gym").await, DEFAULT_ICON);
    }
}
