//! Clients for external services.
//!
//! Only one so far: Gemini, used to suggest an emoji icon for a new task.
//! Callers go through [`crate::libs::icon::suggest_icon_or_default`], so a
//! failing request never reaches the user as an error.

pub mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};
