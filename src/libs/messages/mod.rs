//! Centralized user-facing messages.
//!
//! Every string chronos prints goes through the [`Message`] enum so wording
//! lives in one place (`display.rs`). The `msg_*!` macros in `macros.rs`
//! route messages either to the console or to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
