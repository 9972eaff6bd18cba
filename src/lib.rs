//! Reply Assistant — clipboard-driven chat reply suggestions.
//!
//! Watches the clipboard while the chat app is in front, asks an
//! OpenAI-compatible model for three candidate replies, and learns the
//! user's tone from the replies they approve.

// Foundation
pub mod constants;
pub mod error;
pub mod locale;
pub mod time_utils;

// Core types
pub mod config;
pub mod feedback;
pub mod provider;
pub mod style_profile;

// Sub-systems
pub mod engine;
pub mod intelligence;
pub mod platform;
pub mod processing;
pub mod storage;
pub mod tracing_init;

#[cfg(test)]
pub mod test_helpers;

// Re-exports for convenience
pub use error::{AssistError, AssistResult};
