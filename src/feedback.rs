//! Feedback record — one approved suggestion, with the generation it came from.
//!
//! Written once to the append-only log, never mutated.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedbackRecord {
    /// ISO 8601 UTC.
    pub timestamp: String,
    /// Incoming message that started the generation.
    pub source_message: String,
    /// Context buffer as it was when that generation started.
    pub context_messages: Vec<String>,
    /// Full candidate set shown to the user.
    pub candidates: Vec<String>,
    pub chosen: String,
    pub model: String,
}

impl FeedbackRecord {
    pub fn new(
        source_message: String,
        context_messages: Vec<String>,
        candidates: Vec<String>,
        chosen: String,
        model: String,
    ) -> Self {
        Self {
            timestamp: crate::time_utils::now_iso8601(),
            source_message,
            context_messages,
            candidates,
            chosen,
            model,
        }
    }
}
