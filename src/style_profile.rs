//! Style profile — what the user's approved replies look like.
//!
//! Persisted as `{data_dir}/style_profile.json`.
//! Derived wholesale by `intelligence::style_learner`, never patched in place.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StyleProfile {
    pub updated_at: String,
    pub sample_count: usize,
    /// Mean character count of chosen replies, at least 1.
    pub avg_length: usize,
    pub concise_preference: String,
    pub question_tone: String,
    pub emoji_tone: String,
    pub punctuation_tone: String,
    /// Most frequent 2-3 character endings, at most five.
    pub common_endings: Vec<String>,
    /// Rendered rule sentence injected into prompts.
    pub instruction: String,
}

/// Style block for the user prompt.
///
/// Learning off → neutral directive. No profile yet → neutral directive that
/// also allows light humor. Otherwise the profile instruction, labelled as
/// coming from past approvals.
pub fn render_instruction_block(
    profile: Option<&StyleProfile>,
    learning_enabled: bool,
    locale: Locale,
) -> String {
    let phrases = locale.phrases();
    if !learning_enabled {
        return phrases.style_disabled.to_string();
    }
    match profile {
        None => phrases.style_no_profile.to_string(),
        Some(p) => format!("{}{}", phrases.style_profile_label, p.instruction),
    }
}
