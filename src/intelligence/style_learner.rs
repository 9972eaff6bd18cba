//! Style learner — derives a `StyleProfile` from approved replies.
//!
//! Heuristic summary only: sentence length, question/exclamation/emoji
//! habits, recurring endings. Recomputed from scratch after every new
//! feedback record and once at startup.

use std::collections::HashMap;

use crate::config::StyleConfig;
use crate::constants::{
    EMOJI_RANGE_END, EMOJI_RANGE_START, MAX_COMMON_ENDINGS, MEDIUM_SENTENCE_MAX_CHARS,
    MIN_ENDING_OCCURRENCES, SHORT_SENTENCE_MAX_CHARS, TONE_LOW_RATIO, TONE_MODERATE_RATIO,
};
use crate::feedback::FeedbackRecord;
use crate::locale::Locale;
use crate::storage::{FeedbackStore, ProfileStore};
use crate::style_profile::{render_instruction_block, StyleProfile};
use crate::AssistResult;

/// What a refresh did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleRefresh {
    /// Learning is off; nothing read or written.
    Disabled,
    /// Below the feedback threshold; profile cleared.
    Insufficient { records: usize },
    /// Profile recomputed and persisted.
    Updated { sample_count: usize },
    /// Feedback log unreadable; last persisted profile (if any) kept.
    Restored { found: bool },
}

pub struct StyleLearner {
    config: StyleConfig,
    locale: Locale,
    profile: Option<StyleProfile>,
}

impl StyleLearner {
    pub fn new(config: StyleConfig, locale: Locale) -> Self {
        Self {
            config,
            locale,
            profile: None,
        }
    }

    pub fn profile(&self) -> Option<&StyleProfile> {
        self.profile.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn should_recompute(&self, record_count: usize) -> bool {
        record_count >= self.config.min_feedback
    }

    /// Style block for the next prompt, rendered from the current profile.
    pub fn instruction_block(&self) -> String {
        render_instruction_block(self.profile.as_ref(), self.config.enabled, self.locale)
    }

    /// Profile over the most recent `max_samples` records.
    pub fn derive_profile(&self, records: &[FeedbackRecord]) -> StyleProfile {
        let start = records.len().saturating_sub(self.config.max_samples);
        let chosen: Vec<&str> = records[start..].iter().map(|r| r.chosen.as_str()).collect();
        build_style_profile(&chosen, self.locale)
    }

    /// Re-read feedback, recompute and persist the profile.
    ///
    /// The in-memory profile is replaced before persisting, so a failed write
    /// still leaves the fresh profile in use for the next prompt.
    pub fn refresh(
        &mut self,
        feedback: &dyn FeedbackStore,
        profiles: &mut dyn ProfileStore,
    ) -> AssistResult<StyleRefresh> {
        if !self.is_enabled() {
            return Ok(StyleRefresh::Disabled);
        }

        let records = match feedback.read_all() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "Feedback log unreadable, falling back to stored profile");
                self.profile = profiles.load();
                return Ok(StyleRefresh::Restored {
                    found: self.profile.is_some(),
                });
            }
        };

        if !self.should_recompute(records.len()) {
            tracing::debug!(
                records = records.len(),
                min = self.config.min_feedback,
                "Not enough feedback for a style profile"
            );
            self.profile = None;
            return Ok(StyleRefresh::Insufficient {
                records: records.len(),
            });
        }

        let profile = self.derive_profile(&records);
        let sample_count = profile.sample_count;
        tracing::info!(
            samples = sample_count,
            avg_length = profile.avg_length,
            endings = ?profile.common_endings,
            "Style profile recomputed"
        );
        self.profile = Some(profile.clone());
        profiles.save(&profile)?;
        Ok(StyleRefresh::Updated { sample_count })
    }
}

/// Pure profile derivation over chosen reply texts.
pub fn build_style_profile(chosen: &[&str], locale: Locale) -> StyleProfile {
    let phrases = locale.phrases();
    let sample_count = chosen.len();

    let total_chars: usize = chosen.iter().map(|t| t.chars().count()).sum();
    let avg_length = (total_chars / sample_count.max(1)).max(1);

    let questions = chosen
        .iter()
        .filter(|t| t.contains('?') || t.contains('？'))
        .count();
    let exclamations = chosen
        .iter()
        .filter(|t| t.contains('!') || t.contains('！'))
        .count();
    let emoji_texts = chosen.iter().filter(|t| contains_emoji(t)).count();

    let concise_preference = if avg_length <= SHORT_SENTENCE_MAX_CHARS {
        phrases.concise_short
    } else if avg_length <= MEDIUM_SENTENCE_MAX_CHARS {
        phrases.concise_medium
    } else {
        phrases.concise_long
    };
    let question_tone = ratio_tier(
        questions,
        sample_count,
        [phrases.question_low, phrases.question_moderate, phrases.question_high],
    );
    let punctuation_tone = ratio_tier(
        exclamations,
        sample_count,
        [phrases.exclamation_low, phrases.exclamation_moderate, phrases.exclamation_high],
    );
    let emoji_tone = if emoji_texts == 0 {
        phrases.emoji_rarely
    } else if emoji_texts < sample_count {
        phrases.emoji_sometimes
    } else {
        phrases.emoji_often
    };

    let common_endings = extract_common_endings(chosen);

    let mut rules = vec![
        locale.length_rule(concise_preference, avg_length),
        locale.tone_rule(question_tone, punctuation_tone, emoji_tone),
    ];
    if !common_endings.is_empty() {
        rules.push(locale.endings_rule(&common_endings));
    }
    rules.push(phrases.anti_repetition.to_string());

    StyleProfile {
        updated_at: crate::time_utils::now_iso8601(),
        sample_count,
        avg_length,
        concise_preference: concise_preference.to_string(),
        question_tone: question_tone.to_string(),
        emoji_tone: emoji_tone.to_string(),
        punctuation_tone: punctuation_tone.to_string(),
        common_endings,
        instruction: rules.join(phrases.rule_separator),
    }
}

/// Low / moderate / high by share of texts with the trait.
fn ratio_tier(count: usize, total: usize, tiers: [&'static str; 3]) -> &'static str {
    if total == 0 {
        return tiers[0];
    }
    let ratio = count as f64 / total as f64;
    if ratio < TONE_LOW_RATIO {
        tiers[0]
    } else if ratio < TONE_MODERATE_RATIO {
        tiers[1]
    } else {
        tiers[2]
    }
}

fn contains_emoji(text: &str) -> bool {
    text.chars()
        .any(|c| (EMOJI_RANGE_START..=EMOJI_RANGE_END).contains(&c))
}

fn char_suffix(text: &str, n: usize) -> String {
    let len = text.chars().count();
    text.chars().skip(len.saturating_sub(n)).collect()
}

/// Last-2 and last-3 character suffixes seen at least twice, most frequent
/// first, ties in lexicographic order.
pub fn extract_common_endings(texts: &[&str]) -> Vec<String> {
    let mut counter: HashMap<String, usize> = HashMap::new();
    for text in texts {
        let trimmed = text.trim();
        if trimmed.chars().count() < 2 {
            continue;
        }
        *counter.entry(char_suffix(trimmed, 2)).or_insert(0) += 1;
        *counter.entry(char_suffix(trimmed, 3)).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = counter
        .into_iter()
        .filter(|(_, c)| *c >= MIN_ENDING_OCCURRENCES)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(MAX_COMMON_ENDINGS)
        .map(|(token, _)| token)
        .collect()
}
