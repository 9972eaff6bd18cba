//! Clipboard text filter — is this a new incoming message worth answering?

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{AssistantConfig, MonitorConfig};
use crate::constants::{MAX_MESSAGE_CHARS, MIN_MESSAGE_CHARS};
use crate::provider::ForegroundApp;

/// Digits, punctuation, symbols, whitespace and underscores only.
static NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\W_]+$").expect("noise regex"));

/// Why a captured string was (not) accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterVerdict {
    Accepted,
    Empty,
    /// Same text as the previous observation.
    Duplicate,
    TooShort,
    TooLong,
    /// Timestamps, numbers, punctuation noise.
    Noise,
}

impl FilterVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Empty => "empty",
            Self::Duplicate => "duplicate",
            Self::TooShort => "too_short",
            Self::TooLong => "too_long",
            Self::Noise => "noise",
        }
    }
}

pub struct TextFilter {
    self_prefixes: Vec<String>,
    my_name: String,
    monitor: MonitorConfig,
}

impl TextFilter {
    pub fn new(self_prefixes: Vec<String>, my_name: String, monitor: MonitorConfig) -> Self {
        Self {
            self_prefixes,
            my_name: my_name.trim().to_string(),
            monitor,
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(
            config.self_messages.prefixes.clone(),
            config.self_messages.my_name.clone(),
            config.monitor.clone(),
        )
    }

    /// Classify `candidate` against the last observed clipboard text.
    /// Lengths are counted in characters.
    pub fn verdict(&self, candidate: &str, last_seen: &str) -> FilterVerdict {
        if candidate.is_empty() {
            return FilterVerdict::Empty;
        }
        if candidate == last_seen {
            return FilterVerdict::Duplicate;
        }
        let chars = candidate.chars().count();
        if chars < MIN_MESSAGE_CHARS {
            return FilterVerdict::TooShort;
        }
        if chars > MAX_MESSAGE_CHARS {
            return FilterVerdict::TooLong;
        }
        if NOISE.is_match(candidate) {
            return FilterVerdict::Noise;
        }
        FilterVerdict::Accepted
    }

    pub fn is_acceptable(&self, candidate: &str, last_seen: &str) -> bool {
        self.verdict(candidate, last_seen) == FilterVerdict::Accepted
    }

    /// Copied line looks like something the user wrote ("我：...", "Me: ...", "{name}: ...").
    pub fn is_self_authored(&self, candidate: &str) -> bool {
        let stripped = candidate.trim();
        if self
            .self_prefixes
            .iter()
            .any(|p| !p.is_empty() && stripped.starts_with(p.as_str()))
        {
            return true;
        }
        if !self.my_name.is_empty() {
            let ascii = format!("{}:", self.my_name);
            let fullwidth = format!("{}：", self.my_name);
            if stripped.starts_with(&ascii) || stripped.starts_with(&fullwidth) {
                return true;
            }
        }
        false
    }

    /// Foreground gate. Undetermined app name → permissive unless strict.
    pub fn is_target_foreground(&self, app: &dyn ForegroundApp) -> bool {
        if !self.monitor.target_app_only {
            return true;
        }
        match app.current_app_name() {
            Some(name) => self
                .monitor
                .app_hints
                .iter()
                .any(|hint| name.contains(hint.as_str())),
            None => !self.monitor.strict_detection,
        }
    }
}
