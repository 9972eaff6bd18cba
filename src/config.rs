//! Assistant configuration — monitor, filter, context, style learning, model.
//!
//! Loaded once at startup from `{data_dir}/config.json`. Every field has a
//! default so partial documents are valid. No live reload.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::locale::Locale;

// ============================================================================
// MONITOR (foreground gating)
// ============================================================================

/// Foreground-app gating for clipboard polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Only react while the target chat app is in front.
    pub target_app_only: bool,
    /// When the foreground app cannot be determined: reject instead of accept.
    pub strict_detection: bool,
    /// Substrings matched against the foreground app name.
    pub app_hints: Vec<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            target_app_only: true,
            strict_detection: false,
            app_hints: vec!["WeChat".to_string(), "微信".to_string()],
        }
    }
}

// ============================================================================
// SELF MESSAGES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfMessageConfig {
    /// Prefixes marking a copied line as written by the user.
    pub prefixes: Vec<String>,
    /// Optional display name; `"{name}:"` and `"{name}："` also mark own messages.
    pub my_name: String,
}

impl Default for SelfMessageConfig {
    fn default() -> Self {
        Self {
            prefixes: ["我:", "我：", "Me:", "Me："]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            my_name: String::new(),
        }
    }
}

// ============================================================================
// CONTEXT MEMORY
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    pub enabled: bool,
    pub window_size: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            window_size: constants::DEFAULT_CONTEXT_WINDOW,
        }
    }
}

// ============================================================================
// STYLE LEARNING
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub enabled: bool,
    /// Feedback records required before a profile is derived.
    pub min_feedback: usize,
    /// Only the most recent N chosen replies feed the profile.
    pub max_samples: usize,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_feedback: constants::DEFAULT_MIN_FEEDBACK_FOR_STYLE,
            max_samples: constants::DEFAULT_MAX_STYLE_SAMPLES,
        }
    }
}

// ============================================================================
// MODEL
// ============================================================================

/// OpenAI-compatible completion endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_secs: u32,
    /// Empty = locale default system prompt.
    pub system_prompt: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: constants::DEFAULT_BASE_URL.to_string(),
            api_key: "no_need".to_string(),
            model: constants::DEFAULT_MODEL.to_string(),
            temperature: constants::DEFAULT_TEMPERATURE,
            timeout_secs: constants::DEFAULT_MODEL_TIMEOUT_SECS,
            system_prompt: String::new(),
        }
    }
}

impl ModelConfig {
    /// False for an empty key or the unedited placeholder.
    pub fn has_api_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && key != constants::PLACEHOLDER_API_KEY
    }
}

// ============================================================================
// STORAGE
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory for feedback, profile and logs.
    pub data_dir: Option<PathBuf>,
}

// ============================================================================
// ROOT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub poll_interval_ms: u64,
    pub locale: Locale,
    pub monitor: MonitorConfig,
    pub self_messages: SelfMessageConfig,
    pub context: ContextConfig,
    pub style: StyleConfig,
    pub model: ModelConfig,
    pub storage: StorageConfig,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: constants::DEFAULT_POLL_INTERVAL_MS,
            locale: Locale::default(),
            monitor: MonitorConfig::default(),
            self_messages: SelfMessageConfig::default(),
            context: ContextConfig::default(),
            style: StyleConfig::default(),
            model: ModelConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl AssistantConfig {
    /// Load from `{data_dir}/config.json`, then apply the API key env override.
    /// Returns defaults if the file is missing or invalid.
    pub fn load() -> Self {
        let mut config = Self::load_from(&crate::storage::path_utils::config_path());
        if let Ok(key) = std::env::var(constants::API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.model.api_key = key;
            }
        }
        config
    }

    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "Invalid assistant config, using defaults"
                );
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save to `{data_dir}/config.json`.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&crate::storage::path_utils::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), String> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config dir: {}", e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(config_path, json)
            .map_err(|e| format!("Failed to write config: {}", e))?;
        Ok(())
    }

    /// Directory holding feedback log, style profile and log file.
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(crate::storage::path_utils::data_dir)
    }

    /// Configured system prompt, or the locale default when blank.
    pub fn system_prompt(&self) -> String {
        if self.model.system_prompt.trim().is_empty() {
            self.locale.phrases().default_system_prompt.to_string()
        } else {
            self.model.system_prompt.clone()
        }
    }

    /// Context window, never below one message.
    pub fn context_window(&self) -> usize {
        self.context.window_size.max(1)
    }
}
