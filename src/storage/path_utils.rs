use std::path::{Path, PathBuf};

const APP_DIR: &str = "reply-assistant";
const CONFIG_FILE: &str = "config.json";
const FEEDBACK_FILE: &str = "preferences.jsonl";
const STYLE_PROFILE_FILE: &str = "style_profile.json";
const LOG_FILE: &str = "assistant.log";

/// Centralized cross-platform data directory.
/// Linux: ~/.config/reply-assistant/
/// macOS: ~/Library/Application Support/reply-assistant/
/// Windows: %APPDATA%/reply-assistant/
pub fn data_dir() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    });
    base.join(APP_DIR)
}

/// `{data_dir}/config.json`. Always in the platform dir; the config itself may
/// point the other files elsewhere.
pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

/// Append-only feedback log: `{dir}/preferences.jsonl`
pub fn feedback_log_path(dir: &Path) -> PathBuf {
    dir.join(FEEDBACK_FILE)
}

/// Current style profile document: `{dir}/style_profile.json`
pub fn style_profile_path(dir: &Path) -> PathBuf {
    dir.join(STYLE_PROFILE_FILE)
}

pub fn log_path(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}
