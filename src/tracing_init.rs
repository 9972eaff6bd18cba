//! Tracing initialization — the assistant logs to `{data_dir}/assistant.log`.
//!
//! The interactive loop owns stdout, so log lines never go to the terminal.

use std::path::Path;
use std::sync::Mutex;

use crate::storage::path_utils;

/// Initialize tracing to `assistant.log` under `data_dir` (append mode).
///
/// Filter comes from `RUST_LOG`, defaulting to `info`. Falls back to the
/// null device when the log file cannot be opened.
pub fn init_file_tracing(data_dir: &Path) {
    use tracing_subscriber::EnvFilter;

    std::fs::create_dir_all(data_dir).ok();
    let log_path = path_utils::log_path(data_dir);

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .unwrap_or_else(|_| {
            let null = if cfg!(windows) { "NUL" } else { "/dev/null" };
            std::fs::File::create(null).expect("Cannot create log fallback")
        });

    // A second init (tests, embedding callers) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_target(true)
        .with_ansi(false)
        .try_init();
}
