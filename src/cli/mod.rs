pub mod config;
pub mod feedback;
pub mod profile;
pub mod run;
pub mod suggest;

use std::sync::Arc;

use reply_assistant::config::AssistantConfig;
use reply_assistant::engine::{Collaborators, SuggestionEngine};
use reply_assistant::platform::{SystemClipboard, SystemForeground};
use reply_assistant::processing::llm_client::OpenAiCompatClient;
use reply_assistant::storage::{path_utils, JsonProfileStore, JsonlFeedbackStore};

/// Load config and start file logging. Every command goes through here.
pub fn bootstrap() -> AssistantConfig {
    let config = AssistantConfig::load();
    reply_assistant::tracing_init::init_file_tracing(&config.data_dir());
    config
}

pub fn feedback_store(config: &AssistantConfig) -> JsonlFeedbackStore {
    JsonlFeedbackStore::new(path_utils::feedback_log_path(&config.data_dir()))
}

pub fn profile_store(config: &AssistantConfig) -> JsonProfileStore {
    JsonProfileStore::new(path_utils::style_profile_path(&config.data_dir()))
}

/// Engine wired to the real clipboard, model endpoint and data files.
pub fn build_engine(config: AssistantConfig) -> SuggestionEngine {
    let collaborators = Collaborators {
        clipboard: Box::new(SystemClipboard::new()),
        foreground: Box::new(SystemForeground::new()),
        provider: Arc::new(OpenAiCompatClient::new(&config.model)),
        feedback: Box::new(feedback_store(&config)),
        profiles: Box::new(profile_store(&config)),
    };
    SuggestionEngine::new(config, collaborators)
}
