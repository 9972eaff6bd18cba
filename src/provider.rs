//! Collaborator seams — clipboard, foreground app, model completion.
//!
//! The suggestion pipeline only talks to these traits. Concrete adapters live
//! in `platform` (clipboard, foreground) and `processing::llm_client` (model).

use crate::AssistResult;

/// System clipboard, text only.
pub trait ClipboardAccess {
    /// Current text content, `None` when empty, non-text or unreadable.
    fn read(&mut self) -> Option<String>;
    fn write(&mut self, text: &str) -> AssistResult<()>;
}

/// Frontmost application lookup.
pub trait ForegroundApp {
    /// Localized name of the frontmost app, `None` when undetermined.
    fn current_app_name(&self) -> Option<String>;
}

/// One chat completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_secs: u32,
}

/// Language model behind a system + user prompt pair.
///
/// Called from a worker thread, hence `Send + Sync`.
pub trait CompletionProvider: Send + Sync {
    fn id(&self) -> &str;

    /// False when the provider cannot possibly succeed (e.g. no API key).
    fn is_configured(&self) -> bool {
        true
    }

    /// Raw model text, or `AssistError::ModelCall` on network/HTTP/timeout failure.
    fn complete(&self, request: &CompletionRequest) -> AssistResult<String>;
}
