//! Shared test utilities — in-memory stores and scripted collaborators.
//!
//! Available only under `#[cfg(test)]`. Every fake is `Clone` around shared
//! state so a test can keep a handle after moving a copy into the engine.

use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::feedback::FeedbackRecord;
use crate::provider::{ClipboardAccess, CompletionProvider, CompletionRequest, ForegroundApp};
use crate::storage::{FeedbackStore, ProfileStore};
use crate::style_profile::StyleProfile;
use crate::{AssistError, AssistResult};

// ============================================================================
// Builders
// ============================================================================

pub fn sample_profile() -> StyleProfile {
    StyleProfile {
        updated_at: "2026-01-01T00:00:00Z".to_string(),
        sample_count: 5,
        avg_length: 4,
        concise_preference: "偏短句".to_string(),
        question_tone: "少用反问".to_string(),
        emoji_tone: "几乎不用 emoji".to_string(),
        punctuation_tone: "少用感叹号".to_string(),
        common_endings: vec!["好的".to_string()],
        instruction: "句长：偏短句（平均4字）；尽量贴近以上风格，但保持自然，不要机械复读".to_string(),
    }
}

pub fn feedback_with_chosen(chosen: &[&str]) -> Vec<FeedbackRecord> {
    chosen
        .iter()
        .map(|c| {
            FeedbackRecord::new(
                "msg".to_string(),
                vec!["msg".to_string()],
                vec![c.to_string()],
                c.to_string(),
                "test-model".to_string(),
            )
        })
        .collect()
}

// ============================================================================
// Stores
// ============================================================================

#[derive(Clone, Default)]
pub struct MemoryFeedbackStore {
    records: Arc<Mutex<Vec<FeedbackRecord>>>,
    fail_append: bool,
    fail_read: bool,
}

impl MemoryFeedbackStore {
    pub fn with_records(records: Vec<FeedbackRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_append: true,
            ..Self::default()
        }
    }

    pub fn unreadable() -> Self {
        Self {
            fail_read: true,
            ..Self::default()
        }
    }

    pub fn records(&self) -> Vec<FeedbackRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl FeedbackStore for MemoryFeedbackStore {
    fn append(&mut self, record: &FeedbackRecord) -> AssistResult<()> {
        if self.fail_append {
            return Err(AssistError::Persistence("disk full".into()));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn read_all(&self) -> AssistResult<Vec<FeedbackRecord>> {
        if self.fail_read {
            return Err(AssistError::Io(std::io::Error::other("unreadable")));
        }
        Ok(self.records())
    }
}

#[derive(Clone, Default)]
pub struct MemoryProfileStore {
    saved: Arc<Mutex<Vec<StyleProfile>>>,
    fail_save: bool,
}

impl MemoryProfileStore {
    pub fn with_profile(profile: StyleProfile) -> Self {
        Self {
            saved: Arc::new(Mutex::new(vec![profile])),
            fail_save: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    /// Every document written, oldest first.
    pub fn saved(&self) -> Vec<StyleProfile> {
        self.saved.lock().unwrap().clone()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn save(&mut self, profile: &StyleProfile) -> AssistResult<()> {
        if self.fail_save {
            return Err(AssistError::Persistence("read-only".into()));
        }
        self.saved.lock().unwrap().push(profile.clone());
        Ok(())
    }

    fn load(&self) -> Option<StyleProfile> {
        self.saved.lock().unwrap().last().cloned()
    }
}

// ============================================================================
// Collaborators
// ============================================================================

pub struct FixedForeground(pub Option<String>);

impl ForegroundApp for FixedForeground {
    fn current_app_name(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Clipboard whose content the test sets between ticks.
#[derive(Clone, Default)]
pub struct SharedClipboard {
    content: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<Vec<String>>>,
    fail_write: bool,
}

impl SharedClipboard {
    pub fn failing() -> Self {
        Self {
            fail_write: true,
            ..Self::default()
        }
    }

    pub fn set(&self, text: &str) {
        *self.content.lock().unwrap() = Some(text.to_string());
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardAccess for SharedClipboard {
    fn read(&mut self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    fn write(&mut self, text: &str) -> AssistResult<()> {
        if self.fail_write {
            return Err(AssistError::Clipboard("no display".into()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        *self.content.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

/// Model that replays queued responses and records every request.
///
/// When gated, each call blocks until the test releases one permit, which
/// keeps a generation in flight for as long as the test needs.
#[derive(Clone)]
pub struct ScriptedProvider {
    responses: Arc<Mutex<VecDeque<AssistResult<String>>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    gate: Option<Arc<Mutex<Receiver<()>>>>,
    configured: bool,
    panics: bool,
}

impl ScriptedProvider {
    pub fn new(responses: Vec<AssistResult<String>>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
            gate: None,
            configured: true,
            panics: false,
        }
    }

    pub fn replying(raw: &str) -> Self {
        Self::new(vec![Ok(raw.to_string())])
    }

    /// Provider plus the sender that releases one pending call per `send(())`.
    pub fn gated(responses: Vec<AssistResult<String>>) -> (Self, Sender<()>) {
        let (tx, rx) = channel();
        let mut provider = Self::new(responses);
        provider.gate = Some(Arc::new(Mutex::new(rx)));
        (provider, tx)
    }

    pub fn unconfigured() -> Self {
        let mut provider = Self::new(Vec::new());
        provider.configured = false;
        provider
    }

    /// Every call panics after being recorded.
    pub fn panicking() -> Self {
        let mut provider = Self::new(Vec::new());
        provider.panics = true;
        provider
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionProvider for ScriptedProvider {
    fn id(&self) -> &str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn complete(&self, request: &CompletionRequest) -> AssistResult<String> {
        self.requests.lock().unwrap().push(request.clone());
        if self.panics {
            panic!("scripted provider failure");
        }
        if let Some(gate) = &self.gate {
            let _ = gate.lock().unwrap().recv();
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(r#"["ok"]"#.to_string()))
    }
}
