//! Suggestion engine — the orchestrator.
//!
//! Flow per tick:
//!   finished generations drained → foreground gate → clipboard read →
//!   filter → self-message check → context push → start or queue a cycle
//!
//! The model call is the only blocking step; it runs on a named worker
//! thread and reports back over an mpsc channel drained on the next tick
//! (or by `wait_for_generation`). Everything else runs to completion on the
//! caller's thread. No failure is fatal: every error ends the cycle and the
//! engine returns to `Idle`.

pub mod state;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::AssistantConfig;
use crate::constants::MAX_SUGGESTIONS;
use crate::feedback::FeedbackRecord;
use crate::intelligence::style_learner::{StyleLearner, StyleRefresh};
use crate::locale::Locale;
use crate::processing::context_buffer::ContextBuffer;
use crate::processing::prompt_builder::PromptBuilder;
use crate::processing::response_parser;
use crate::processing::text_filter::{FilterVerdict, TextFilter};
use crate::provider::{ClipboardAccess, CompletionProvider, CompletionRequest, ForegroundApp};
use crate::storage::{FeedbackStore, ProfileStore};
use crate::{AssistError, AssistResult};

pub use state::{EngineEvent, EngineState, EngineView};

/// External capabilities the engine drives.
pub struct Collaborators {
    pub clipboard: Box<dyn ClipboardAccess>,
    pub foreground: Box<dyn ForegroundApp>,
    pub provider: Arc<dyn CompletionProvider>,
    pub feedback: Box<dyn FeedbackStore>,
    pub profiles: Box<dyn ProfileStore>,
}

/// Inputs captured when a cycle starts. Feedback for the resulting
/// suggestions is recorded against this snapshot, not the live buffer.
#[derive(Debug, Clone)]
struct CycleSnapshot {
    id: u64,
    source_message: String,
    context: Vec<String>,
}

struct CycleOutcome {
    id: u64,
    result: AssistResult<String>,
}

pub struct SuggestionEngine {
    config: AssistantConfig,
    locale: Locale,
    filter: TextFilter,
    context: ContextBuffer,
    prompts: PromptBuilder,
    style: StyleLearner,

    clipboard: Box<dyn ClipboardAccess>,
    foreground: Box<dyn ForegroundApp>,
    provider: Arc<dyn CompletionProvider>,
    feedback: Box<dyn FeedbackStore>,
    profiles: Box<dyn ProfileStore>,

    state: EngineState,
    last_seen: String,
    suggestions: Vec<String>,
    status: String,
    /// Cycle that produced `suggestions`.
    last_cycle: Option<CycleSnapshot>,
    in_flight: Option<CycleSnapshot>,
    next_cycle_id: u64,

    outcome_tx: Sender<CycleOutcome>,
    outcome_rx: Receiver<CycleOutcome>,
}

impl SuggestionEngine {
    /// Build the engine and run the startup style refresh.
    pub fn new(config: AssistantConfig, collaborators: Collaborators) -> Self {
        let locale = config.locale;
        let (outcome_tx, outcome_rx) = channel();
        let mut engine = Self {
            filter: TextFilter::from_config(&config),
            context: ContextBuffer::new(config.context_window()),
            prompts: PromptBuilder::new(locale),
            style: StyleLearner::new(config.style.clone(), locale),
            clipboard: collaborators.clipboard,
            foreground: collaborators.foreground,
            provider: collaborators.provider,
            feedback: collaborators.feedback,
            profiles: collaborators.profiles,
            state: EngineState::Idle,
            last_seen: String::new(),
            suggestions: Vec::new(),
            status: locale.phrases().status_listening.to_string(),
            last_cycle: None,
            in_flight: None,
            next_cycle_id: 1,
            outcome_tx,
            outcome_rx,
            locale,
            config,
        };

        tracing::info!(
            provider = engine.provider.id(),
            model = %engine.config.model.model,
            context_window = engine.context.capacity(),
            context_enabled = engine.config.context.enabled,
            style_learning = engine.config.style.enabled,
            "Suggestion engine created"
        );
        engine.refresh_style();
        engine
    }

    // ── Read side ──

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn context_messages(&self) -> Vec<String> {
        self.context.snapshot()
    }

    pub fn style_learner(&self) -> &StyleLearner {
        &self.style
    }

    pub fn view(&self) -> EngineView {
        EngineView {
            status: self.status.clone(),
            suggestions: self.suggestions.clone(),
            state: self.state.clone(),
            context_len: self.context.len(),
            has_style_profile: self.style.profile().is_some(),
        }
    }

    // ── Polling ──

    /// One poll step: collect finished generations, then look at the clipboard.
    pub fn tick(&mut self) -> Vec<EngineEvent> {
        let mut events = self.drain_outcomes();

        if !self.filter.is_target_foreground(self.foreground.as_ref()) {
            return events;
        }
        let Some(raw) = self.clipboard.read() else {
            return events;
        };
        let text = raw.trim();
        match self.filter.verdict(text, &self.last_seen) {
            FilterVerdict::Accepted => {
                let text = text.to_string();
                events.extend(self.accept(text));
            }
            verdict => {
                tracing::trace!(verdict = verdict.as_str(), "Clipboard text ignored");
            }
        }
        events
    }

    /// Submit text directly (bypasses clipboard and foreground gate, not the filter).
    pub fn ingest(&mut self, text: &str) -> Vec<EngineEvent> {
        let text = text.trim();
        match self.filter.verdict(text, &self.last_seen) {
            FilterVerdict::Accepted => self.accept(text.to_string()),
            verdict => {
                tracing::debug!(verdict = verdict.as_str(), "Submitted text rejected");
                vec![EngineEvent::Rejected(verdict)]
            }
        }
    }

    fn accept(&mut self, text: String) -> Vec<EngineEvent> {
        self.last_seen = text.clone();

        if self.filter.is_self_authored(&text) {
            tracing::debug!("Ignoring self-authored message");
            self.status = self.locale.phrases().status_ignored_self.to_string();
            return vec![EngineEvent::SelfMessageIgnored];
        }

        if self.config.context.enabled {
            self.context.push(text.clone());
        }

        match &mut self.state {
            EngineState::Generating { queued } => {
                if queued.replace(text.clone()).is_some() {
                    tracing::debug!("Queued message superseded by a newer one");
                }
                self.status = self.locale.phrases().status_queued.to_string();
                vec![EngineEvent::MessageQueued { message: text }]
            }
            EngineState::Idle => self.start_generation(text),
        }
    }

    // ── Generation cycle ──

    fn start_generation(&mut self, message: String) -> Vec<EngineEvent> {
        if !self.provider.is_configured() {
            tracing::warn!(provider = self.provider.id(), "Provider not configured, skipping generation");
            self.status = self.locale.phrases().status_missing_api_key.to_string();
            return vec![EngineEvent::MissingApiKey];
        }

        let id = self.next_cycle_id;
        self.next_cycle_id += 1;
        let snapshot = CycleSnapshot {
            id,
            source_message: message.clone(),
            context: self.context.snapshot(),
        };

        // Style block is fixed here; a profile update mid-flight applies to the next cycle.
        let style_instruction = self.style.instruction_block();
        let user_prompt = self.prompts.build(
            &message,
            &snapshot.context,
            &style_instruction,
            self.config.context.enabled,
        );
        let request = CompletionRequest {
            system_prompt: self.config.system_prompt(),
            user_prompt,
            model: self.config.model.model.clone(),
            temperature: self.config.model.temperature,
            timeout_secs: self.config.model.timeout_secs,
        };

        let provider = Arc::clone(&self.provider);
        let tx = self.outcome_tx.clone();
        let spawned = std::thread::Builder::new()
            .name(format!("generation-{}", id))
            .spawn(move || {
                // A panicking provider must still end the cycle.
                let result = catch_unwind(AssertUnwindSafe(|| provider.complete(&request)))
                    .unwrap_or_else(|_| {
                        tracing::error!(cycle = id, "Generation worker panicked");
                        Err(AssistError::ModelCall("worker panicked".into()))
                    });
                // Receiver lives as long as the engine; a send error means it is gone.
                let _ = tx.send(CycleOutcome { id, result });
            });

        let context_len = snapshot.context.len();
        self.in_flight = Some(snapshot);
        self.state = EngineState::Generating { queued: None };

        if let Err(e) = spawned {
            tracing::error!(error = %e, "Failed to spawn generation worker");
            return self.complete_cycle(CycleOutcome {
                id,
                result: Err(e.into()),
            });
        }

        tracing::info!(cycle = id, context_len, message_len = message.chars().count(), "Generation started");
        self.status = self.locale.phrases().status_generating.to_string();
        vec![EngineEvent::GenerationStarted {
            message,
            context_len,
        }]
    }

    fn drain_outcomes(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            events.extend(self.complete_cycle(outcome));
        }
        events
    }

    /// Block until no generation is in flight (including queued follow-ups)
    /// or the timeout elapses.
    pub fn wait_for_generation(&mut self, timeout: Duration) -> Vec<EngineEvent> {
        let deadline = Instant::now() + timeout;
        let mut events = Vec::new();
        while self.state.is_generating() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::warn!("Timed out waiting for generation");
                break;
            }
            match self.outcome_rx.recv_timeout(remaining) {
                Ok(outcome) => events.extend(self.complete_cycle(outcome)),
                Err(_) => break,
            }
        }
        events
    }

    fn complete_cycle(&mut self, outcome: CycleOutcome) -> Vec<EngineEvent> {
        let is_current = self.in_flight.as_ref().is_some_and(|s| s.id == outcome.id);
        if !is_current {
            tracing::debug!(cycle = outcome.id, "Dropping outcome of a stale cycle");
            return Vec::new();
        }

        let snapshot = self.in_flight.take();
        let queued = match std::mem::take(&mut self.state) {
            EngineState::Generating { queued } => queued,
            EngineState::Idle => None,
        };

        let mut events = Vec::new();
        match outcome.result {
            Ok(raw) => {
                let mut parsed = response_parser::parse(&raw);
                parsed.truncate(MAX_SUGGESTIONS);
                tracing::info!(cycle = outcome.id, count = parsed.len(), "Suggestions ready");
                self.suggestions = parsed.clone();
                self.last_cycle = snapshot;
                self.status = if self.config.context.enabled {
                    self.locale.status_generated_with_context(self.context.len())
                } else {
                    self.locale.phrases().status_generated.to_string()
                };
                events.push(EngineEvent::SuggestionsReady {
                    suggestions: parsed,
                });
            }
            Err(e) => {
                tracing::warn!(cycle = outcome.id, error = %e, "Generation failed");
                self.suggestions.clear();
                self.last_cycle = None;
                let error = e.to_string();
                self.status = self.locale.status_failed(&error);
                events.push(EngineEvent::GenerationFailed { error });
            }
        }

        if let Some(next) = queued {
            tracing::debug!("Starting queued message");
            events.extend(self.start_generation(next));
        }
        events
    }

    // ── User actions ──

    /// Approve a suggestion: copy it, log feedback, relearn the style.
    pub fn like(&mut self, text: &str) -> Vec<EngineEvent> {
        let chosen = text.trim();
        if chosen.is_empty() {
            return vec![EngineEvent::Rejected(FilterVerdict::Empty)];
        }

        let clipboard_error = self.copy_to_clipboard(chosen).err();

        let (source_message, context) = match &self.last_cycle {
            Some(s) => (s.source_message.clone(), s.context.clone()),
            None => (String::new(), Vec::new()),
        };
        let record = FeedbackRecord::new(
            source_message,
            context,
            self.suggestions.clone(),
            chosen.to_string(),
            self.config.model.model.clone(),
        );

        if let Err(e) = self.feedback.append(&record) {
            tracing::error!(error = %e, "Failed to append feedback record");
            let error = e.to_string();
            self.status = self.locale.status_feedback_failed(&error);
            return vec![EngineEvent::FeedbackFailed { error }];
        }

        tracing::info!(chosen_len = chosen.chars().count(), "Suggestion liked");
        let mut events = vec![EngineEvent::Liked {
            text: chosen.to_string(),
        }];
        match clipboard_error {
            Some(error) => {
                self.status = self.locale.status_clipboard_failed(&error);
                events.push(EngineEvent::ClipboardWriteFailed { error });
            }
            None => self.status = self.locale.phrases().status_liked.to_string(),
        }
        events.extend(self.refresh_style());
        events
    }

    /// Copy every current suggestion, one per line.
    pub fn copy_all(&mut self) -> Vec<EngineEvent> {
        let text = self.suggestions.join("\n").trim().to_string();
        if text.is_empty() {
            return Vec::new();
        }
        if let Err(error) = self.copy_to_clipboard(&text) {
            self.status = self.locale.status_clipboard_failed(&error);
            return vec![EngineEvent::ClipboardWriteFailed { error }];
        }
        self.status = self.locale.phrases().status_copied_all.to_string();
        vec![EngineEvent::CopiedAll {
            count: self.suggestions.len(),
        }]
    }

    pub fn clear_context(&mut self) -> Vec<EngineEvent> {
        self.context.clear();
        tracing::info!("Context cleared");
        self.status = self.locale.phrases().status_context_cleared.to_string();
        vec![EngineEvent::ContextCleared]
    }

    /// Recompute the style profile from the feedback log and persist it.
    pub fn refresh_style(&mut self) -> Vec<EngineEvent> {
        match self
            .style
            .refresh(self.feedback.as_ref(), self.profiles.as_mut())
        {
            Ok(StyleRefresh::Updated { sample_count }) => {
                vec![EngineEvent::StyleProfileUpdated { sample_count }]
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist style profile");
                let error = e.to_string();
                self.status = self.locale.status_profile_failed(&error);
                vec![EngineEvent::StyleProfileFailed { error }]
            }
        }
    }

    /// Our own clipboard writes become `last_seen` so the next tick does not
    /// answer them as incoming messages.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<(), String> {
        match self.clipboard.write(text) {
            Ok(()) => {
                self.last_seen = text.trim().to_string();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                Err(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    const WAIT: Duration = Duration::from_secs(5);

    struct Harness {
        engine: SuggestionEngine,
        clipboard: SharedClipboard,
        provider: ScriptedProvider,
        feedback: MemoryFeedbackStore,
        profiles: MemoryProfileStore,
    }

    fn harness_with(config: AssistantConfig, provider: ScriptedProvider, feedback: MemoryFeedbackStore) -> Harness {
        let clipboard = SharedClipboard::default();
        let profiles = MemoryProfileStore::default();
        let engine = SuggestionEngine::new(
            config,
            Collaborators {
                clipboard: Box::new(clipboard.clone()),
                foreground: Box::new(FixedForeground(Some("WeChat".into()))),
                provider: Arc::new(provider.clone()),
                feedback: Box::new(feedback.clone()),
                profiles: Box::new(profiles.clone()),
            },
        );
        Harness {
            engine,
            clipboard,
            provider,
            feedback,
            profiles,
        }
    }

    fn harness(provider: ScriptedProvider) -> Harness {
        harness_with(AssistantConfig::default(), provider, MemoryFeedbackStore::default())
    }

    #[test]
    fn test_tick_generates_suggestions() {
        let mut h = harness(ScriptedProvider::replying(r#"["在的","稍等一下","怎么啦"]"#));
        h.clipboard.set("  在吗  ");

        let events = h.engine.tick();
        assert!(matches!(events[0], EngineEvent::GenerationStarted { ref message, context_len: 1 } if message == "在吗"));
        assert!(h.engine.state().is_generating());

        let events = h.engine.wait_for_generation(WAIT);
        assert_eq!(
            events,
            vec![EngineEvent::SuggestionsReady {
                suggestions: vec!["在的".into(), "稍等一下".into(), "怎么啦".into()]
            }]
        );
        assert_eq!(h.engine.state(), &EngineState::Idle);
        assert_eq!(h.engine.status(), "已生成（上下文 1 条）");

        let request = &h.provider.requests()[0];
        assert!(request.user_prompt.contains("1. 在吗"));
        assert!(request.system_prompt.contains("微信聊天助手"));
        assert_eq!(request.timeout_secs, 60);
    }

    #[test]
    fn test_same_clipboard_is_not_reprocessed() {
        let mut h = harness(ScriptedProvider::replying(r#"["a"]"#));
        h.clipboard.set("hello there");
        h.engine.tick();
        h.engine.wait_for_generation(WAIT);
        assert!(h.engine.tick().is_empty());
        assert_eq!(h.provider.requests().len(), 1);
    }

    #[test]
    fn test_keeps_at_most_three() {
        let mut h = harness(ScriptedProvider::replying(r#"["a","b","c","d"]"#));
        h.engine.ingest("hey you");
        h.engine.wait_for_generation(WAIT);
        assert_eq!(h.engine.suggestions(), &["a", "b", "c"]);
    }

    #[test]
    fn test_noise_and_self_messages() {
        let mut h = harness(ScriptedProvider::replying(r#"["a"]"#));
        assert_eq!(h.engine.ingest("12:30"), vec![EngineEvent::Rejected(FilterVerdict::Noise)]);

        h.clipboard.set("我：晚点到");
        assert_eq!(h.engine.tick(), vec![EngineEvent::SelfMessageIgnored]);
        assert_eq!(h.engine.status(), "已忽略疑似自己消息");
        assert!(h.engine.context_messages().is_empty());
        // recorded as last seen
        assert!(h.engine.tick().is_empty());
        assert!(h.provider.requests().is_empty());
    }

    #[test]
    fn test_foreground_gate_blocks_polling() {
        let clipboard = SharedClipboard::default();
        let provider = ScriptedProvider::replying(r#"["a"]"#);
        let mut engine = SuggestionEngine::new(
            AssistantConfig::default(),
            Collaborators {
                clipboard: Box::new(clipboard.clone()),
                foreground: Box::new(FixedForeground(Some("Safari".into()))),
                provider: Arc::new(provider.clone()),
                feedback: Box::new(MemoryFeedbackStore::default()),
                profiles: Box::new(MemoryProfileStore::default()),
            },
        );
        clipboard.set("are you there");
        assert!(engine.tick().is_empty());
        assert!(provider.requests().is_empty());
    }

    #[test]
    fn test_latest_message_queued_while_generating() {
        let (provider, release) = ScriptedProvider::gated(vec![
            Ok(r#"["first"]"#.to_string()),
            Ok(r#"["third"]"#.to_string()),
        ]);
        let mut h = harness(provider);

        h.clipboard.set("message one");
        h.engine.tick();
        h.clipboard.set("message two");
        assert_eq!(
            h.engine.tick(),
            vec![EngineEvent::MessageQueued { message: "message two".into() }]
        );
        h.clipboard.set("message three");
        h.engine.tick();
        assert_eq!(
            h.engine.state(),
            &EngineState::Generating { queued: Some("message three".into()) }
        );
        assert_eq!(h.engine.status(), "生成中，已缓存最新消息");

        release.send(()).unwrap();
        release.send(()).unwrap();
        let events = h.engine.wait_for_generation(WAIT);
        assert!(events.contains(&EngineEvent::GenerationStarted {
            message: "message three".into(),
            context_len: 3,
        }));
        assert_eq!(h.engine.suggestions(), &["third"]);

        // "message two" was superseded and never sent
        let requests = h.provider.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[1].user_prompt.contains("当前最新消息：\nmessage three"));
    }

    #[test]
    fn test_failure_clears_suggestions_and_recovers() {
        let provider = ScriptedProvider::new(vec![
            Ok(r#"["ok"]"#.to_string()),
            Err(AssistError::ModelCall("connection refused".into())),
            Ok(r#"["back"]"#.to_string()),
        ]);
        let mut h = harness(provider);

        h.engine.ingest("first message");
        h.engine.wait_for_generation(WAIT);
        assert_eq!(h.engine.suggestions(), &["ok"]);

        h.engine.ingest("second message");
        let events = h.engine.wait_for_generation(WAIT);
        assert!(matches!(events[0], EngineEvent::GenerationFailed { .. }));
        assert!(h.engine.suggestions().is_empty());
        assert!(h.engine.status().starts_with("生成失败："));
        assert!(h.engine.status().contains("connection refused"));
        assert_eq!(h.engine.state(), &EngineState::Idle);

        h.engine.ingest("third message");
        h.engine.wait_for_generation(WAIT);
        assert_eq!(h.engine.suggestions(), &["back"]);
    }

    #[test]
    fn test_panicking_provider_returns_to_idle() {
        let mut h = harness(ScriptedProvider::panicking());
        h.engine.ingest("first message");
        let events = h.engine.wait_for_generation(WAIT);
        assert!(matches!(events[0], EngineEvent::GenerationFailed { ref error } if error.contains("worker panicked")));
        assert_eq!(h.engine.state(), &EngineState::Idle);

        // next message starts a fresh cycle instead of queueing forever
        let events = h.engine.ingest("another message");
        assert!(matches!(events[0], EngineEvent::GenerationStarted { .. }));
        h.engine.wait_for_generation(WAIT);
        assert_eq!(h.provider.requests().len(), 2);
    }

    #[test]
    fn test_unconfigured_provider() {
        let mut h = harness(ScriptedProvider::unconfigured());
        assert_eq!(h.engine.ingest("hello there"), vec![EngineEvent::MissingApiKey]);
        assert_eq!(h.engine.state(), &EngineState::Idle);
    }

    #[test]
    fn test_window_of_three_numbers_last_three() {
        let mut config = AssistantConfig::default();
        config.context.window_size = 3;
        let mut h = harness_with(config, ScriptedProvider::new(Vec::new()), MemoryFeedbackStore::default());

        for msg in ["m-one", "m-two", "m-three", "m-four", "m-five"] {
            h.engine.ingest(msg);
            h.engine.wait_for_generation(WAIT);
        }
        assert_eq!(h.engine.context_messages(), vec!["m-three", "m-four", "m-five"]);

        let last = h.provider.requests().pop().unwrap();
        assert!(last.user_prompt.contains("1. m-three\n2. m-four\n3. m-five"));
        assert!(!last.user_prompt.contains("m-two"));
    }

    #[test]
    fn test_context_disabled_keeps_buffer_empty() {
        let mut config = AssistantConfig::default();
        config.context.enabled = false;
        let mut h = harness_with(config, ScriptedProvider::replying(r#"["x"]"#), MemoryFeedbackStore::default());
        h.engine.ingest("hello there");
        h.engine.wait_for_generation(WAIT);
        assert!(h.engine.context_messages().is_empty());
        assert_eq!(h.engine.status(), "已生成");
        assert!(h.provider.requests()[0].user_prompt.starts_with("对方消息："));
    }

    #[test]
    fn test_like_records_snapshot_of_producing_cycle() {
        let mut h = harness(ScriptedProvider::new(vec![Ok(r#"["好的","收到"]"#.to_string())]));
        h.engine.ingest("今晚吃饭吗");
        h.engine.wait_for_generation(WAIT);

        // buffer changes after the cycle must not leak into the record
        h.engine.clear_context();

        let events = h.engine.like("收到");
        assert_eq!(events[0], EngineEvent::Liked { text: "收到".into() });
        assert_eq!(h.engine.status(), "已点赞并复制");
        assert_eq!(h.clipboard.writes(), vec!["收到"]);

        let records = h.feedback.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].source_message, "今晚吃饭吗");
        assert_eq!(records[0].context_messages, vec!["今晚吃饭吗"]);
        assert_eq!(records[0].candidates, vec!["好的", "收到"]);
        assert_eq!(records[0].chosen, "收到");
        assert_eq!(records[0].model, AssistantConfig::default().model.model);

        // the copied reply is not treated as an incoming message
        assert!(h.engine.tick().is_empty());
    }

    #[test]
    fn test_like_crossing_threshold_updates_profile() {
        let existing = feedback_with_chosen(&["好的"; 4]);
        let mut h = harness_with(
            AssistantConfig::default(),
            ScriptedProvider::replying(r#"["好的"]"#),
            MemoryFeedbackStore::with_records(existing),
        );
        assert!(h.engine.style_learner().profile().is_none());

        h.engine.ingest("明天见面吗");
        h.engine.wait_for_generation(WAIT);
        let events = h.engine.like("好的");
        assert!(events.contains(&EngineEvent::StyleProfileUpdated { sample_count: 5 }));
        assert_eq!(h.profiles.saved().len(), 1);

        h.engine.ingest("几点呢");
        h.engine.wait_for_generation(WAIT);
        let prompt = &h.provider.requests()[1].user_prompt;
        assert!(prompt.contains("用户风格偏好（来自历史点赞反馈）"));
        assert!(prompt.contains("常见收尾：好的"));
    }

    #[test]
    fn test_feedback_failure_surfaces_status() {
        let mut h = harness_with(
            AssistantConfig::default(),
            ScriptedProvider::replying(r#"["a","b"]"#),
            MemoryFeedbackStore::failing(),
        );
        h.engine.ingest("hello there");
        h.engine.wait_for_generation(WAIT);

        let events = h.engine.like("a");
        assert!(matches!(events[0], EngineEvent::FeedbackFailed { .. }));
        assert!(h.engine.status().starts_with("记录偏好失败："));
        // suggestions untouched
        assert_eq!(h.engine.suggestions(), &["a", "b"]);
    }

    #[test]
    fn test_clipboard_write_failure_surfaces_status() {
        let clipboard = SharedClipboard::failing();
        let feedback = MemoryFeedbackStore::default();
        let mut engine = SuggestionEngine::new(
            AssistantConfig::default(),
            Collaborators {
                clipboard: Box::new(clipboard.clone()),
                foreground: Box::new(FixedForeground(Some("WeChat".into()))),
                provider: Arc::new(ScriptedProvider::replying(r#"["a","b"]"#)),
                feedback: Box::new(feedback.clone()),
                profiles: Box::new(MemoryProfileStore::default()),
            },
        );
        engine.ingest("hello there");
        engine.wait_for_generation(WAIT);

        let events = engine.like("a");
        assert_eq!(events[0], EngineEvent::Liked { text: "a".into() });
        assert!(matches!(events[1], EngineEvent::ClipboardWriteFailed { .. }));
        assert!(engine.status().starts_with("复制失败："));
        // the choice is still recorded
        assert_eq!(feedback.records().len(), 1);

        let events = engine.copy_all();
        assert!(matches!(events[0], EngineEvent::ClipboardWriteFailed { .. }));
        assert!(engine.status().starts_with("复制失败："));
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn test_copy_all_and_clear() {
        let mut h = harness(ScriptedProvider::replying(r#"["a","b"]"#));
        assert!(h.engine.copy_all().is_empty());

        h.engine.ingest("hello there");
        h.engine.wait_for_generation(WAIT);
        assert_eq!(h.engine.copy_all(), vec![EngineEvent::CopiedAll { count: 2 }]);
        assert_eq!(h.clipboard.writes(), vec!["a\nb"]);
        assert_eq!(h.engine.status(), "已复制全部");

        h.engine.clear_context();
        assert!(h.engine.context_messages().is_empty());
        assert_eq!(h.engine.status(), "上下文已清空");
    }

    #[test]
    fn test_startup_refresh_loads_profile() {
        let h = harness_with(
            AssistantConfig::default(),
            ScriptedProvider::new(Vec::new()),
            MemoryFeedbackStore::with_records(feedback_with_chosen(&["收到啦"; 6])),
        );
        assert!(h.engine.view().has_style_profile);
        assert_eq!(h.profiles.saved().len(), 1);
    }
}
