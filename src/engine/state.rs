use crate::processing::text_filter::FilterVerdict;

/// Generation latch. At most one cycle in flight; while generating, only
/// the latest accepted message is kept for the next cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Generating { queued: Option<String> },
}

impl EngineState {
    pub fn is_generating(&self) -> bool {
        matches!(self, Self::Generating { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Generating { queued: None } => "generating",
            Self::Generating { queued: Some(_) } => "generating_queued",
        }
    }
}

/// Observable transition produced by an engine call.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Explicitly submitted text did not pass the filter.
    Rejected(FilterVerdict),
    SelfMessageIgnored,
    /// Accepted while generating; replaces any older queued message.
    MessageQueued { message: String },
    GenerationStarted { message: String, context_len: usize },
    SuggestionsReady { suggestions: Vec<String> },
    GenerationFailed { error: String },
    MissingApiKey,
    ContextCleared,
    CopiedAll { count: usize },
    ClipboardWriteFailed { error: String },
    Liked { text: String },
    FeedbackFailed { error: String },
    StyleProfileUpdated { sample_count: usize },
    StyleProfileFailed { error: String },
}

/// Read-only snapshot for presentation layers.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineView {
    pub status: String,
    pub suggestions: Vec<String>,
    pub state: EngineState,
    pub context_len: usize,
    pub has_style_profile: bool,
}
