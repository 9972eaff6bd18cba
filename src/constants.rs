// === Message filter ===
pub const MIN_MESSAGE_CHARS: usize = 2;
pub const MAX_MESSAGE_CHARS: usize = 1200;

// === Monitor ===
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 800;
pub const DEFAULT_CONTEXT_WINDOW: usize = 6;
pub const FOREGROUND_LOOKUP_TIMEOUT_MS: u64 = 1000;

// === Suggestions ===
pub const MAX_SUGGESTIONS: usize = 3;

// === Model call ===
pub const DEFAULT_MODEL_TIMEOUT_SECS: u32 = 60;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:1234/v1";
pub const DEFAULT_MODEL: &str = "lmstudio-community-qwen3-4b-instruct-2507-mlx";
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key";
pub const API_KEY_ENV: &str = "REPLY_ASSISTANT_API_KEY";

// === Style learning ===
pub const DEFAULT_MIN_FEEDBACK_FOR_STYLE: usize = 5;
pub const DEFAULT_MAX_STYLE_SAMPLES: usize = 300;
pub const MAX_COMMON_ENDINGS: usize = 5;
pub const MIN_ENDING_OCCURRENCES: usize = 2;
pub const SHORT_SENTENCE_MAX_CHARS: usize = 18;
pub const MEDIUM_SENTENCE_MAX_CHARS: usize = 32;
pub const TONE_LOW_RATIO: f64 = 0.2;
pub const TONE_MODERATE_RATIO: f64 = 0.45;
pub const EMOJI_RANGE_START: char = '\u{1F300}';
pub const EMOJI_RANGE_END: char = '\u{1FAFF}';
