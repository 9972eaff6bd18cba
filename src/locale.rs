//! Locale — every user-facing phrase (prompts, style wording, status lines).
//!
//! `zh` is the default and matches the chat app this assistant targets.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

/// Fixed phrases for one locale.
pub struct Phrasebook {
    // Prompt
    pub default_system_prompt: &'static str,
    pub context_header: &'static str,
    pub no_context: &'static str,
    pub latest_message_label: &'static str,
    pub incoming_message_label: &'static str,
    pub request_plain: &'static str,
    pub request_with_context: &'static str,
    pub output_rule: &'static str,

    // Style
    pub concise_short: &'static str,
    pub concise_medium: &'static str,
    pub concise_long: &'static str,
    pub question_low: &'static str,
    pub question_moderate: &'static str,
    pub question_high: &'static str,
    pub exclamation_low: &'static str,
    pub exclamation_moderate: &'static str,
    pub exclamation_high: &'static str,
    pub emoji_rarely: &'static str,
    pub emoji_sometimes: &'static str,
    pub emoji_often: &'static str,
    pub anti_repetition: &'static str,
    pub rule_separator: &'static str,
    pub tone_separator: &'static str,
    pub ending_separator: &'static str,
    pub style_disabled: &'static str,
    pub style_no_profile: &'static str,
    pub style_profile_label: &'static str,

    // Status
    pub status_listening: &'static str,
    pub status_ignored_self: &'static str,
    pub status_queued: &'static str,
    pub status_generating: &'static str,
    pub status_generated: &'static str,
    pub status_copied_all: &'static str,
    pub status_context_cleared: &'static str,
    pub status_liked: &'static str,
    pub status_missing_api_key: &'static str,
}

static ZH: Phrasebook = Phrasebook {
    default_system_prompt: "你是一个微信聊天助手。请基于对方消息，生成3条不同风格的中文回复建议：\
        1) 友好简短 2) 详细专业 3) 幽默自然。要求：自然口语、不过度夸张、每条不超过60字。",
    context_header: "以下是最近复制到剪贴板的消息（按时间从旧到新）：",
    no_context: "(无)",
    latest_message_label: "当前最新消息：",
    incoming_message_label: "对方消息：",
    request_plain: "请输出3条不同风格的中文回复建议。",
    request_with_context: "请结合上下文输出3条不同风格的中文回复建议。",
    output_rule: "请严格输出一个 JSON 数组，长度必须是3。示例：[\"回复1\",\"回复2\",\"回复3\"]。\
        每个元素必须是一条可直接发送的完整回复。不要输出任何额外文字、序号、解释或代码块。",

    concise_short: "偏短句",
    concise_medium: "中等长度",
    concise_long: "偏长句",
    question_low: "少用反问",
    question_moderate: "偶尔反问",
    question_high: "常用提问句",
    exclamation_low: "少用感叹号",
    exclamation_moderate: "适度感叹",
    exclamation_high: "偏热情感叹",
    emoji_rarely: "几乎不用 emoji",
    emoji_sometimes: "偶尔使用 emoji",
    emoji_often: "较常使用 emoji",
    anti_repetition: "尽量贴近以上风格，但保持自然，不要机械复读",
    rule_separator: "；",
    tone_separator: "，",
    ending_separator: "、",
    style_disabled: "风格约束：自然口语，简洁清晰。",
    style_no_profile: "风格约束：自然口语，简洁清晰。若有合适语气可轻微幽默。",
    style_profile_label: "用户风格偏好（来自历史点赞反馈）：",

    status_listening: "自动监听中（微信前台 + 剪贴板）",
    status_ignored_self: "已忽略疑似自己消息",
    status_queued: "生成中，已缓存最新消息",
    status_generating: "生成中...",
    status_generated: "已生成",
    status_copied_all: "已复制全部",
    status_context_cleared: "上下文已清空",
    status_liked: "已点赞并复制",
    status_missing_api_key: "请在 config.json 中设置 model.api_key",
};

static EN: Phrasebook = Phrasebook {
    default_system_prompt: "You are a chat reply assistant. Based on the other person's message, \
        write 3 reply suggestions in different styles: 1) friendly and short 2) detailed and \
        professional 3) light and humorous. Keep them conversational, not exaggerated, under 60 words each.",
    context_header: "Recent messages copied to the clipboard (oldest to newest):",
    no_context: "(none)",
    latest_message_label: "Latest message:",
    incoming_message_label: "Their message:",
    request_plain: "Write 3 reply suggestions in different styles.",
    request_with_context: "Using the context above, write 3 reply suggestions in different styles.",
    output_rule: "Output exactly one JSON array of length 3. Example: [\"reply 1\",\"reply 2\",\"reply 3\"]. \
        Each element must be one complete reply ready to send. No extra text, numbering, explanations or code blocks.",

    concise_short: "short sentences",
    concise_medium: "medium length",
    concise_long: "long sentences",
    question_low: "rarely asks questions",
    question_moderate: "sometimes asks questions",
    question_high: "often asks questions",
    exclamation_low: "few exclamation marks",
    exclamation_moderate: "moderate exclamation",
    exclamation_high: "enthusiastic exclamation",
    emoji_rarely: "almost no emoji",
    emoji_sometimes: "occasional emoji",
    emoji_often: "frequent emoji",
    anti_repetition: "stay close to this style but keep it natural, never repeat phrases mechanically",
    rule_separator: "; ",
    tone_separator: ", ",
    ending_separator: ", ",
    style_disabled: "Style: natural and conversational, concise and clear.",
    style_no_profile: "Style: natural and conversational, concise and clear. A touch of humor is fine when it fits.",
    style_profile_label: "User style preference (from previously liked replies): ",

    status_listening: "Listening (target app + clipboard)",
    status_ignored_self: "Ignored a message that looks like your own",
    status_queued: "Generating, latest message queued",
    status_generating: "Generating...",
    status_generated: "Generated",
    status_copied_all: "Copied all suggestions",
    status_context_cleared: "Context cleared",
    status_liked: "Liked and copied",
    status_missing_api_key: "Set model.api_key in config.json",
};

impl Locale {
    pub fn phrases(&self) -> &'static Phrasebook {
        match self {
            Self::Zh => &ZH,
            Self::En => &EN,
        }
    }

    pub fn length_rule(&self, preference: &str, avg_length: usize) -> String {
        match self {
            Self::Zh => format!("句长：{}（平均{}字）", preference, avg_length),
            Self::En => format!("Length: {} (about {} characters)", preference, avg_length),
        }
    }

    pub fn tone_rule(&self, question: &str, exclamation: &str, emoji: &str) -> String {
        let sep = self.phrases().tone_separator;
        match self {
            Self::Zh => format!("语气：{question}{sep}{exclamation}{sep}{emoji}"),
            Self::En => format!("Tone: {question}{sep}{exclamation}{sep}{emoji}"),
        }
    }

    pub fn endings_rule(&self, endings: &[String]) -> String {
        let joined = endings.join(self.phrases().ending_separator);
        match self {
            Self::Zh => format!("常见收尾：{}", joined),
            Self::En => format!("Common endings: {}", joined),
        }
    }

    pub fn status_generated_with_context(&self, context_len: usize) -> String {
        match self {
            Self::Zh => format!("已生成（上下文 {} 条）", context_len),
            Self::En => format!("Generated (context: {} messages)", context_len),
        }
    }

    pub fn status_failed(&self, error: &str) -> String {
        match self {
            Self::Zh => format!("生成失败：{}", error),
            Self::En => format!("Generation failed: {}", error),
        }
    }

    pub fn status_feedback_failed(&self, error: &str) -> String {
        match self {
            Self::Zh => format!("记录偏好失败：{}", error),
            Self::En => format!("Failed to record preference: {}", error),
        }
    }

    pub fn status_clipboard_failed(&self, error: &str) -> String {
        match self {
            Self::Zh => format!("复制失败：{}", error),
            Self::En => format!("Clipboard write failed: {}", error),
        }
    }

    pub fn status_profile_failed(&self, error: &str) -> String {
        match self {
            Self::Zh => format!("写入风格画像失败：{}", error),
            Self::En => format!("Failed to write style profile: {}", error),
        }
    }
}
