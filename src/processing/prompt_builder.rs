//! User prompt assembly — context history, current message, style block,
//! output contract.

use crate::locale::Locale;

pub struct PromptBuilder {
    locale: Locale,
}

impl PromptBuilder {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Build the user prompt.
    ///
    /// With context memory on, `context` is listed `1..N` oldest to newest
    /// (placeholder when empty). The output contract always asks for a JSON
    /// array of exactly three replies; the parser does not rely on it.
    pub fn build(
        &self,
        current: &str,
        context: &[String],
        style_instruction: &str,
        context_enabled: bool,
    ) -> String {
        let p = self.locale.phrases();

        if !context_enabled {
            return format!(
                "{}\n{}\n\n{}\n{}\n{}",
                p.incoming_message_label, current, p.request_plain, style_instruction, p.output_rule
            );
        }

        let history = if context.is_empty() {
            p.no_context.to_string()
        } else {
            context
                .iter()
                .enumerate()
                .map(|(idx, msg)| format!("{}. {}", idx + 1, msg))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "{}\n{}\n\n{}\n{}\n\n{}\n{}\n{}",
            p.context_header,
            history,
            p.latest_message_label,
            current,
            p.request_with_context,
            style_instruction,
            p.output_rule
        )
    }
}
