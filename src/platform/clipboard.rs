use crate::provider::ClipboardAccess;
use crate::{AssistError, AssistResult};

/// System clipboard through `arboard`.
///
/// The handle is opened lazily and reopened after a failure, so a missing
/// display at startup does not disable polling for good.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> AssistResult<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| AssistError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| AssistError::Clipboard("clipboard unavailable".into()))
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read(&mut self) -> Option<String> {
        let clipboard = match self.handle() {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(error = %e, "Clipboard not available");
                return None;
            }
        };
        match clipboard.get_text() {
            Ok(text) => Some(text),
            Err(arboard::Error::ContentNotAvailable) => None,
            Err(e) => {
                tracing::debug!(error = %e, "Clipboard read failed, reopening next poll");
                self.inner = None;
                None
            }
        }
    }

    fn write(&mut self, text: &str) -> AssistResult<()> {
        let result = self.handle()?.set_text(text.to_string());
        result.map_err(|e| {
            self.inner = None;
            AssistError::Clipboard(e.to_string())
        })
    }
}
