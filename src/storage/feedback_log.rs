//! Feedback log — newline-delimited JSON, one `FeedbackRecord` per line.
//!
//! Storage file: `{data_dir}/preferences.jsonl`

use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::feedback::FeedbackRecord;
use crate::{AssistError, AssistResult};

/// Append-only record log.
pub trait FeedbackStore {
    fn append(&mut self, record: &FeedbackRecord) -> AssistResult<()>;
    /// Every readable record, in append order.
    fn read_all(&self) -> AssistResult<Vec<FeedbackRecord>>;
}

pub struct JsonlFeedbackStore {
    path: PathBuf,
}

impl JsonlFeedbackStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedbackStore for JsonlFeedbackStore {
    fn append(&mut self, record: &FeedbackRecord) -> AssistResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AssistError::Persistence(format!("create {}: {}", parent.display(), e))
            })?;
        }
        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AssistError::Persistence(format!("open {}: {}", self.path.display(), e)))?;
        file.write_all(line.as_bytes())
            .map_err(|e| AssistError::Persistence(format!("write {}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), chosen_len = record.chosen.chars().count(), "Feedback record appended");
        Ok(())
    }

    fn read_all(&self) -> AssistResult<Vec<FeedbackRecord>> {
        let file = match std::fs::File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        // Raw bytes per line: invalid UTF-8 counts as one malformed line.
        for line in BufReader::new(file).split(b'\n') {
            let line = line?;
            let line = line.trim_ascii();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_slice::<FeedbackRecord>(line) {
                Ok(record) => records.push(record),
                Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            tracing::warn!(path = %self.path.display(), skipped, "Skipped malformed feedback lines");
        }
        Ok(records)
    }
}
