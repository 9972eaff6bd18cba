//! Style profile document — single JSON file, overwritten on every update.
//!
//! Storage file: `{data_dir}/style_profile.json`

use std::path::{Path, PathBuf};

use crate::style_profile::StyleProfile;
use crate::{AssistError, AssistResult};

pub trait ProfileStore {
    /// Replace the stored document.
    fn save(&mut self, profile: &StyleProfile) -> AssistResult<()>;
    /// Last written document, if any.
    fn load(&self) -> Option<StyleProfile>;
}

pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProfileStore for JsonProfileStore {
    fn save(&mut self, profile: &StyleProfile) -> AssistResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AssistError::Persistence(format!("create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(profile)?;
        std::fs::write(&self.path, json)
            .map_err(|e| AssistError::Persistence(format!("write {}: {}", self.path.display(), e)))?;
        tracing::debug!(path = %self.path.display(), samples = profile.sample_count, "Style profile written");
        Ok(())
    }

    fn load(&self) -> Option<StyleProfile> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Invalid style profile, ignoring");
                None
            }
        }
    }
}
