//! Durable model artifact storage.

use std::fs;
use std::path::{Path, PathBuf};

use signal_core::ModelError;
use tracing::{debug, info, warn};

use crate::model::TrainedModel;

/// File-backed model artifact store.
///
/// Saves write to a sibling temp path followed by an atomic rename, so a
/// concurrent load never observes a partially-written artifact. A missing or
/// corrupt artifact degrades to "no model available" rather than an error.
#[derive(Debug, Clone)]
pub struct FileModelStore {
    path: PathBuf,
}

impl FileModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved model, if a readable artifact exists.
    pub fn load(&self) -> Option<TrainedModel> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved model artifact");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read model artifact");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(model) => {
                info!(path = %self.path.display(), "model artifact loaded");
                Some(model)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "corrupt model artifact, ignoring");
                None
            }
        }
    }

    /// Persist a model, replacing any previous artifact atomically.
    pub fn save(&self, model: &TrainedModel) -> Result<(), ModelError> {
        let bytes = serde_json::to_vec(model)
            .map_err(|e| ModelError::Artifact(format!("serialize model: {e}")))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;

        info!(path = %self.path.display(), "model artifact saved");
        Ok(())
    }
}
