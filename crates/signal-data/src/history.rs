//! File-backed history record sink.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use signal_core::{DataError, HistoricalRecord, HistoryStore};
use tracing::info;

/// Append-only history store writing one JSON record per line.
///
/// Each `append` opens the file, writes the batch, and closes it again, so
/// successive training runs accumulate into the same file.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl HistoryStore for FileHistoryStore {
    async fn append(&self, records: &[HistoricalRecord]) -> Result<(), DataError> {
        if records.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DataError::StoreError(e.to_string()))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| DataError::StoreError(e.to_string()))?;

        let mut buf = Vec::new();
        for record in records {
            serde_json::to_writer(&mut buf, record)
                .map_err(|e| DataError::StoreError(e.to_string()))?;
            buf.push(b'\n');
        }
        file.write_all(&buf)
            .map_err(|e| DataError::StoreError(e.to_string()))?;

        info!(
            path = %self.path.display(),
            count = records.len(),
            "history records persisted"
        );
        Ok(())
    }
}
