use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::PersistenceError;
use crate::models::RunRecord;

/// Append-only text log of attendance runs. Existing content is never
/// rewritten; each run adds one block.
#[derive(Debug, Clone)]
pub struct AttendanceLog {
    path: PathBuf,
}

impl AttendanceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `record`, creating the file if needed.
    pub async fn append(&self, record: &RunRecord) -> Result<(), PersistenceError> {
        let wrap = |source| PersistenceError::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(wrap)?;

        file.write_all(record.render().as_bytes())
            .await
            .map_err(wrap)?;
        file.flush().await.map_err(wrap)?;
        Ok(())
    }
}
