use async_trait::async_trait;

use infra::repos::AttendanceLog;
use infra::{PersistenceError, RunRecord};

/// Destination for finished runs.
#[async_trait]
pub trait RosterSink: Send + Sync {
    async fn append(&self, record: &RunRecord) -> Result<(), PersistenceError>;
}

#[async_trait]
impl RosterSink for AttendanceLog {
    async fn append(&self, record: &RunRecord) -> Result<(), PersistenceError> {
        AttendanceLog::append(self, record).await
    }
}
