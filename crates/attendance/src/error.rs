use infra::RemoteError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// Nothing to iterate over, so the whole run is abandoned.
    #[error("tournament discovery failed: {0}")]
    Discovery(RemoteError),
}
