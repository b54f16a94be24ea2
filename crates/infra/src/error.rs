use std::path::PathBuf;

use thiserror::Error;

/// Failure of a single exchange with the GraphQL endpoint.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("remote returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("graphql errors: {}", .0.join("; "))]
    Graphql(Vec<String>),

    #[error("response has no data")]
    MissingData,

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure to append a run to the attendance log.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
