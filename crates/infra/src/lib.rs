pub mod client;
pub mod error;
pub mod models;
pub mod queries;
pub mod repos;

pub use client::{GraphqlTransport, StartggClient, DEFAULT_ENDPOINT};
pub use error::{PersistenceError, RemoteError};
pub use models::{EventRef, ParticipantId, Roster, RunRecord, TournamentRef, TournamentSummary};
