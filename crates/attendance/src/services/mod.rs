pub mod roster_service;
pub mod sink;

pub use roster_service::{ParticipantSource, RosterService, TournamentSource};
pub use sink::RosterSink;
