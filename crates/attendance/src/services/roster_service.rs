use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use infra::repos::{FilterCriteria, ParticipantRepo, TournamentRepo};
use infra::{GraphqlTransport, ParticipantId, RemoteError, Roster, TournamentRef};

use crate::error::RunError;

/// Produces the tournaments a run iterates over.
#[async_trait]
pub trait TournamentSource: Send + Sync {
    async fn discover(&self, criteria: &FilterCriteria)
        -> Result<Vec<TournamentRef>, RemoteError>;
}

/// Produces the participants of one tournament. Never fails: a tournament
/// that cannot be read contributes nothing.
#[async_trait]
pub trait ParticipantSource: Send + Sync {
    async fn retrieve_participants(&self, tournament: &TournamentRef) -> Vec<ParticipantId>;
}

#[async_trait]
impl<C: GraphqlTransport> TournamentSource for TournamentRepo<C> {
    async fn discover(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<TournamentRef>, RemoteError> {
        TournamentRepo::discover(self, criteria).await
    }
}

#[async_trait]
impl<C: GraphqlTransport> ParticipantSource for ParticipantRepo<C> {
    async fn retrieve_participants(&self, tournament: &TournamentRef) -> Vec<ParticipantId> {
        ParticipantRepo::retrieve_participants(self, tournament).await
    }
}

#[async_trait]
impl<T: TournamentSource + ?Sized> TournamentSource for Arc<T> {
    async fn discover(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<TournamentRef>, RemoteError> {
        (**self).discover(criteria).await
    }
}

#[async_trait]
impl<P: ParticipantSource + ?Sized> ParticipantSource for Arc<P> {
    async fn retrieve_participants(&self, tournament: &TournamentRef) -> Vec<ParticipantId> {
        (**self).retrieve_participants(tournament).await
    }
}

/// Builds the attendance roster: one discovery query, then one participant
/// query per tournament, strictly in sequence.
pub struct RosterService<T, P> {
    tournaments: T,
    participants: P,
}

impl<T: TournamentSource, P: ParticipantSource> RosterService<T, P> {
    pub fn new(tournaments: T, participants: P) -> Self {
        Self {
            tournaments,
            participants,
        }
    }

    /// Discovery failure aborts; per-tournament failures only drop that
    /// tournament's block. Entries are grouped by tournament in discovery
    /// order and duplicates are kept.
    pub async fn accumulate(&self, criteria: &FilterCriteria) -> Result<Roster, RunError> {
        let tournaments = self
            .tournaments
            .discover(criteria)
            .await
            .map_err(RunError::Discovery)?;

        info!(
            "Discovered {} tournaments in {}",
            tournaments.len(),
            criteria.region
        );

        let mut roster = Roster::new();
        for tournament in &tournaments {
            roster = self.record_attendance(tournament, roster).await;
        }

        info!("Roster complete with {} entries", roster.len());
        Ok(roster)
    }

    async fn record_attendance(&self, tournament: &TournamentRef, mut roster: Roster) -> Roster {
        let ids = self.participants.retrieve_participants(tournament).await;
        info!("Recorded {} participants from {}", ids.len(), tournament);
        roster.extend(ids);
        roster
    }
}
