use std::collections::HashMap;

use async_trait::async_trait;
use attendance::services::{ParticipantSource, RosterSink, TournamentSource};
use infra::repos::{FilterCriteria, TournamentTiming};
use infra::{ParticipantId, PersistenceError, RemoteError, RunRecord, TournamentRef};
use parking_lot::Mutex;

pub fn test_criteria() -> FilterCriteria {
    FilterCriteria {
        page_size: 50,
        region: "IN".to_string(),
        videogame_ids: vec![1386],
        after_date: Some(1_743_465_600),
        before_date: Some(1_746_057_600),
        timing: TournamentTiming::Past,
    }
}

pub fn ids(values: &[&str]) -> Vec<ParticipantId> {
    values.iter().map(|v| ParticipantId::from(*v)).collect()
}

/// Discovery stub: a fixed slug list, or a failure.
pub struct StubTournaments {
    result: Option<Vec<TournamentRef>>,
    calls: Mutex<usize>,
}

impl StubTournaments {
    pub fn returning(slugs: &[&str]) -> Self {
        Self {
            result: Some(slugs.iter().map(|s| TournamentRef::from(*s)).collect()),
            calls: Mutex::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            calls: Mutex::new(0),
        }
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        *self.calls.lock()
    }
}

#[async_trait]
impl TournamentSource for StubTournaments {
    async fn discover(
        &self,
        _criteria: &FilterCriteria,
    ) -> Result<Vec<TournamentRef>, RemoteError> {
        *self.calls.lock() += 1;
        self.result.clone().ok_or(RemoteError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }
}

/// Retrieval stub keyed by slug; unknown slugs behave like a failed fetch.
#[derive(Default)]
pub struct StubParticipants {
    by_slug: HashMap<String, Vec<ParticipantId>>,
    requested: Mutex<Vec<String>>,
}

impl StubParticipants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slug: &str, participants: &[&str]) -> Self {
        self.by_slug.insert(slug.to_string(), ids(participants));
        self
    }

    #[allow(dead_code)]
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl ParticipantSource for StubParticipants {
    async fn retrieve_participants(&self, tournament: &TournamentRef) -> Vec<ParticipantId> {
        self.requested.lock().push(tournament.to_string());
        self.by_slug
            .get(tournament.as_str())
            .cloned()
            .unwrap_or_default()
    }
}

/// Sink that keeps records in memory, optionally failing every write.
#[derive(Default)]
pub struct RecordingSink {
    fail: bool,
    records: Mutex<Vec<RunRecord>>,
}

impl RecordingSink {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn failing() -> Self {
        Self {
            fail: true,
            records: Mutex::new(Vec::new()),
        }
    }

    #[allow(dead_code)]
    pub fn records(&self) -> Vec<RunRecord> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl RosterSink for RecordingSink {
    async fn append(&self, record: &RunRecord) -> Result<(), PersistenceError> {
        if self.fail {
            return Err(PersistenceError::Io {
                path: "unwritable/stats.txt".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.records.lock().push(record.clone());
        Ok(())
    }
}
