use serde::Deserialize;
use serde_json::{json, Value};
use std::str::FromStr;
use tracing::{info, warn};

use crate::client::GraphqlTransport;
use crate::error::RemoteError;
use crate::models::{TournamentRef, TournamentSummary};
use crate::queries::{TOURNAMENT_SLUGS_BY_STATE, TOURNAMENT_SUMMARIES_BY_STATE};

use super::Connection;

/// Whether discovery asks for finished tournaments, upcoming ones, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TournamentTiming {
    #[default]
    Past,
    Upcoming,
    Any,
}

impl TournamentTiming {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentTiming::Past => "past",
            TournamentTiming::Upcoming => "upcoming",
            TournamentTiming::Any => "any",
        }
    }
}

impl FromStr for TournamentTiming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "past" => Ok(TournamentTiming::Past),
            "upcoming" => Ok(TournamentTiming::Upcoming),
            "any" => Ok(TournamentTiming::Any),
            other => Err(format!("Unknown tournament timing: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Upper bound on tournaments returned by the single discovery page.
    pub page_size: i32,
    /// `addrState` region code, e.g. `IN`.
    pub region: String,
    pub videogame_ids: Vec<u64>,
    /// Epoch seconds.
    pub after_date: Option<i64>,
    /// Epoch seconds.
    pub before_date: Option<i64>,
    pub timing: TournamentTiming,
}

impl FilterCriteria {
    pub(crate) fn variables(&self) -> Value {
        let (past, upcoming) = match self.timing {
            TournamentTiming::Past => (Some(true), None),
            TournamentTiming::Upcoming => (None, Some(true)),
            TournamentTiming::Any => (None, None),
        };
        json!({
            "perPage": self.page_size,
            "state": self.region,
            "videogameIds": self.videogame_ids,
            "afterDate": self.after_date,
            "beforeDate": self.before_date,
            "past": past,
            "upcoming": upcoming,
        })
    }
}

#[derive(Deserialize)]
struct TournamentsData {
    #[serde(default)]
    tournaments: Option<Connection<TournamentNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TournamentNode {
    #[serde(default, deserialize_with = "super::lenient_id")]
    id: Option<u64>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    addr_state: Option<String>,
}

/// Tournament discovery. Only the first page is requested; anything past
/// `page_size` is not returned.
#[derive(Clone)]
pub struct TournamentRepo<C> {
    client: C,
}

impl<C: GraphqlTransport> TournamentRepo<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Slugs of the tournaments matching `criteria`, in remote order.
    pub async fn discover(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<TournamentRef>, RemoteError> {
        let nodes = self.fetch_nodes(TOURNAMENT_SLUGS_BY_STATE, criteria).await?;

        let refs: Vec<TournamentRef> = nodes
            .into_iter()
            .filter_map(|node| node.slug)
            .filter(|slug| !slug.is_empty())
            .map(|slug| TournamentRef::from_remote_slug(&slug))
            .collect();

        for tournament in &refs {
            info!("Added tournament {}", tournament);
        }
        Ok(refs)
    }

    /// Id, name and region of the tournaments matching `criteria`.
    pub async fn list_summaries(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<TournamentSummary>, RemoteError> {
        let nodes = self
            .fetch_nodes(TOURNAMENT_SUMMARIES_BY_STATE, criteria)
            .await?;

        Ok(nodes
            .into_iter()
            .map(|node| TournamentSummary {
                id: node.id,
                name: node.name,
                addr_state: node.addr_state,
            })
            .collect())
    }

    /// A non-positive page size asks for nothing, so no request is made.
    async fn fetch_nodes(
        &self,
        query: &str,
        criteria: &FilterCriteria,
    ) -> Result<Vec<TournamentNode>, RemoteError> {
        if criteria.page_size <= 0 {
            warn!(
                "Page size {} requests no tournaments; skipping discovery",
                criteria.page_size
            );
            return Ok(Vec::new());
        }

        let data = self.client.execute(query, criteria.variables()).await?;
        let parsed: TournamentsData = serde_json::from_value(data)?;

        Ok(parsed
            .tournaments
            .map(Connection::into_nodes)
            .unwrap_or_default())
    }
}
