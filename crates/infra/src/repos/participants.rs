use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::client::GraphqlTransport;
use crate::error::RemoteError;
use crate::models::{ParticipantId, TournamentRef};
use crate::queries::PARTICIPANTS_BY_TOURNAMENT;

use super::Connection;

/// Participants requested per tournament. Only one page is fetched.
pub const PARTICIPANT_PAGE_SIZE: i32 = 400;

#[derive(Deserialize)]
struct TournamentData {
    #[serde(default)]
    tournament: Option<TournamentParticipants>,
}

#[derive(Deserialize)]
struct TournamentParticipants {
    #[serde(default)]
    participants: Option<Connection<ParticipantNode>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ParticipantNode {
    #[serde(default)]
    gamer_tag: Option<String>,
    #[serde(default)]
    user: Option<UserNode>,
}

#[derive(Deserialize)]
struct UserNode {
    #[serde(default)]
    slug: Option<String>,
}

impl ParticipantNode {
    /// Only participants with a linked account count toward attendance.
    fn account_id(&self) -> Option<ParticipantId> {
        let slug = self.user.as_ref()?.slug.as_deref()?;
        if slug.is_empty() {
            return None;
        }
        Some(ParticipantId::from_user_slug(slug))
    }
}

#[derive(Clone)]
pub struct ParticipantRepo<C> {
    client: C,
}

impl<C: GraphqlTransport> ParticipantRepo<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Account-linked participants of `tournament`, in remote order.
    /// An unknown tournament yields an empty list.
    pub async fn fetch_participants(
        &self,
        tournament: &TournamentRef,
    ) -> Result<Vec<ParticipantId>, RemoteError> {
        let variables = json!({
            "tourneySlug": tournament.as_str(),
            "perPage": PARTICIPANT_PAGE_SIZE,
        });
        let data = self
            .client
            .execute(PARTICIPANTS_BY_TOURNAMENT, variables)
            .await?;
        let parsed: TournamentData = serde_json::from_value(data)?;

        let nodes = parsed
            .tournament
            .and_then(|t| t.participants)
            .map(Connection::into_nodes)
            .unwrap_or_default();

        let mut ids = Vec::with_capacity(nodes.len());
        for node in &nodes {
            match node.account_id() {
                Some(id) => ids.push(id),
                None => debug!(
                    "Skipping {} in {}: no linked account",
                    node.gamer_tag.as_deref().unwrap_or("<unnamed>"),
                    tournament
                ),
            }
        }
        Ok(ids)
    }

    /// Like [`fetch_participants`](Self::fetch_participants), but a failure is
    /// logged and treated as "no participants" so one tournament cannot sink a
    /// whole batch.
    pub async fn retrieve_participants(&self, tournament: &TournamentRef) -> Vec<ParticipantId> {
        match self.fetch_participants(tournament).await {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Failed to fetch participants for {}: {}", tournament, e);
                Vec::new()
            }
        }
    }
}
