use serde::Deserialize;
use serde_json::json;

use crate::client::GraphqlTransport;
use crate::error::RemoteError;
use crate::models::EventRef;
use crate::queries::EVENT_BY_SLUG;

#[derive(Deserialize)]
struct EventData {
    #[serde(default)]
    event: Option<EventNode>,
}

#[derive(Deserialize)]
struct EventNode {
    #[serde(default, deserialize_with = "super::lenient_id")]
    id: Option<u64>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Clone)]
pub struct EventRepo<C> {
    client: C,
}

impl<C: GraphqlTransport> EventRepo<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn event_slug(tournament: &str, event: &str) -> String {
        format!("tournament/{tournament}/event/{event}")
    }

    /// Look up one event of a tournament by their short slugs.
    pub async fn find_event(
        &self,
        tournament: &str,
        event: &str,
    ) -> Result<Option<EventRef>, RemoteError> {
        let variables = json!({ "slug": Self::event_slug(tournament, event) });
        let data = self.client.execute(EVENT_BY_SLUG, variables).await?;
        let parsed: EventData = serde_json::from_value(data)?;

        Ok(parsed.event.and_then(|node| {
            node.id.map(|id| EventRef {
                id,
                name: node.name,
            })
        }))
    }
}
