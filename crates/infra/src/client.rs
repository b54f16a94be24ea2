use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::RemoteError;

pub const DEFAULT_ENDPOINT: &str = "https://api.start.gg/gql/alpha";

/// One request/response exchange against a GraphQL endpoint.
///
/// Implementations return the `data` object of the response. No retries are
/// attempted; callers decide whether a failure is fatal.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, RemoteError>;
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphqlErrorMessage {
    #[serde(default)]
    message: String,
}

/// Bearer-authenticated client for the tournament service.
#[derive(Clone)]
pub struct StartggClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl StartggClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Build a client whose requests are abandoned after `timeout`.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GraphqlTransport for StartggClient {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, RemoteError> {
        debug!("POST {} variables={}", self.endpoint, variables);

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json")
            .json(&GraphqlRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let parsed: GraphqlResponse = serde_json::from_slice(&bytes)?;
        extract_data(parsed)
    }
}

/// Errors alongside data are tolerated as long as some root field resolved;
/// when every root field is null the errors are the result.
fn extract_data(response: GraphqlResponse) -> Result<Value, RemoteError> {
    let messages: Vec<String> = response
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();

    match response.data {
        Some(data) if !data.is_null() && (messages.is_empty() || !all_roots_null(&data)) => {
            if !messages.is_empty() {
                warn!("Partial GraphQL response: {}", messages.join("; "));
            }
            Ok(data)
        }
        _ if !messages.is_empty() => Err(RemoteError::Graphql(messages)),
        _ => Err(RemoteError::MissingData),
    }
}

fn all_roots_null(data: &Value) -> bool {
    data.as_object()
        .is_some_and(|roots| roots.values().all(Value::is_null))
}
