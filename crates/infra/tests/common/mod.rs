use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{
        header::{ACCEPT, AUTHORIZATION},
        HeaderMap, HeaderName, StatusCode,
    },
    routing::post,
    Router,
};
use infra::StartggClient;
use parking_lot::Mutex;
use serde_json::Value;
use tokio::net::TcpListener;

pub const TEST_TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub authorization: Option<String>,
    pub accept: Option<String>,
    pub body: Value,
}

impl RecordedRequest {
    #[allow(dead_code)]
    pub fn query(&self) -> &str {
        self.body["query"].as_str().unwrap_or_default()
    }

    #[allow(dead_code)]
    pub fn variables(&self) -> &Value {
        &self.body["variables"]
    }
}

type Responder = Arc<dyn Fn(&Value) -> (StatusCode, String) + Send + Sync>;

#[derive(Clone)]
struct MockState {
    responder: Responder,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-process stand-in for the GraphQL endpoint. Every request is recorded
/// and answered by the supplied responder.
pub struct MockGraphql {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockGraphql {
    pub async fn start<F>(responder: F) -> Self
    where
        F: Fn(&Value) -> (StatusCode, String) + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            responder: Arc::new(responder),
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/gql/alpha", post(handle))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock server failed");
        });

        Self { addr, requests }
    }

    /// Answer every request with `200 OK` and the JSON built by `f`.
    #[allow(dead_code)]
    pub async fn json<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::start(move |body| (StatusCode::OK, f(body).to_string())).await
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/gql/alpha", self.addr)
    }

    pub fn client(&self) -> StartggClient {
        StartggClient::new(self.endpoint(), TEST_TOKEN)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

async fn handle(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().push(RecordedRequest {
        authorization: header(AUTHORIZATION),
        accept: header(ACCEPT),
        body: body.clone(),
    });

    (state.responder)(&body)
}
