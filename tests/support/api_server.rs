use axum::{
    extract::{Query, RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What the stand-in API saw for one request
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub raw_query: Option<String>,
    pub params: HashMap<String, String>,
    pub user_agent: Option<String>,
}

#[derive(Clone)]
struct ApiState {
    status: StatusCode,
    body: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

/// Local HTTP server that answers `/api/search` with a fixed response
pub struct TestApiServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
}

impl TestApiServer {
    pub fn received(&self) -> Vec<ReceivedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn search_handler(
    State(state): State<ApiState>,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.received.lock().unwrap().push(ReceivedRequest {
        raw_query,
        params,
        user_agent,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

/// Start a server on an ephemeral port that always replies with `status` and `body`
pub async fn spawn_api_server(status: StatusCode, body: impl Into<String>) -> TestApiServer {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = ApiState {
        status,
        body: body.into(),
        received: received.clone(),
    };

    let app = Router::new()
        .route("/api/search", get(search_handler))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test API server");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test API server failed");
    });

    TestApiServer {
        base_url: format!("http://{}", addr),
        received,
    }
}

/// An address nothing is listening on
pub async fn unused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to reserve a free port");
    let addr = listener.local_addr().expect("Failed to read local address");
    drop(listener);
    format!("http://{}", addr)
}
