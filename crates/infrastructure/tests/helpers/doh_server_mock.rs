#![allow(dead_code)]
use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Canned reply served for every request
#[derive(Clone)]
pub enum MockReply {
    Json { status: StatusCode, body: String },
    Wire(Vec<u8>),
    Stall(Duration),
}

/// A request as the mock saw it
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub accept: Option<String>,
    pub body: Vec<u8>,
}

struct MockState {
    reply: MockReply,
    seen: Mutex<Vec<SeenRequest>>,
}

/// In-process DoH endpoint on a random local port
pub struct MockDohServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockDohServer {
    pub async fn start(reply: MockReply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let state = Arc::new(MockState {
            reply,
            seen: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/dns-query", any(handle))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    pub async fn json(status: StatusCode, body: &str) -> Self {
        Self::start(MockReply::Json {
            status,
            body: body.to_string(),
        })
        .await
    }

    pub fn url(&self) -> String {
        format!("http://{}/dns-query", self.addr)
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().unwrap().clone()
    }
}

impl Drop for MockDohServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: axum::http::Method,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.seen.lock().unwrap().push(SeenRequest {
        method: method.to_string(),
        query,
        content_type: header_value(header::CONTENT_TYPE),
        accept: header_value(header::ACCEPT),
        body: body.to_vec(),
    });

    match state.reply.clone() {
        MockReply::Json { status, body } => (
            status,
            [(header::CONTENT_TYPE, "application/dns-json")],
            body,
        )
            .into_response(),
        MockReply::Wire(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/dns-message")],
            bytes,
        )
            .into_response(),
        MockReply::Stall(delay) => {
            tokio::time::sleep(delay).await;
            (StatusCode::OK, "{\"Status\":0}").into_response()
        }
    }
}

/// A URL on which nothing is listening
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/dns-query", addr)
}
