#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use dnsdig_api::{create_api_routes, AppState};
use dnsdig_application::ports::DnsQueryClient;
use dnsdig_application::use_cases::{LookupDomainUseCase, ResolveRecordsUseCase};
use dnsdig_domain::{Domain, QueryError, QueryType, RawAnswer, RecordType};
use dnsdig_infrastructure::{LookupMetrics, PslDomainValidator};
use http_body_util::BodyExt;
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

/// Query client with a fixed reply per type; unscripted types answer empty
#[derive(Clone, Default)]
pub struct ScriptedClient {
    replies: HashMap<QueryType, Result<Vec<RawAnswer>, QueryError>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, record_type: RecordType, records: Vec<RawAnswer>) -> Self {
        self.replies.insert(record_type.into(), Ok(records));
        self
    }

    pub fn fail(mut self, record_type: RecordType, error: QueryError) -> Self {
        self.replies.insert(record_type.into(), Err(error));
        self
    }
}

#[async_trait]
impl DnsQueryClient for ScriptedClient {
    async fn query(
        &self,
        _domain: &Domain,
        query_type: &QueryType,
    ) -> Result<Vec<RawAnswer>, QueryError> {
        self.replies
            .get(query_type)
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }
}

pub fn app(client: ScriptedClient) -> Router {
    let resolver = Arc::new(ResolveRecordsUseCase::new(Arc::new(client)));
    let lookup = Arc::new(LookupDomainUseCase::new(
        Arc::new(PslDomainValidator::new()),
        resolver,
    ));
    create_api_routes(AppState::new(lookup, LookupMetrics::new()))
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn a_record(ip: &str) -> RawAnswer {
    RawAnswer::new("example.com", 1, 3600, ip)
}
