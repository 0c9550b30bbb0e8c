#![allow(dead_code)]

use async_trait::async_trait;
use dnsdig_application::ports::{DnsQueryClient, DomainValidator};
use dnsdig_domain::{
    Domain, DomainRejection, QueryError, QueryType, RawAnswer, RecordType,
};
use std::collections::{HashMap, HashSet};
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

// ============================================================================
// Mock DnsQueryClient
// ============================================================================

/// Scripted query client. Types without a scripted reply answer with an
/// empty list.
#[derive(Clone, Default)]
pub struct MockDnsQueryClient {
    replies: HashMap<QueryType, Result<Vec<RawAnswer>, QueryError>>,
    delays: HashMap<QueryType, Duration>,
    panics: HashSet<QueryType>,
    calls: Arc<Mutex<Vec<QueryType>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockDnsQueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, record_type: RecordType, records: Vec<RawAnswer>) -> Self {
        self.replies.insert(record_type.into(), Ok(records));
        self
    }

    pub fn with_error(mut self, record_type: RecordType, error: QueryError) -> Self {
        self.replies.insert(record_type.into(), Err(error));
        self
    }

    pub fn with_reply_for(
        mut self,
        query_type: QueryType,
        reply: Result<Vec<RawAnswer>, QueryError>,
    ) -> Self {
        self.replies.insert(query_type, reply);
        self
    }

    /// Every type fails with the same error
    pub fn failing_all(mut self, error: QueryError) -> Self {
        for rt in RecordType::all() {
            self.replies.insert((*rt).into(), Err(error.clone()));
        }
        self
    }

    pub fn with_delay(mut self, record_type: RecordType, delay: Duration) -> Self {
        self.delays.insert(record_type.into(), delay);
        self
    }

    /// The query task for this type dies instead of answering
    pub fn panicking_on(mut self, record_type: RecordType) -> Self {
        self.panics.insert(record_type.into());
        self
    }

    pub async fn calls(&self) -> Vec<QueryType> {
        self.calls.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsQueryClient for MockDnsQueryClient {
    async fn query(
        &self,
        _domain: &Domain,
        query_type: &QueryType,
    ) -> Result<Vec<RawAnswer>, QueryError> {
        self.calls.lock().await.push(query_type.clone());

        let delay = self
            .delays
            .get(query_type)
            .copied()
            .unwrap_or(Duration::from_millis(10));

        if self.panics.contains(query_type) {
            tokio::time::sleep(delay).await;
            panic!("resolver crashed while querying {}", query_type);
        }

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(delay).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.replies
            .get(query_type)
            .cloned()
            .unwrap_or_else(|| Ok(vec![]))
    }

    fn transport_name(&self) -> &'static str {
        "mock"
    }
}

// ============================================================================
// Mock DomainValidator
// ============================================================================

/// Accepts anything that is non-empty, not an IP and contains a dot.
pub struct MockDomainValidator;

impl DomainValidator for MockDomainValidator {
    fn validate(&self, raw: &str) -> Result<Domain, DomainRejection> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainRejection::Empty);
        }
        if raw.parse::<IpAddr>().is_ok() {
            return Err(DomainRejection::IsIpLiteral(raw.to_string()));
        }
        if !raw.contains('.') {
            return Err(DomainRejection::Malformed(raw.to_string()));
        }
        Ok(Domain::from_normalized(raw.to_lowercase()))
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn example_domain() -> Domain {
    Domain::from_normalized("example.com")
}

pub fn a_record(ip: &str) -> RawAnswer {
    RawAnswer::new("example.com", 1, 3600, ip)
}
