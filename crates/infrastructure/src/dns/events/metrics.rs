use dashmap::DashMap;
use dnsdig_application::events::{LookupEvent, LookupStatus};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lookup metrics tracker
///
/// Atomic counters for the totals and DashMap for the per-key breakdowns,
/// so the consumer task and the stats endpoint never contend on a lock.
#[derive(Clone)]
pub struct LookupMetrics {
    total_lookups: Arc<AtomicU64>,
    answered: Arc<AtomicU64>,
    failed: Arc<AtomicU64>,
    unreachable: Arc<AtomicU64>,
    total_response_time_us: Arc<AtomicU64>,

    /// Per query type token
    type_counts: Arc<DashMap<String, u64>>,

    /// Per outcome label (NOERROR, failure code, TRANSPORT)
    status_counts: Arc<DashMap<String, u64>>,
}

/// Point-in-time copy of the counters, serialized by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupMetricsSnapshot {
    pub total_lookups: u64,
    pub answered: u64,
    pub failed: u64,
    pub unreachable: u64,
    pub avg_response_time_ms: f64,
    pub by_type: BTreeMap<String, u64>,
    pub by_status: BTreeMap<String, u64>,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self {
            total_lookups: Arc::new(AtomicU64::new(0)),
            answered: Arc::new(AtomicU64::new(0)),
            failed: Arc::new(AtomicU64::new(0)),
            unreachable: Arc::new(AtomicU64::new(0)),
            total_response_time_us: Arc::new(AtomicU64::new(0)),
            type_counts: Arc::new(DashMap::new()),
            status_counts: Arc::new(DashMap::new()),
        }
    }

    pub fn track(&self, event: &LookupEvent) {
        self.total_lookups.fetch_add(1, Ordering::Relaxed);

        match event.status {
            LookupStatus::Answered { .. } => &self.answered,
            LookupStatus::Failed { .. } => &self.failed,
            LookupStatus::Unreachable => &self.unreachable,
        }
        .fetch_add(1, Ordering::Relaxed);

        self.total_response_time_us
            .fetch_add(event.response_time_us, Ordering::Relaxed);

        self.type_counts
            .entry(event.query_type.as_str().to_string())
            .and_modify(|c| *c += 1)
            .or_insert(1);

        self.status_counts
            .entry(event.status.label().to_string())
            .and_modify(|c| *c += 1)
            .or_insert(1);
    }

    pub fn total_lookups(&self) -> u64 {
        self.total_lookups.load(Ordering::Relaxed)
    }

    pub fn answered(&self) -> u64 {
        self.answered.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn unreachable(&self) -> u64 {
        self.unreachable.load(Ordering::Relaxed)
    }

    pub fn avg_response_time_ms(&self) -> f64 {
        let total = self.total_lookups();
        if total == 0 {
            return 0.0;
        }
        self.total_response_time_us.load(Ordering::Relaxed) as f64 / total as f64 / 1000.0
    }

    pub fn type_count(&self, query_type: &str) -> u64 {
        self.type_counts.get(query_type).map(|v| *v).unwrap_or(0)
    }

    pub fn status_count(&self, label: &str) -> u64 {
        self.status_counts.get(label).map(|v| *v).unwrap_or(0)
    }

    pub fn snapshot(&self) -> LookupMetricsSnapshot {
        LookupMetricsSnapshot {
            total_lookups: self.total_lookups(),
            answered: self.answered(),
            failed: self.failed(),
            unreachable: self.unreachable(),
            avg_response_time_ms: self.avg_response_time_ms(),
            by_type: collect(&self.type_counts),
            by_status: collect(&self.status_counts),
        }
    }
}

fn collect(counts: &DashMap<String, u64>) -> BTreeMap<String, u64> {
    counts
        .iter()
        .map(|entry| (entry.key().clone(), *entry.value()))
        .collect()
}

impl Default for LookupMetrics {
    fn default() -> Self {
        Self::new()
    }
}
