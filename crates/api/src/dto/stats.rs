use dnsdig_infrastructure::dns::LookupMetricsSnapshot;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize, Debug, Clone)]
pub struct StatsResponse {
    pub lookups_total: u64,
    pub lookups_answered: u64,
    pub lookups_failed: u64,
    pub lookups_unreachable: u64,
    pub avg_lookup_time_ms: f64,
    pub by_type: BTreeMap<String, u64>,
    pub by_status: BTreeMap<String, u64>,
    pub uptime: u64,
}

impl StatsResponse {
    pub fn from_snapshot(snapshot: LookupMetricsSnapshot, uptime: u64) -> Self {
        Self {
            lookups_total: snapshot.total_lookups,
            lookups_answered: snapshot.answered,
            lookups_failed: snapshot.failed,
            lookups_unreachable: snapshot.unreachable,
            avg_lookup_time_ms: snapshot.avg_response_time_ms,
            by_type: snapshot.by_type,
            by_status: snapshot.by_status,
            uptime,
        }
    }
}
