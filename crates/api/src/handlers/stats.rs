use crate::{dto::StatsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_stats")]
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.metrics.snapshot();

    debug!(
        lookups_total = snapshot.total_lookups,
        lookups_failed = snapshot.failed,
        "Statistics retrieved successfully"
    );

    Json(StatsResponse::from_snapshot(
        snapshot,
        state.started_at.elapsed().as_secs(),
    ))
}
