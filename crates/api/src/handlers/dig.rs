use crate::{dto::DigParams, errors::ApiError, state::AppState};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use dnsdig_domain::ResolutionResult;
use tracing::{debug, instrument};

/// `GET /api/dig?domain=&type=`
///
/// A query string that does not deserialize (a repeated key, for instance)
/// counts as a request without a domain.
#[instrument(skip_all, name = "api_dig_query")]
pub async fn dig_query(
    State(state): State<AppState>,
    query: Result<Query<DigParams>, QueryRejection>,
) -> Result<Json<ResolutionResult>, ApiError> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            debug!(reason = %rejection, "Unreadable dig query string");
            DigParams::default()
        }
    };
    dig(&state, params).await
}

/// `POST /api/dig` with `{ "domain": ..., "type": ... }`.
///
/// An absent or unreadable body counts as a request without a domain.
#[instrument(skip_all, name = "api_dig_body")]
pub async fn dig_body(
    State(state): State<AppState>,
    body: Result<Json<DigParams>, JsonRejection>,
) -> Result<Json<ResolutionResult>, ApiError> {
    let params = match body {
        Ok(Json(params)) => params,
        Err(rejection) => {
            debug!(reason = %rejection, "Unreadable dig request body");
            DigParams::default()
        }
    };
    dig(&state, params).await
}

async fn dig(state: &AppState, params: DigParams) -> Result<Json<ResolutionResult>, ApiError> {
    let result = state
        .lookup
        .execute(params.domain.as_deref(), params.record_type.as_deref())
        .await?;

    debug!(
        outcomes = result.len(),
        failures = result.failure_count(),
        "Lookup completed"
    );

    Ok(Json(result))
}
