use crate::dto::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dnsdig_domain::DomainError;
use tracing::error;

/// Request-level failure rendered as `{ "error": ... }`.
///
/// Rejections and upstream outages use fixed messages; the rejection reason
/// and transport detail are logged, not returned.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            DomainError::MissingDomain | DomainError::InvalidDomainFormat(_) => {
                StatusCode::BAD_REQUEST
            }
            DomainError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match &self.0 {
            DomainError::MissingDomain => "Missing domain".to_string(),
            DomainError::InvalidDomainFormat(_) => "Invalid domain format".to_string(),
            DomainError::UpstreamUnavailable(_) => "Upstream DNS query failed".to_string(),
            internal @ DomainError::Internal(_) => internal.to_string(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Lookup request failed");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dnsdig_domain::DomainRejection;

    #[test]
    fn test_rejections_are_bad_requests() {
        let missing = ApiError(DomainError::MissingDomain);
        let invalid = ApiError(DomainError::InvalidDomainFormat(
            DomainRejection::IsIpLiteral("1.2.3.4".into()),
        ));

        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.message(), "Missing domain");
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.message(), "Invalid domain format");
    }

    #[test]
    fn test_upstream_detail_is_not_leaked() {
        let error = ApiError(DomainError::UpstreamUnavailable(
            "DoH request to https://10.0.0.1 failed".into(),
        ));
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(error.message(), "Upstream DNS query failed");
    }

    #[test]
    fn test_internal_keeps_detail() {
        let error = ApiError(DomainError::Internal("task panicked".into()));
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error.message(),
            "Unexpected error occurred while querying DNS: task panicked"
        );
    }
}
