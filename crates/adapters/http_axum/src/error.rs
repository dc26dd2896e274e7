//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use flowgate_domain::error::FlowGateError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps [`FlowGateError`] to an HTTP response with appropriate status code.
pub struct ApiError(FlowGateError);

impl From<FlowGateError> for ApiError {
    fn from(err: FlowGateError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            FlowGateError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            FlowGateError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "storage unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
