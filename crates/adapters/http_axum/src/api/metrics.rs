//! JSON REST handler for usage metrics.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use flowgate_app::ports::ReadingRepository;
use flowgate_domain::time::now;
use flowgate_domain::usage::UsageSummary;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the metrics endpoint.
pub enum SummaryResponse {
    Ok(Json<UsageSummary>),
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /metrics`
pub async fn summary<R>(State(app): State<AppState<R>>) -> Result<SummaryResponse, ApiError>
where
    R: ReadingRepository + Send + Sync + 'static,
{
    let summary = app.usage_service.usage_summary(now()).await?;
    Ok(SummaryResponse::Ok(Json(summary)))
}
