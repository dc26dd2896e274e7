//! JSON REST handlers for device readings.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use flowgate_app::ports::ReadingRepository;
use flowgate_domain::reading::{NewReading, Reading};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for a device data submission.
#[derive(Deserialize)]
pub struct IngestRequest {
    pub flow_rate: f64,
    pub total_volume: f64,
    /// Accepted for forward-compatibility with device firmware; never
    /// persisted.
    pub quality_units: f64,
    pub valve_state: bool,
    pub timestamp: String,
}

/// Acknowledgement body for a stored submission.
#[derive(Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// Device sample as exposed by the history endpoint (store id omitted).
#[derive(Serialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub flow_rate: f64,
    pub total_volume: f64,
    pub valve_state: bool,
}

impl From<Reading> for HistoryEntry {
    fn from(reading: Reading) -> Self {
        Self {
            timestamp: reading.timestamp,
            flow_rate: reading.flow_rate,
            total_volume: reading.total_volume,
            valve_state: reading.valve_state,
        }
    }
}

/// Possible responses from the ingest endpoint.
pub enum IngestResponse {
    /// 200 OK with `{"status": "success"}`.
    Success,
}

impl IntoResponse for IngestResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Success => Json(StatusBody { status: "success" }).into_response(),
        }
    }
}

/// Possible responses from the history endpoint.
pub enum HistoryResponse {
    Ok(Json<Vec<HistoryEntry>>),
}

impl IntoResponse for HistoryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `POST /data`
pub async fn ingest<R>(
    State(app): State<AppState<R>>,
    Json(req): Json<IngestRequest>,
) -> Result<IngestResponse, ApiError>
where
    R: ReadingRepository + Send + Sync + 'static,
{
    let reading = NewReading {
        timestamp: req.timestamp,
        flow_rate: req.flow_rate,
        total_volume: req.total_volume,
        valve_state: req.valve_state,
    };
    app.reading_service.record(reading).await?;
    Ok(IngestResponse::Success)
}

/// `GET /history`
pub async fn history<R>(State(app): State<AppState<R>>) -> Result<HistoryResponse, ApiError>
where
    R: ReadingRepository + Send + Sync + 'static,
{
    let readings = app.usage_service.history().await?;
    let entries = readings.into_iter().map(HistoryEntry::from).collect();
    Ok(HistoryResponse::Ok(Json(entries)))
}
