//! JSON REST handlers for the valve command relay.

use axum::Json;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use flowgate_app::ports::ReadingRepository;
use flowgate_domain::error::FlowGateError;
use flowgate_domain::valve::ValveCommand;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successful command update.
#[derive(Serialize)]
pub struct SetValveBody {
    pub status: &'static str,
    pub valve: ValveCommand,
}

/// Possible responses from the poll endpoint.
pub enum CurrentResponse {
    /// 200 OK with the bare command string (`"open"` / `"close"`).
    Ok(Json<ValveCommand>),
}

impl IntoResponse for CurrentResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the set endpoint.
pub enum SetResponse {
    Ok(Json<SetValveBody>),
}

impl IntoResponse for SetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /valve` — the command devices poll for.
pub async fn current<R>(State(app): State<AppState<R>>) -> CurrentResponse
where
    R: ReadingRepository + Send + Sync + 'static,
{
    CurrentResponse::Ok(Json(app.valve_relay.current().await))
}

/// `POST /set_valve/{state}`
pub async fn set<R>(
    State(app): State<AppState<R>>,
    Path(requested): Path<String>,
) -> Result<SetResponse, ApiError>
where
    R: ReadingRepository + Send + Sync + 'static,
{
    let command = requested
        .parse::<ValveCommand>()
        .map_err(|err| ApiError::from(FlowGateError::Validation(err)))?;
    let valve = app.valve_relay.set(command).await;
    Ok(SetResponse::Ok(Json(SetValveBody {
        status: "success",
        valve,
    })))
}
