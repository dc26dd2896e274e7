//! Axum router assembly.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use flowgate_app::ports::ReadingRepository;

use crate::api;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Exposes the device/operator surface at the root path. Includes a
/// permissive [`CorsLayer`] (any origin, method, and header) and a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG`
/// level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ReadingRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/data", post(api::readings::ingest::<R>))
        .route("/history", get(api::readings::history::<R>))
        .route("/metrics", get(api::metrics::summary::<R>))
        .route("/valve", get(api::valve::current::<R>))
        .route("/set_valve/{state}", post(api::valve::set::<R>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use flowgate_app::services::reading_service::ReadingService;
    use flowgate_app::services::usage_service::UsageService;
    use flowgate_app::valve_relay::ValveRelay;
    use flowgate_domain::error::FlowGateError;
    use flowgate_domain::reading::{NewReading, Reading, ReadingId, VolumeExtent};
    use tower::ServiceExt;

    struct StubReadingRepo;

    impl ReadingRepository for StubReadingRepo {
        async fn append(&self, reading: NewReading) -> Result<Reading, FlowGateError> {
            Ok(reading.into_reading(ReadingId::from_i64(1)))
        }
        async fn recent(&self, _limit: usize) -> Result<Vec<Reading>, FlowGateError> {
            Ok(vec![])
        }
        async fn range_extent(
            &self,
            _start: &str,
            _end: Option<&str>,
        ) -> Result<Option<VolumeExtent>, FlowGateError> {
            Ok(None)
        }
    }

    fn test_app() -> Router {
        build(AppState::new(
            ReadingService::new(StubReadingRepo),
            UsageService::new(StubReadingRepo),
            ValveRelay::new(),
        ))
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_accept_device_data_submission() {
        let body = r#"{
            "flow_rate": 1.5,
            "total_volume": 10.0,
            "quality_units": 98.0,
            "valve_state": true,
            "timestamp": "2024-01-01T00:00:00"
        }"#;

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/data")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_malformed_data_submission() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/data")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"flow_rate": "not a number"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn should_serve_valve_poll() {
        let response = test_app()
            .oneshot(Request::builder().uri("/valve").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_accept_known_valve_command() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/set_valve/open")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_reject_unknown_valve_command() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/set_valve/bogus")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_serve_metrics_summary() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_serve_reading_history() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/history")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
