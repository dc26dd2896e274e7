//! Shared application state for axum handlers.

use std::sync::Arc;

use flowgate_app::ports::ReadingRepository;
use flowgate_app::services::reading_service::ReadingService;
use flowgate_app::services::usage_service::UsageService;
use flowgate_app::valve_relay::ValveRelay;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone`
/// is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Ingestion service for device samples.
    pub reading_service: Arc<ReadingService<R>>,
    /// Usage aggregation and history service.
    pub usage_service: Arc<UsageService<R>>,
    /// Shared operator valve command.
    pub valve_relay: Arc<ValveRelay>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            reading_service: Arc::clone(&self.reading_service),
            usage_service: Arc::clone(&self.usage_service),
            valve_relay: Arc::clone(&self.valve_relay),
        }
    }
}

impl<R> AppState<R>
where
    R: ReadingRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        reading_service: ReadingService<R>,
        usage_service: UsageService<R>,
        valve_relay: ValveRelay,
    ) -> Self {
        Self {
            reading_service: Arc::new(reading_service),
            usage_service: Arc::new(usage_service),
            valve_relay: Arc::new(valve_relay),
        }
    }
}
