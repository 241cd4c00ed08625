//! Shared application state for axum handlers.

use std::sync::Arc;

use rfidgate_app::ports::DeviceRecordRepository;
use rfidgate_app::services::record_service::DeviceRecordService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone`. Only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Read-only device record service.
    pub record_service: Arc<DeviceRecordService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            record_service: Arc::clone(&self.record_service),
        }
    }
}

impl<R> AppState<R>
where
    R: DeviceRecordRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(record_service: DeviceRecordService<R>) -> Self {
        Self {
            record_service: Arc::new(record_service),
        }
    }
}
