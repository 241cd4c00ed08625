//! Axum router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

use rfidgate_app::ports::DeviceRecordRepository;

use crate::api::{get_only, probe};
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the home greeting at `/` and the API under `/api`. Paths that match
/// no route fall through to the home handler. Every route, the fallback
/// included, is CORS-wrapped and `GET`-only.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: DeviceRecordRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get_only(probe::home))
        .nest("/api", crate::api::routes())
        .fallback(get_only(probe::home))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
