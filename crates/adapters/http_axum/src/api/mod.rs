//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod probe;
#[allow(clippy::missing_errors_doc)]
pub mod records;

use axum::Router;
use axum::handler::Handler;
use axum::routing::{MethodRouter, get};

use rfidgate_app::ports::DeviceRecordRepository;

use crate::cors;
use crate::error::method_not_allowed;
use crate::state::AppState;

/// Register `handler` for `GET`, answer every other method with 405, and
/// wrap the result in the CORS middleware.
///
/// `HEAD` needs its own endpoint: axum would otherwise serve it through the
/// `GET` handler.
pub fn get_only<H, T, S>(handler: H) -> MethodRouter<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    cors::wrap(
        get(handler)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}

/// Build the `/api` sub-router.
///
/// `/data` serves the latest record while `/data/` and everything beneath it
/// is an RFID lookup; the trailing slash is the tie-break.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: DeviceRecordRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/test", get_only(probe::test))
        .route("/data", get_only(records::latest::<R>))
        .route("/data/", get_only(records::by_rfid::<R>))
        .route("/data/{*rfid}", get_only(records::by_rfid::<R>))
        .route("/showall", get_only(records::show_all::<R>))
}
