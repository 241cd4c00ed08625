//! Handlers that never touch the store.

use axum::Json;
use axum::extract::OriginalUri;
use serde::Serialize;

/// Body of the liveness probe.
#[derive(Debug, Serialize)]
pub struct TestResponse {
    pub nilai: u32,
}

/// `GET /` and any path without a route of its own.
pub async fn home(OriginalUri(uri): OriginalUri) -> String {
    format!(
        "Welcome to the rfidgate device API!\nYou reached endpoint: {}\n",
        uri.path()
    )
}

/// `GET /api/test`: liveness probe independent of store health.
pub async fn test() -> Json<TestResponse> {
    Json(TestResponse { nilai: 2 })
}
