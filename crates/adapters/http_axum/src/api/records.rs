//! JSON handlers for device records.

use axum::Json;
use axum::extract::{OriginalUri, State};
use axum::response::{IntoResponse, Response};

use rfidgate_app::ports::DeviceRecordRepository;
use rfidgate_domain::error::GatewayError;
use rfidgate_domain::record::DeviceRecord;
use rfidgate_domain::rfid::Rfid;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the single-record endpoints.
pub enum GetResponse {
    Ok(Json<DeviceRecord>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the list endpoint.
///
/// An empty collection is still `Ok` and serializes as `[]`.
pub enum ListResponse {
    Ok(Json<Vec<DeviceRecord>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/data`
pub async fn latest<R>(State(state): State<AppState<R>>) -> Result<GetResponse, ApiError>
where
    R: DeviceRecordRepository + Send + Sync + 'static,
{
    let record = state.record_service.latest().await?;
    Ok(GetResponse::Ok(Json(record)))
}

/// `GET /api/showall`
pub async fn show_all<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: DeviceRecordRepository + Send + Sync + 'static,
{
    let records = state.record_service.list_all().await?;
    tracing::debug!(count = records.len(), "listed device records");
    Ok(ListResponse::Ok(Json(records)))
}

/// `GET /api/data/:rfid`
///
/// The tag is parsed from the full request path so `/api/data/` is reported
/// as a malformed request rather than a lookup of an empty tag.
pub async fn by_rfid<R>(
    State(state): State<AppState<R>>,
    OriginalUri(uri): OriginalUri,
) -> Result<GetResponse, ApiError>
where
    R: DeviceRecordRepository + Send + Sync + 'static,
{
    let rfid = Rfid::from_path(uri.path()).map_err(GatewayError::from)?;
    let record = state.record_service.get_by_rfid(&rfid).await?;
    Ok(GetResponse::Ok(Json(record)))
}
