//! Device record service: read use-cases with per-operation deadlines.

use std::future::Future;
use std::time::Duration;

use rfidgate_domain::error::{GatewayError, NotFoundError, StorageError};
use rfidgate_domain::record::DeviceRecord;
use rfidgate_domain::rfid::Rfid;

use crate::ports::DeviceRecordRepository;

/// Deadline applied to each store operation.
///
/// Listing everything gets a longer budget because the payload is larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTimeouts {
    pub latest: Duration,
    pub all: Duration,
    pub by_rfid: Duration,
}

impl Default for QueryTimeouts {
    fn default() -> Self {
        Self {
            latest: Duration::from_secs(10),
            all: Duration::from_secs(15),
            by_rfid: Duration::from_secs(10),
        }
    }
}

/// Application service for reading device records.
pub struct DeviceRecordService<R> {
    repo: R,
    timeouts: QueryTimeouts,
}

impl<R: DeviceRecordRepository> DeviceRecordService<R> {
    /// Create a new service backed by the given repository, using the
    /// default deadlines.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            timeouts: QueryTimeouts::default(),
        }
    }

    /// Replace the per-operation deadlines.
    #[must_use]
    pub fn with_timeouts(mut self, timeouts: QueryTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// The deadlines in effect.
    #[must_use]
    pub fn timeouts(&self) -> QueryTimeouts {
        self.timeouts
    }

    /// Fetch the most recently inserted record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the collection is empty, or
    /// [`GatewayError::Storage`] on timeout or repository failure.
    #[tracing::instrument(skip(self))]
    pub async fn latest(&self) -> Result<DeviceRecord, GatewayError> {
        within("fetch_latest", self.timeouts.latest, self.repo.find_latest())
            .await?
            .ok_or_else(|| NotFoundError::Empty.into())
    }

    /// Fetch every record. An empty collection yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Storage`] on timeout or repository failure.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<DeviceRecord>, GatewayError> {
        within("fetch_all", self.timeouts.all, self.repo.find_all()).await
    }

    /// Fetch the first record carrying `rfid`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] naming the tag when nothing
    /// matches, or [`GatewayError::Storage`] on timeout or repository failure.
    #[tracing::instrument(skip(self, rfid), fields(rfid = %rfid))]
    pub async fn get_by_rfid(&self, rfid: &Rfid) -> Result<DeviceRecord, GatewayError> {
        within(
            "fetch_by_rfid",
            self.timeouts.by_rfid,
            self.repo.find_by_rfid(rfid),
        )
        .await?
        .ok_or_else(|| NotFoundError::Rfid(rfid.to_string()).into())
    }
}

/// Run `operation` under `limit`, dropping it when the deadline passes.
async fn within<T, F>(operation: &'static str, limit: Duration, fut: F) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    if let Ok(result) = tokio::time::timeout(limit, fut).await {
        result
    } else {
        tracing::warn!(operation, ?limit, "store operation abandoned at deadline");
        Err(StorageError::Timeout { operation, limit }.into())
    }
}
