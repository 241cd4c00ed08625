//! Storage port: read-only repository over the device record collection.

use std::future::Future;

use rfidgate_domain::error::GatewayError;
use rfidgate_domain::record::DeviceRecord;
use rfidgate_domain::rfid::Rfid;

/// Read access to stored [`DeviceRecord`]s.
///
/// Implementations must be safe to share across concurrent requests.
/// Deadlines are applied by the caller; an implementation only has to be
/// cancel-safe when its future is dropped.
pub trait DeviceRecordRepository {
    /// The record with the greatest store-assigned id, if any.
    fn find_latest(
        &self,
    ) -> impl Future<Output = Result<Option<DeviceRecord>, GatewayError>> + Send;

    /// Every record in the collection, in store order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<DeviceRecord>, GatewayError>> + Send;

    /// The first record the store returns whose `rfid` equals `rfid`.
    ///
    /// Which one is returned when several share the tag is up to the store.
    fn find_by_rfid(
        &self,
        rfid: &Rfid,
    ) -> impl Future<Output = Result<Option<DeviceRecord>, GatewayError>> + Send;
}
