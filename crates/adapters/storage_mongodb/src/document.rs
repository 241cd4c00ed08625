//! Stored representation of a device record.
//!
//! Field names match the wire JSON; only `_id` (an `ObjectId`) and
//! `ingestion_timestamp` (a BSON datetime, millisecond precision) differ in type.

use mongodb::bson::DateTime;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use rfidgate_domain::id::{InvalidRecordId, RecordId};
use rfidgate_domain::record::DeviceRecord;

/// One document of the device collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub rfid: String,
    pub weight: f64,
    pub height: f64,
    pub pict1_url: String,
    pub pict2_url: String,
    pub pict3_url: String,
    pub ingestion_timestamp: DateTime,
}

/// A document that cannot be mapped to or from a [`DeviceRecord`].
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("ingestion timestamp {0}ms is outside the supported range")]
    TimestampOutOfRange(i64),

    #[error("record id is not a valid object id")]
    ObjectId(#[from] mongodb::bson::oid::Error),

    #[error(transparent)]
    RecordId(#[from] InvalidRecordId),
}

impl DeviceDocument {
    /// Convert into the domain record served to clients.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::TimestampOutOfRange`] if the stored datetime
    /// cannot be represented as a UTC timestamp.
    pub fn into_record(self) -> Result<DeviceRecord, DocumentError> {
        let millis = self.ingestion_timestamp.timestamp_millis();
        let ingestion_timestamp = rfidgate_domain::time::from_millis(millis)
            .ok_or(DocumentError::TimestampOutOfRange(millis))?;
        let id: RecordId = self.id.to_hex().parse()?;

        Ok(DeviceRecord {
            id,
            rfid: self.rfid,
            weight: self.weight,
            height: self.height,
            pict1_url: self.pict1_url,
            pict2_url: self.pict2_url,
            pict3_url: self.pict3_url,
            ingestion_timestamp,
        })
    }

    /// Build the stored form of a domain record.
    ///
    /// Sub-millisecond precision of the timestamp is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::ObjectId`] if the record id is not an
    /// object id.
    pub fn from_record(record: &DeviceRecord) -> Result<Self, DocumentError> {
        Ok(Self {
            id: ObjectId::parse_str(record.id.as_str())?,
            rfid: record.rfid.clone(),
            weight: record.weight,
            height: record.height,
            pict1_url: record.pict1_url.clone(),
            pict2_url: record.pict2_url.clone(),
            pict3_url: record.pict3_url.clone(),
            ingestion_timestamp: DateTime::from_millis(
                record.ingestion_timestamp.timestamp_millis(),
            ),
        })
    }
}
