//! Device record: one sensor capture tied to an RFID tag.
//!
//! The serde derive defines the wire JSON shape served over HTTP:
//! `_id`, `rfid`, `weight`, `height`, `pict1_url`, `pict2_url`, `pict3_url`,
//! `ingestion_timestamp`.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::time::Timestamp;

/// A single stored capture. Read-only from this system's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Store-assigned identifier; the greatest one is the latest record.
    #[serde(rename = "_id")]
    pub id: RecordId,
    /// Tag of the device that produced the capture.
    pub rfid: String,
    pub weight: f64,
    pub height: f64,
    pub pict1_url: String,
    pub pict2_url: String,
    pub pict3_url: String,
    /// When the capture was ingested.
    pub ingestion_timestamp: Timestamp,
}

impl DeviceRecord {
    /// Whether this record belongs to the given tag.
    #[must_use]
    pub fn matches_rfid(&self, rfid: &crate::rfid::Rfid) -> bool {
        self.rfid == rfid.as_str()
    }
}
