//! Store-assigned record identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Length of the hex form of a store-assigned identifier (12 bytes).
pub const RECORD_ID_HEX_LEN: usize = 24;

/// Opaque identifier assigned by the document store on insertion.
///
/// Held as its lowercase hex form. Identifiers are issued in increasing
/// order and the hex form has a fixed width, so the derived [`Ord`] matches
/// issuance order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Access the hex representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Returned when a string is not a 24-digit hex identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid record id '{0}'")]
pub struct InvalidRecordId(String);

impl FromStr for RecordId {
    type Err = InvalidRecordId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == RECORD_ID_HEX_LEN && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(s.to_ascii_lowercase()))
        } else {
            Err(InvalidRecordId(s.to_string()))
        }
    }
}

impl TryFrom<String> for RecordId {
    type Error = InvalidRecordId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}
