//! RFID tags and the path parsing that yields them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Segment index of the RFID in `/api/data/<rfid>` once split on `/`.
const RFID_SEGMENT: usize = 3;

/// Externally meaningful device identifier, used as a lookup key.
///
/// Never empty. The store does not enforce uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rfid(String);

impl Rfid {
    /// Wrap a tag value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyRfid`] if `value` is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::EmptyRfid);
        }
        Ok(Self(value))
    }

    /// Borrow the tag value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Pull the RFID out of a request path shaped `/api/data/<rfid>`.
    ///
    /// The path is percent-decoded before it is split, so `%2F` acts as a
    /// separator. Only the fourth segment is read; anything after it is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedPath`] when the decoded path is
    /// not UTF-8, the prefix differs, the fourth segment is missing, or it
    /// is empty (`/api/data/`).
    pub fn from_path(path: &str) -> Result<Self, ValidationError> {
        let decoded = urlencoding::decode(path).map_err(|_| ValidationError::MalformedPath)?;
        let segments: Vec<&str> = decoded.split('/').collect();
        if segments.get(..RFID_SEGMENT) != Some(&["", "api", "data"][..]) {
            return Err(ValidationError::MalformedPath);
        }
        match segments.get(RFID_SEGMENT) {
            Some(value) if !value.is_empty() => Ok(Self((*value).to_string())),
            _ => Err(ValidationError::MalformedPath),
        }
    }
}

impl fmt::Display for Rfid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
