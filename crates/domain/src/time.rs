//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `ingestion_timestamp`.
pub type Timestamp = DateTime<Utc>;

/// Build a timestamp from milliseconds since the Unix epoch.
///
/// Returns `None` when the value is outside chrono's representable range.
#[must_use]
pub fn from_millis(millis: i64) -> Option<Timestamp> {
    DateTime::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_epoch_millis() {
        let ts = from_millis(1_700_000_000_123).unwrap();
        assert_eq!(ts.timestamp_millis(), 1_700_000_000_123);
    }

    #[test]
    fn should_return_none_when_out_of_range() {
        assert!(from_millis(i64::MAX).is_none());
    }
}
