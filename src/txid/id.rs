//! The `TransactionId` value type.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::validate::{is_valid_long, is_valid_short};
use super::PREFIX;
use crate::error::TransactionIdError;

/// Which of the two shapes an ID has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionIdKind {
    /// `CS-YYYYMMDD-HHMMSS-NNNN`
    Long,
    /// `CS-NNNN-MMMM`
    Short,
}

/// A transaction ID known to have the long or the short shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap text the generator produced.
    ///
    /// # Panics
    ///
    /// Panics if `value` has neither shape.
    pub(crate) fn from_generated(value: String) -> Self {
        assert!(
            is_valid_long(&value) || is_valid_short(&value),
            "generated transaction id {value:?} has neither shape"
        );
        Self(value)
    }

    /// Parse and shape-check `value`.
    ///
    /// # Errors
    ///
    /// Returns [`TransactionIdError::Malformed`] when `value` has neither shape.
    pub fn parse(value: &str) -> Result<Self, TransactionIdError> {
        if is_valid_long(value) || is_valid_short(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(TransactionIdError::Malformed(value.to_string()))
        }
    }

    /// The ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Long or short.
    #[must_use]
    pub fn kind(&self) -> TransactionIdKind {
        if is_valid_long(&self.0) {
            TransactionIdKind::Long
        } else {
            TransactionIdKind::Short
        }
    }

    /// Local date and time embedded in a long ID.
    ///
    /// `None` for short IDs, and for long IDs whose digits do not name a
    /// real calendar date and time of day.
    #[must_use]
    pub fn issued_at(&self) -> Option<NaiveDateTime> {
        if self.kind() != TransactionIdKind::Long {
            return None;
        }
        // PREFIX-YYYYMMDD-HHMMSS
        let stamp = self.0.get(PREFIX.len() + 1..PREFIX.len() + 16)?;
        NaiveDateTime::parse_from_str(stamp, "%Y%m%d-%H%M%S").ok()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TransactionId {
    type Err = TransactionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TransactionId {
    type Error = TransactionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TransactionId> for String {
    fn from(id: TransactionId) -> Self {
        id.0
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parse_detects_kind() {
        let long: TransactionId = "CS-20241130-091502-4821".parse().unwrap();
        assert_eq!(long.kind(), TransactionIdKind::Long);
        let short: TransactionId = "CS-1234-5678".parse().unwrap();
        assert_eq!(short.kind(), TransactionIdKind::Short);
    }

    #[test]
    fn parse_rejects_other_text() {
        let err = TransactionId::parse("CS-2024113-123456-1234").unwrap_err();
        assert_eq!(err, TransactionIdError::Malformed("CS-2024113-123456-1234".into()));
    }

    #[test]
    fn issued_at_reads_the_long_timestamp() {
        let id = TransactionId::parse("CS-20241130-091502-4821").unwrap();
        let expected =
            NaiveDate::from_ymd_opt(2024, 11, 30).unwrap().and_hms_opt(9, 15, 2).unwrap();
        assert_eq!(id.issued_at(), Some(expected));
    }

    #[test]
    fn issued_at_is_none_for_impossible_dates_and_short_ids() {
        let impossible = TransactionId::parse("CS-20241399-256199-1234").unwrap();
        assert_eq!(impossible.issued_at(), None);
        let short = TransactionId::parse("CS-1234-5678").unwrap();
        assert_eq!(short.issued_at(), None);
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let id = TransactionId::parse("CS-1234-5678").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"CS-1234-5678\"");
        let back: TransactionId = serde_json::from_str("\"CS-1234-5678\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<TransactionId>("\"CS-12-5678\"").is_err());
    }

    #[test]
    #[should_panic(expected = "has neither shape")]
    fn from_generated_rejects_malformed_text() {
        let _ = TransactionId::from_generated("CS-20240229-070309-42".to_string());
    }

    #[test]
    fn display_is_the_raw_text() {
        let id = TransactionId::parse("CS-20241130-091502-4821").unwrap();
        assert_eq!(id.to_string(), "CS-20241130-091502-4821");
        assert_eq!(id.as_str(), id.as_ref());
    }
}
