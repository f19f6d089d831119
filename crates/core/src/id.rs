//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory record.
///
/// Opaque: the store assigns it (e.g. `rec_cq7h2...`) and nothing in the
/// domain interprets its contents. The only rule is that it is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_id("RecordId: empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_id_is_rejected() {
        assert!(matches!(RecordId::new(""), Err(DomainError::InvalidId(_))));
        assert!("".parse::<RecordId>().is_err());
    }

    #[test]
    fn id_is_opaque_and_round_trips_through_display() {
        let id: RecordId = "rec_cq7h2 a/b".parse().unwrap();
        assert_eq!(id.to_string(), "rec_cq7h2 a/b");
        assert_eq!(id.as_str(), "rec_cq7h2 a/b");
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        let ok: RecordId = serde_json::from_str("\"rec_1\"").unwrap();
        assert_eq!(ok.as_str(), "rec_1");
        assert!(serde_json::from_str::<RecordId>("\"\"").is_err());
    }
}
