//! Tracked source model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A tracked web resource and its derived availability state.
///
/// Created by the ingestion side with an empty status; after that the
/// monitoring cycle is the only writer until the source is evicted or
/// deleted externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedSource {
    /// Unique identifier, assigned at creation.
    pub id: Uuid,

    /// Full address to probe. Immutable after creation.
    pub full_link: String,

    /// Last recorded probe result: the numeric HTTP code as a string,
    /// `"0"` for timeout/connect-level failures, empty until first checked.
    #[serde(default)]
    pub status_code: String,

    /// Consecutive non-200 probes. Reset to 0 by a 200.
    #[serde(default)]
    pub check_failures: u32,

    /// True iff the last probe returned HTTP 200.
    #[serde(default)]
    pub is_available: bool,
}

impl TrackedSource {
    /// Create a new, not-yet-checked source.
    pub fn new(full_link: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_link: full_link.into(),
            status_code: String::new(),
            check_failures: 0,
            is_available: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_source_is_unchecked() {
        let source = TrackedSource::new("https://example.com/");
        assert_eq!(source.status_code, "");
        assert_eq!(source.check_failures, 0);
        assert!(!source.is_available);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let source = TrackedSource::new("https://example.com/a?b=c");
        let json = serde_json::to_string(&source).unwrap();
        let restored: TrackedSource = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, source);
    }
}
