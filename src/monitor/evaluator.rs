//! Availability state transitions.
//!
//! # State Transitions
//! ```text
//! 200      → available, failure counter reset
//! anything → unavailable, failure counter + 1
//! counter > threshold → evict (delete, no final status write)
//! ```
//!
//! # Design Decisions
//! - Pure and total: same inputs always produce the same verdict and
//!   the same events
//! - Eviction is checked before change detection and short-circuits
//!   the status update

use uuid::Uuid;

use crate::monitor::probe::ProbeOutcome;
use crate::store::TrackedSource;

/// What the cycle should do with a source after evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Persist the updated record.
    Update(TrackedSource),
    /// Delete the record; it exceeded the failure threshold.
    Evict,
}

/// Events to append to the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The stored status code changed between cycles.
    StatusChanged {
        id: Uuid,
        old_code: String,
        new_code: String,
    },
    /// The source exceeded the failure threshold and is removed.
    Evicted { id: Uuid, threshold: u32 },
}

/// Map a probe outcome and the previous state to the new state.
///
/// Eviction is strict: a source at exactly `failure_threshold`
/// consecutive failures is retained; one more failure evicts it.
pub fn evaluate(
    previous: &TrackedSource,
    outcome: &ProbeOutcome,
    failure_threshold: u32,
) -> (Verdict, Vec<Event>) {
    let code = outcome.normalized_code();

    let mut updated = previous.clone();
    if outcome.is_ok() {
        updated.is_available = true;
        updated.check_failures = 0;
    } else {
        updated.is_available = false;
        updated.check_failures = previous.check_failures.saturating_add(1);
    }

    if updated.check_failures > failure_threshold {
        let events = vec![Event::Evicted {
            id: previous.id,
            threshold: failure_threshold,
        }];
        return (Verdict::Evict, events);
    }

    let mut events = Vec::new();
    if code != previous.status_code {
        events.push(Event::StatusChanged {
            id: previous.id,
            old_code: previous.status_code.clone(),
            new_code: code.clone(),
        });
    }
    updated.status_code = code;

    (Verdict::Update(updated), events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_with(status_code: &str, check_failures: u32, is_available: bool) -> TrackedSource {
        let mut source = TrackedSource::new("https://example.com/");
        source.status_code = status_code.to_string();
        source.check_failures = check_failures;
        source.is_available = is_available;
        source
    }

    #[test]
    fn test_success_resets_failure_counter() {
        let previous = source_with("0", 4, false);

        let (verdict, events) = evaluate(&previous, &ProbeOutcome::StatusCode(200), 5);

        match verdict {
            Verdict::Update(updated) => {
                assert!(updated.is_available);
                assert_eq!(updated.check_failures, 0);
                assert_eq!(updated.status_code, "200");
            }
            Verdict::Evict => panic!("a 200 must never evict"),
        }
        assert_eq!(
            events,
            vec![Event::StatusChanged {
                id: previous.id,
                old_code: "0".to_string(),
                new_code: "200".to_string(),
            }]
        );
    }

    #[test]
    fn test_connection_failure_marks_unavailable() {
        let previous = source_with("200", 0, true);

        let (verdict, events) = evaluate(&previous, &ProbeOutcome::ConnectionFailed, 5);

        match verdict {
            Verdict::Update(updated) => {
                assert!(!updated.is_available);
                assert_eq!(updated.check_failures, 1);
                assert_eq!(updated.status_code, "0");
            }
            Verdict::Evict => panic!("first failure must not evict"),
        }
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            Event::StatusChanged { old_code, new_code, .. }
                if old_code == "200" && new_code == "0"
        ));
    }

    #[test]
    fn test_http_error_code_passes_through() {
        let previous = source_with("200", 0, true);

        let (verdict, _) = evaluate(&previous, &ProbeOutcome::StatusCode(503), 5);

        match verdict {
            Verdict::Update(updated) => {
                assert!(!updated.is_available);
                assert_eq!(updated.status_code, "503");
                assert_eq!(updated.check_failures, 1);
            }
            Verdict::Evict => panic!("first failure must not evict"),
        }
    }

    #[test]
    fn test_retained_at_exact_threshold() {
        // threshold 5, already at 4 failures: the 5th failure reaches
        // the threshold exactly and the source is kept.
        let previous = source_with("0", 4, false);

        let (verdict, events) = evaluate(&previous, &ProbeOutcome::TimedOut, 5);

        match verdict {
            Verdict::Update(updated) => assert_eq!(updated.check_failures, 5),
            Verdict::Evict => panic!("count == threshold must be retained"),
        }
        // Code is still "0": no change event either.
        assert!(events.is_empty());
    }

    #[test]
    fn test_evicted_past_threshold() {
        let previous = source_with("0", 5, false);

        let (verdict, events) = evaluate(&previous, &ProbeOutcome::TimedOut, 5);

        assert_eq!(verdict, Verdict::Evict);
        assert_eq!(
            events,
            vec![Event::Evicted {
                id: previous.id,
                threshold: 5,
            }]
        );
    }

    #[test]
    fn test_eviction_suppresses_status_change() {
        // The stored code would change from "503" to "0", but eviction
        // short-circuits the update: no change event, no final write.
        let previous = source_with("503", 5, false);

        let (verdict, events) = evaluate(&previous, &ProbeOutcome::ConnectionFailed, 5);

        assert_eq!(verdict, Verdict::Evict);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::Evicted { .. }));
    }

    #[test]
    fn test_no_event_when_code_unchanged() {
        let previous = source_with("200", 0, true);

        let (_, events) = evaluate(&previous, &ProbeOutcome::StatusCode(200), 5);

        assert!(events.is_empty());
    }

    #[test]
    fn test_first_evaluation_logs_change_from_empty() {
        let previous = TrackedSource::new("https://example.com/");

        let (_, events) = evaluate(&previous, &ProbeOutcome::StatusCode(200), 5);

        assert!(matches!(
            &events[0],
            Event::StatusChanged { old_code, new_code, .. }
                if old_code.is_empty() && new_code == "200"
        ));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let previous = source_with("200", 0, true);
        let outcome = ProbeOutcome::TimedOut;

        let first = evaluate(&previous, &outcome, 5);
        let second = evaluate(&previous, &outcome, 5);

        assert_eq!(first, second);
    }

    #[test]
    fn test_availability_matches_status_code() {
        let outcomes = [
            ProbeOutcome::StatusCode(200),
            ProbeOutcome::StatusCode(301),
            ProbeOutcome::StatusCode(404),
            ProbeOutcome::TimedOut,
            ProbeOutcome::ConnectionFailed,
            ProbeOutcome::OtherError("boom".into()),
        ];
        for outcome in outcomes {
            let previous = source_with("", 0, false);
            if let (Verdict::Update(updated), _) = evaluate(&previous, &outcome, 5) {
                assert_eq!(updated.is_available, updated.status_code == "200");
            }
        }
    }
}
