//! Status-change event log subsystem.
//!
//! # Data Flow
//! ```text
//! Monitoring cycle:
//!     status code changed  → log_status_change()
//!     source evicted       → log_eviction()
//!
//! FileEventLog (log.rs):
//!     append one human-readable line per event
//!     → rotate to <path>.1 past the size budget
//! ```
//!
//! # Design Decisions
//! - Fire-and-forget: a log write failure must never reach the
//!   monitoring loop, so the trait methods cannot fail
//! - Append-only, human-readable lines rather than structured records

pub mod log;

use uuid::Uuid;

pub use log::{FileEventLog, NullEventLog};

/// Append-only record of availability changes, as consumed by the
/// monitoring cycle.
pub trait EventLog: Send + Sync {
    /// Record that a source's status code changed between cycles.
    fn log_status_change(&self, id: Uuid, old_code: &str, new_code: &str);

    /// Record that a source exceeded the failure threshold and was removed.
    fn log_eviction(&self, id: Uuid, threshold: u32);
}
