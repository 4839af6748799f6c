//! Availability monitoring subsystem.
//!
//! # Data Flow
//! ```text
//! Scheduler (scheduler.rs):
//!     Periodic timer (first cycle immediate)
//!     → snapshot all sources from the store
//!     → one concurrent probe task per source
//!
//! Probe (probe.rs):
//!     Bounded-timeout GET
//!     → StatusCode / TimedOut / ConnectionFailed / OtherError
//!
//! Evaluator (evaluator.rs):
//!     (previous state, outcome, threshold)
//!     → updated record or eviction, plus events to emit
//!
//! Persistence:
//!     Update or delete through the store,
//!     then append events to the event log
//! ```
//!
//! # Design Decisions
//! - One probe per source per cycle; the next cycle is the retry
//! - A single probe failure never aborts the cycle or its siblings
//! - Cycles never overlap: the scheduler drains the whole task group
//!   before sleeping again

pub mod evaluator;
pub mod probe;
pub mod scheduler;

pub use evaluator::{evaluate, Event, Verdict};
pub use probe::{ProbeClient, ProbeOutcome};
pub use scheduler::Monitor;
