//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build store/log/monitor → Spawn loop
//!
//! Shutdown (shutdown.rs):
//!     ctrl-c → broadcast signal → monitor exits at the sleep boundary
//! ```
//!
//! # Design Decisions
//! - The monitor only observes shutdown between cycles; in-flight
//!   probes are bounded by their own timeout

pub mod shutdown;

pub use shutdown::Shutdown;
