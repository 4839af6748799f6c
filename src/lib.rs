//! Availability monitoring for tracked web resources.
//!
//! # Architecture Overview
//!
//! ```text
//!            ┌───────────────────────────────────────────────┐
//!            │                   MONITOR                      │
//!            │                                                │
//!            │  ┌───────────┐   snapshot   ┌──────────────┐   │
//!            │  │ scheduler │◀────────────│    store     │   │
//!            │  │  (cycle)  │──update/────▶│ (sources)    │   │
//!            │  └─────┬─────┘   delete     └──────────────┘   │
//!            │        │ fan-out                               │
//!            │        ▼                                       │
//!            │  ┌───────────┐    GET     ┌────────────────┐   │
//!            │  │   probe   │───────────▶│ tracked URLs   │   │
//!            │  └─────┬─────┘  timeout   └────────────────┘   │
//!            │        │ outcome                               │
//!            │        ▼                                       │
//!            │  ┌───────────┐  events    ┌──────────────┐     │
//!            │  │ evaluator │───────────▶│  event log   │     │
//!            │  └───────────┘            └──────────────┘     │
//!            │                                                │
//!            │  Cross-cutting: config, observability,         │
//!            │  lifecycle (shutdown)                          │
//!            └───────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod events;
pub mod monitor;
pub mod store;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::MonitorConfig;
pub use lifecycle::Shutdown;
pub use monitor::Monitor;
