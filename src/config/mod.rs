//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → handed to the monitor at construction
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup and immutable afterwards
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::EventLogConfig;
pub use schema::MonitorConfig;
pub use schema::ObservabilityConfig;
pub use schema::StatusCheckConfig;
pub use schema::StoreConfig;
