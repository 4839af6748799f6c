//! Source storage subsystem.
//!
//! # Data Flow
//! ```text
//! Monitoring cycle:
//!     list_all() → snapshot of tracked sources at cycle start
//!     update()   → persist re-evaluated availability state
//!     delete()   → evict a source past the failure threshold
//!
//! Snapshot persistence (memory.rs):
//!     Every mutation rewrites the JSON snapshot, so the next
//!     cycle always observes the previous cycle's result.
//! ```
//!
//! # Design Decisions
//! - The monitor only talks to the `SourceStore` trait; the concrete
//!   store is injected at construction, never reached through a global
//! - Each source row is mutated by at most one task per cycle, so the
//!   store needs single-row atomicity only

pub mod memory;
pub mod source;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

pub use memory::MemoryStore;
pub use source::TrackedSource;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Snapshot file could not be read or written.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be serialized or deserialized.
    #[error("snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The referenced source is no longer in the store.
    #[error("source {0} not found")]
    NotFound(Uuid),
}

/// Durable table of tracked sources, as consumed by the monitoring cycle.
#[async_trait]
pub trait SourceStore: Send + Sync {
    /// Return every tracked source.
    async fn list_all(&self) -> Result<Vec<TrackedSource>, StoreError>;

    /// Persist the re-evaluated state of a single source.
    async fn update(&self, source: &TrackedSource) -> Result<(), StoreError>;

    /// Remove a source permanently.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
