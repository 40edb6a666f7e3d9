//! Thread-safe in-memory repository core.
//! Repositories wrap an injected data context and guard writes with their own lock.

pub mod context;
pub mod logging;
pub mod model;
pub mod repo;

pub use context::{ContextError, ContextResult, DataContext, InMemoryDataContext};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig};
pub use model::entity::{same_identity, Storeable};
pub use model::record::{Record, RecordId, RecordValidationError};
pub use repo::memory_repo::{InMemoryRepository, Repository};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
