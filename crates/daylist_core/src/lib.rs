//! Core domain logic for daylist.
//! This crate is the single source of truth for task scoring, ordering and
//! persistence invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod persist;
pub mod priority;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::collection::{DaySummary, TaskCollection};
pub use model::date::{is_date_key, today_key, DateKey};
pub use model::priority::Priority;
pub use model::task::{Task, TaskId, TaskValidationError};
pub use persist::{
    DecodedCollection, KeyValueAdapter, KeyValueStore, MemoryKeyValueStore, PersistError,
    PersistResult, PersistenceAdapter, SqliteKeyValueStore, BACKUP_KEY_SUFFIX,
    DEFAULT_STORAGE_KEY,
};
pub use priority::{explain, score, PriorityReport, PrioritySignal};
pub use store::task_store::{StoreError, StoreResult, TaskStore, TaskUpdate};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
