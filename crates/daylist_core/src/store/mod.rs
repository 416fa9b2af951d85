//! Task list use-cases.
//!
//! # Responsibility
//! - Own the in-memory collection for one session.
//! - Apply mutations, keep buckets sorted, and persist after each change.

pub mod ordering;
pub mod task_store;
