//! Task domain model for the per-day task list.
//!
//! # Responsibility
//! - Define canonical data structures used by scoring, store and persistence.
//! - Keep the wire shape compatible with the browser payload (`camelCase`).
//!
//! # Invariants
//! - Every task is identified by a stable, non-nil `TaskId`.
//! - `priority` is derived from task text and always within `1..=5`.
//! - A task's `date` and `created_at` never change after creation.

pub mod collection;
pub mod date;
pub mod priority;
pub mod task;
