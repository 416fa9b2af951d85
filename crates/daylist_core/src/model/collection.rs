//! Tasks grouped by day.
//!
//! # Invariants
//! - A task id appears in at most one bucket.
//! - Buckets are never pruned implicitly, even once empty.

use crate::model::date::DateKey;
use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from day key to that day's ordered tasks.
///
/// Serialized as a plain JSON object keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCollection {
    buckets: BTreeMap<DateKey, Vec<Task>>,
}

/// Pending/completed counts for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaySummary {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bucket for `date`, or an empty slice.
    pub fn bucket(&self, date: &str) -> &[Task] {
        self.buckets.get(date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the bucket for `date`, creating it when absent.
    pub fn bucket_mut(&mut self, date: &str) -> &mut Vec<Task> {
        self.buckets.entry(date.to_string()).or_default()
    }

    /// Iterates all buckets in ascending key order.
    pub fn buckets(&self) -> impl Iterator<Item = (&DateKey, &Vec<Task>)> {
        self.buckets.iter()
    }

    pub fn buckets_mut(&mut self) -> impl Iterator<Item = (&DateKey, &mut Vec<Task>)> {
        self.buckets.iter_mut()
    }

    /// All bucket keys, newest first.
    pub fn dates_desc(&self) -> Vec<DateKey> {
        self.buckets.keys().rev().cloned().collect()
    }

    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.buckets
            .values()
            .flat_map(|tasks| tasks.iter())
            .find(|task| &task.id == id)
    }

    /// Total task count across all days.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self, date: &str) -> DaySummary {
        let tasks = self.bucket(date);
        let completed = tasks.iter().filter(|task| task.completed).count();
        DaySummary {
            total: tasks.len(),
            pending: tasks.len() - completed,
            completed,
        }
    }
}
