//! Persistence contracts for the task collection.
//!
//! # Responsibility
//! - Define the load/save contract the store depends on.
//! - Keep encoding and storage transport out of store logic.
//!
//! # Invariants
//! - `load` returns `Ok(None)` when nothing was ever stored.
//! - Unreadable payloads surface as `PersistError::Malformed`, never panics.
//! - Individual bad records are dropped with a warning; the rest still load.

pub mod codec;
pub mod kv;
pub mod sqlite_kv;

use crate::db::DbError;
use crate::model::collection::TaskCollection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use codec::{decode_collection, encode_collection, DecodedCollection};
pub use kv::{
    KeyValueAdapter, KeyValueStore, MemoryKeyValueStore, BACKUP_KEY_SUFFIX, DEFAULT_STORAGE_KEY,
};
pub use sqlite_kv::SqliteKeyValueStore;

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure while reading or writing the stored collection.
#[derive(Debug)]
pub enum PersistError {
    /// Backing database failed.
    Db(DbError),
    /// Store is reachable but not usable (e.g. missing table, read-only).
    Storage(String),
    /// Stored payload could not be decoded.
    Malformed(String),
    /// Collection could not be encoded.
    Encode(String),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Storage(message) => write!(f, "storage unavailable: {message}"),
            Self::Malformed(message) => write!(f, "malformed stored tasks: {message}"),
            Self::Encode(message) => write!(f, "failed to encode tasks: {message}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Whole-collection load/save used by `TaskStore`.
///
/// Called once at startup (`load`) and after every successful mutation (`save`).
pub trait PersistenceAdapter {
    fn load(&self) -> PersistResult<Option<TaskCollection>>;
    fn save(&self, collection: &TaskCollection) -> PersistResult<()>;
}

impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for &P {
    fn load(&self) -> PersistResult<Option<TaskCollection>> {
        (**self).load()
    }

    fn save(&self, collection: &TaskCollection) -> PersistResult<()> {
        (**self).save(collection)
    }
}
