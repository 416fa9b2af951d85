//! JSON wire format for the task collection.
//!
//! Shape: `{ "<YYYY-MM-DD>": [ { id, name, description, priority,
//! completed, createdAt, date }, ... ] }`.
//!
//! # Invariants
//! - Decoding is per record: one bad record or bucket never drops the rest.
//! - Only a payload that is not a JSON object fails as a whole.

use super::{PersistError, PersistResult};
use crate::model::collection::TaskCollection;
use crate::model::task::Task;
use log::warn;
use serde_json::{Map, Value};

/// Decoded collection plus the number of records that had to be dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCollection {
    pub collection: TaskCollection,
    /// Records (or whole non-array buckets, counted once) that failed to decode.
    pub skipped: usize,
}

pub fn encode_collection(collection: &TaskCollection) -> PersistResult<String> {
    serde_json::to_string(collection).map_err(|err| PersistError::Encode(err.to_string()))
}

/// Decodes a stored payload, validating every task record on its own.
///
/// # Errors
/// - `Malformed` when the payload is not JSON or not a JSON object.
pub fn decode_collection(payload: &str) -> PersistResult<DecodedCollection> {
    let buckets: Map<String, Value> =
        serde_json::from_str(payload).map_err(|err| PersistError::Malformed(err.to_string()))?;

    let mut collection = TaskCollection::new();
    let mut skipped = 0;
    for (date, records) in buckets {
        let Value::Array(records) = records else {
            warn!(
                "event=persist_decode module=persist status=skipped error_code=bucket_not_array date={}",
                date
            );
            skipped += 1;
            continue;
        };

        let bucket = collection.bucket_mut(&date);
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Task>(record) {
                Ok(task) => bucket.push(task),
                Err(err) => {
                    warn!(
                        "event=persist_decode module=persist status=skipped error_code=bad_record date={} index={} error={}",
                        date, index, err
                    );
                    skipped += 1;
                }
            }
        }
    }

    Ok(DecodedCollection {
        collection,
        skipped,
    })
}
