use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::object::BlobObject;

/// A row in the record store: attribute name to string value.
pub type Record = HashMap<String, String>;

/// Key-addressed object storage service (the upload destination).
///
/// Implementations must satisfy these invariants:
/// - A write either fully succeeds or returns an error; partial objects are
///   never observable.
/// - Writing an existing key replaces the object (last-write-wins).
/// - The store never interprets the body or metadata.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write an object under `bucket`/`object.key`.
    async fn put_object(&self, bucket: &str, object: BlobObject) -> StoreResult<()>;
}

/// Structured data store supporting point lookups by primary key (the
/// full-text source).
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Look up a row by its `id` within a collection.
    ///
    /// Returns `Ok(None)` if no row exists. Returns `Err` only on
    /// transport or service faults.
    async fn get_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Record>>;
}
