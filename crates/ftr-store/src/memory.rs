use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::error::StoreResult;
use crate::object::BlobObject;
use crate::traits::{BlobStore, Record, RecordStore};

/// In-memory, HashMap-based blob store.
///
/// Intended for tests and embedding. Objects are held behind a `RwLock`
/// keyed by `(bucket, key)` and cloned on read. Writing an existing key
/// replaces the object, matching the last-write-wins contract.
pub struct InMemoryBlobStore {
    objects: RwLock<HashMap<(String, String), BlobObject>>,
}

impl InMemoryBlobStore {
    /// Create a new empty blob store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Fetch a stored object for inspection.
    pub fn get(&self, bucket: &str, key: &str) -> Option<BlobObject> {
        self.objects
            .read()
            .expect("lock poisoned")
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
    }

    /// Sorted list of all `(bucket, key)` pairs currently stored.
    pub fn keys(&self) -> Vec<(String, String)> {
        let map = self.objects.read().expect("lock poisoned");
        let mut keys: Vec<(String, String)> = map.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Remove all objects.
    pub fn clear(&self) {
        self.objects.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put_object(&self, bucket: &str, object: BlobObject) -> StoreResult<()> {
        debug!(bucket, key = %object.key, size = object.size(), "storing object");
        let mut map = self.objects.write().expect("lock poisoned");
        map.insert((bucket.to_string(), object.key.clone()), object);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryBlobStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBlobStore")
            .field("object_count", &self.len())
            .finish()
    }
}

/// In-memory record store keyed by `(collection, id)`.
///
/// Rows are plain string maps, cloned on read. Intended for tests and
/// embedding.
pub struct InMemoryRecordStore {
    rows: RwLock<HashMap<(String, String), Record>>,
}

impl InMemoryRecordStore {
    /// Create a new empty record store.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Insert (or replace) a row.
    pub fn insert(&self, collection: &str, id: &str, row: Record) {
        self.rows
            .write()
            .expect("lock poisoned")
            .insert((collection.to_string(), id.to_string()), row);
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.rows.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.read().expect("lock poisoned").is_empty()
    }

    /// Remove all rows.
    pub fn clear(&self) {
        self.rows.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn get_by_id(&self, collection: &str, id: &str) -> StoreResult<Option<Record>> {
        let map = self.rows.read().expect("lock poisoned");
        Ok(map.get(&(collection.to_string(), id.to_string())).cloned())
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRecordStore")
            .field("row_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_object(key: &str, body: &[u8]) -> BlobObject {
        BlobObject::new(key, body.to_vec(), "text/plain")
    }

    // -----------------------------------------------------------------------
    // Blob store
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn put_and_get_object() {
        let store = InMemoryBlobStore::new();
        store
            .put_object("bucket", make_object("other/a.txt", b"hello"))
            .await
            .unwrap();

        let stored = store.get("bucket", "other/a.txt").expect("should exist");
        assert_eq!(stored.body, b"hello");
        assert_eq!(stored.content_type, "text/plain");
    }

    #[tokio::test]
    async fn put_same_key_is_last_write_wins() {
        let store = InMemoryBlobStore::new();
        store
            .put_object("bucket", make_object("other/a.txt", b"first"))
            .await
            .unwrap();
        store
            .put_object("bucket", make_object("other/a.txt", b"second"))
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("bucket", "other/a.txt").unwrap().body, b"second");
    }

    #[tokio::test]
    async fn buckets_are_isolated() {
        let store = InMemoryBlobStore::new();
        store
            .put_object("bucket-a", make_object("k", b"a"))
            .await
            .unwrap();
        store
            .put_object("bucket-b", make_object("k", b"b"))
            .await
            .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("bucket-a", "k").unwrap().body, b"a");
        assert_eq!(store.get("bucket-b", "k").unwrap().body, b"b");
    }

    #[tokio::test]
    async fn keys_are_sorted() {
        let store = InMemoryBlobStore::new();
        store
            .put_object("b", make_object("zz", b""))
            .await
            .unwrap();
        store
            .put_object("b", make_object("aa", b""))
            .await
            .unwrap();

        let keys = store.keys();
        assert_eq!(keys[0].1, "aa");
        assert_eq!(keys[1].1, "zz");
    }

    #[test]
    fn get_missing_object_returns_none() {
        let store = InMemoryBlobStore::new();
        assert!(store.get("bucket", "missing").is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn clear_removes_all_objects() {
        let store = InMemoryBlobStore::new();
        store.put_object("b", make_object("k", b"x")).await.unwrap();
        store.clear();
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Record store
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn get_by_id_returns_inserted_row() {
        let store = InMemoryRecordStore::new();
        let mut row = Record::new();
        row.insert("ftValue".to_string(), "<doc/>".to_string());
        store.insert("FullTextCollection", "ref-42", row);

        let fetched = store
            .get_by_id("FullTextCollection", "ref-42")
            .await
            .unwrap()
            .expect("row should exist");
        assert_eq!(fetched["ftValue"], "<doc/>");
    }

    #[tokio::test]
    async fn get_by_id_missing_row_is_none() {
        let store = InMemoryRecordStore::new();
        let fetched = store.get_by_id("FullTextCollection", "nope").await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = InMemoryRecordStore::new();
        store.insert("coll-a", "id", Record::new());

        assert!(store.get_by_id("coll-a", "id").await.unwrap().is_some());
        assert!(store.get_by_id("coll-b", "id").await.unwrap().is_none());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryBlobStore::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryBlobStore"));
        assert!(debug.contains("object_count"));
    }
}
