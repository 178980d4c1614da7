use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The blob written to the blob store: key, body, content type, and user
/// metadata.
///
/// Created once per notification and never updated or deleted by the relay.
/// The body may be empty — a notification whose full-text payload is absent
/// still produces an object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobObject {
    /// Destination key within the bucket (classified prefix + file name).
    pub key: String,
    /// Raw object bytes, possibly zero-length.
    pub body: Vec<u8>,
    /// Content type recorded on the object.
    pub content_type: String,
    /// User metadata entries carried alongside the object.
    pub metadata: HashMap<String, String>,
}

impl BlobObject {
    /// Create a new object with empty metadata.
    pub fn new(key: impl Into<String>, body: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            body,
            content_type: content_type.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach a user metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Body size in bytes.
    pub fn size(&self) -> u64 {
        self.body.len() as u64
    }
}
