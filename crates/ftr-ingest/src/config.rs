use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the ingestion pipeline.
///
/// Supplied by the host (environment or injected configuration) and passed
/// explicitly into [`Uploader`](crate::Uploader) construction. There is no
/// process-wide state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Destination bucket for uploaded objects.
    pub bucket: String,
    /// Record-store collection holding the full-text rows.
    pub collection: String,
    /// User-metadata key under which the full-text reference is recorded
    /// on every uploaded object.
    pub provenance_key: String,
    /// Upper bound applied to each record-store and blob-store call.
    pub call_timeout: Duration,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            bucket: "fulltext-objects".to_string(),
            collection: "FullTextCollection".to_string(),
            provenance_key: "origin-record-id".to_string(),
            call_timeout: Duration::from_secs(10),
        }
    }
}

impl IngestConfig {
    /// Configuration targeting a specific bucket, with defaults elsewhere.
    pub fn for_bucket(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_collection_and_timeout() {
        let config = IngestConfig::default();
        assert_eq!(config.collection, "FullTextCollection");
        assert_eq!(config.call_timeout, Duration::from_secs(10));
    }

    #[test]
    fn for_bucket_overrides_only_bucket() {
        let config = IngestConfig::for_bucket("archive");
        assert_eq!(config.bucket, "archive");
        assert_eq!(config.provenance_key, "origin-record-id");
    }
}
