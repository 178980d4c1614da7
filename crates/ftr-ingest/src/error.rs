use std::time::Duration;

use ftr_store::StoreError;
use ftr_types::FieldError;

/// Which external call an error pertains to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallSite {
    /// The full-text lookup against the record store.
    RecordStore,
    /// The object write against the blob store.
    BlobStore,
}

impl std::fmt::Display for CallSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RecordStore => write!(f, "record store"),
            Self::BlobStore => write!(f, "blob store"),
        }
    }
}

/// Errors from processing a single notification.
///
/// None of these cross a notification boundary: the ingester catches,
/// classifies, and records them per notification.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// A required field is missing or malformed in the notification.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldError),

    /// The record-store lookup failed (transport or service fault).
    #[error("record store lookup failed: {0}")]
    ContentStore(#[source] StoreError),

    /// The blob-store write failed.
    #[error("blob store write failed: {0}")]
    BlobStore(#[source] StoreError),

    /// Building the local body buffer failed.
    #[error("local buffer write failed: {0}")]
    LocalIo(#[source] std::io::Error),

    /// An external call exceeded its configured deadline.
    #[error("{call} call timed out after {timeout:?}")]
    Timeout { call: CallSite, timeout: Duration },
}

/// Result alias for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_the_call_site() {
        let err = IngestError::Timeout {
            call: CallSite::RecordStore,
            timeout: Duration::from_secs(5),
        };
        let message = err.to_string();
        assert!(message.contains("record store"));
        assert!(message.contains("5s"));
    }

    #[test]
    fn validation_converts_from_field_error() {
        let err: IngestError = FieldError::MissingField("filename").into();
        assert!(matches!(err, IngestError::Validation(_)));
    }
}
