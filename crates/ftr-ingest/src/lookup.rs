use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::debug;

use ftr_store::RecordStore;

use crate::error::{CallSite, IngestError, IngestResult};

/// Record-store attribute holding the full-text payload.
pub const FT_VALUE_ATTRIBUTE: &str = "ftValue";

/// Point lookup of full-text payloads in the record store.
///
/// One attempt per call, bounded by the configured timeout. No retries.
pub struct ContentLookup {
    store: Arc<dyn RecordStore>,
    collection: String,
    call_timeout: Duration,
}

impl ContentLookup {
    /// Create a lookup against `collection` in the given store.
    pub fn new(
        store: Arc<dyn RecordStore>,
        collection: impl Into<String>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            call_timeout,
        }
    }

    /// Fetch the full-text payload for a reference key.
    ///
    /// Returns `Ok(None)` when no row exists for the reference, or when the
    /// row lacks the payload attribute — absence is not an error.
    pub async fn fetch(&self, reference: &str) -> IngestResult<Option<String>> {
        let row = timeout(
            self.call_timeout,
            self.store.get_by_id(&self.collection, reference),
        )
        .await
        .map_err(|_| IngestError::Timeout {
            call: CallSite::RecordStore,
            timeout: self.call_timeout,
        })?
        .map_err(IngestError::ContentStore)?;

        match row {
            Some(row) => {
                let content = row.get(FT_VALUE_ATTRIBUTE).cloned();
                debug!(
                    reference,
                    found = content.is_some(),
                    "full-text row fetched"
                );
                Ok(content)
            }
            None => {
                debug!(reference, "no full-text row for reference");
                Ok(None)
            }
        }
    }
}
