use std::io::Write;
use std::sync::Arc;

use tokio::time::timeout;
use tracing::debug;

use ftr_store::{BlobObject, BlobStore, RecordStore};
use ftr_types::{NewImage, RecordFields};

use crate::classify::object_key;
use crate::config::IngestConfig;
use crate::error::{CallSite, IngestError, IngestResult};
use crate::lookup::ContentLookup;

/// The per-notification transformation: field extraction, content lookup,
/// path classification, and blob write.
///
/// Each `upload` call is independent; the uploader holds no mutable state.
pub struct Uploader {
    blob_store: Arc<dyn BlobStore>,
    lookup: ContentLookup,
    config: IngestConfig,
}

impl Uploader {
    /// Create an uploader over the two external stores.
    pub fn new(
        blob_store: Arc<dyn BlobStore>,
        record_store: Arc<dyn RecordStore>,
        config: IngestConfig,
    ) -> Self {
        let lookup = ContentLookup::new(
            record_store,
            config.collection.clone(),
            config.call_timeout,
        );
        Self {
            blob_store,
            lookup,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Transform one notification image into a stored blob object.
    ///
    /// An absent full-text payload is not an error: the object is written
    /// with a zero-length body. Re-uploading identical fields writes the
    /// same key again (last-write-wins, no deduplication).
    pub async fn upload(&self, new_image: &NewImage) -> IngestResult<()> {
        let fields = RecordFields::from_image(new_image)?;
        let key = object_key(&fields.file_name);

        let content = self.lookup.fetch(&fields.fulltext_ref).await?;

        let mut body = Vec::new();
        if let Some(text) = &content {
            body.write_all(text.as_bytes())
                .map_err(IngestError::LocalIo)?;
        }

        let object = BlobObject::new(key, body, &fields.mime_type)
            .with_metadata(&self.config.provenance_key, &fields.fulltext_ref);

        debug!(
            key = %object.key,
            content_type = %object.content_type,
            size = object.size(),
            reference = %fields.fulltext_ref,
            "uploading object"
        );

        timeout(
            self.config.call_timeout,
            self.blob_store.put_object(&self.config.bucket, object),
        )
        .await
        .map_err(|_| IngestError::Timeout {
            call: CallSite::BlobStore,
            timeout: self.config.call_timeout,
        })?
        .map_err(IngestError::BlobStore)?;

        Ok(())
    }
}
