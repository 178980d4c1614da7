use tracing::{debug, warn};

use ftr_types::ChangeNotification;

use crate::error::IngestError;
use crate::uploader::Uploader;

/// The outcome of one failed notification within a batch.
#[derive(Debug)]
pub struct UploadFailure {
    /// Identifier of the notification that failed.
    pub notification_id: String,
    /// The classified error.
    pub error: IngestError,
}

/// The outcome of processing a batch.
///
/// `attempted` is always the full batch size — failures are reported in
/// `failures`, never subtracted from the count. Callers that only want the
/// legacy raw count read `attempted`.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of notifications in the batch.
    pub attempted: usize,
    /// Per-notification failures, in batch order.
    pub failures: Vec<UploadFailure>,
}

impl BatchReport {
    /// Number of notifications that uploaded successfully.
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failures.len()
    }

    /// Returns `true` if every notification uploaded successfully.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Entry point of the relay: walks a change-notification batch and
/// delegates each entry to the [`Uploader`].
///
/// Failures are isolated per notification — one failing upload never aborts
/// the rest of the batch. Each failure is logged and recorded in the
/// returned [`BatchReport`].
pub struct EventIngester {
    uploader: Uploader,
}

impl EventIngester {
    /// Create an ingester over the given uploader.
    pub fn new(uploader: Uploader) -> Self {
        Self { uploader }
    }

    /// Process a batch of change notifications sequentially.
    pub async fn process(&self, batch: &[ChangeNotification]) -> BatchReport {
        let mut failures = Vec::new();

        for notification in batch {
            debug!(
                id = %notification.id,
                kind = %notification.kind,
                "processing notification"
            );
            if let Err(error) = self.uploader.upload(&notification.new_image).await {
                warn!(id = %notification.id, %error, "upload failed");
                failures.push(UploadFailure {
                    notification_id: notification.id.clone(),
                    error,
                });
            }
        }

        let report = BatchReport {
            attempted: batch.len(),
            failures,
        };
        debug!(
            attempted = report.attempted,
            failed = report.failures.len(),
            "batch processed"
        );
        report
    }
}
