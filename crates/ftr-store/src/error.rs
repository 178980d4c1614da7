/// Errors from blob-store and record-store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The client could not reach the service.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service rejected the request.
    #[error("service error {code}: {message}")]
    Service { code: String, message: String },

    /// I/O error from the underlying backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
