use thiserror::Error;

/// Errors produced when extracting fields from a notification image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    /// A required field is absent from the new-state image.
    #[error("required field missing from image: {0}")]
    MissingField(&'static str),

    /// An event-kind string from the upstream stream is not recognized.
    #[error("unknown event kind: {0}")]
    UnknownEventKind(String),
}
