//! Foundation types for the Fulltext Relay.
//!
//! This crate provides the data model shared by the relay pipeline: the
//! change notifications delivered by the upstream record store, the fields
//! extracted from a notification's new-state image, and the typed errors
//! produced when extraction fails. No I/O lives here.
//!
//! # Key Types
//!
//! - [`ChangeNotification`] — one entry in an upstream change-event batch
//! - [`EventKind`] — insert/modify/remove classification of a notification
//! - [`RecordFields`] — the validated fields the pipeline needs from an image
//! - [`FieldError`] — typed failure for a missing required field

pub mod error;
pub mod fields;
pub mod notification;

pub use error::FieldError;
pub use fields::{RecordFields, FIELD_FILE_NAME, FIELD_FULLTEXT_REF, FIELD_MIME_TYPE};
pub use notification::{ChangeNotification, EventKind, NewImage};
