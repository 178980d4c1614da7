//! Ingestion pipeline for the Fulltext Relay.
//!
//! The relay reacts to change notifications from an upstream record store:
//! for each notification it extracts the required fields, classifies a
//! destination path from the file name, fetches the referenced full-text
//! payload, and writes the result to a blob store with content-type and
//! provenance metadata.
//!
//! # Pipeline
//!
//! [`EventIngester`] walks a batch and delegates each notification to the
//! [`Uploader`], which runs the straight-line transformation:
//!
//! 1. extract [`RecordFields`](ftr_types::RecordFields) from the new-state image
//! 2. classify the destination key ([`classify`])
//! 3. fetch the payload through [`ContentLookup`]
//! 4. write a [`BlobObject`](ftr_store::BlobObject) under the configured bucket
//!
//! Failures never cross a notification boundary: the ingester catches each
//! [`IngestError`], logs it, and records it in the returned [`BatchReport`].
//!
//! # Delivery Semantics
//!
//! Best effort, at-least-once from the relay's point of view. Re-processing
//! a notification writes the same key again (last-write-wins); the relay
//! performs no deduplication.

pub mod classify;
pub mod config;
pub mod error;
pub mod ingester;
pub mod lookup;
pub mod uploader;

pub use classify::{classify, object_key, HTML_PREFIX, OTHER_PREFIX, XML_PREFIX};
pub use config::IngestConfig;
pub use error::{CallSite, IngestError, IngestResult};
pub use ingester::{BatchReport, EventIngester, UploadFailure};
pub use lookup::ContentLookup;
pub use uploader::Uploader;
