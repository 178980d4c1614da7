//! Storage boundary for the Fulltext Relay.
//!
//! The relay talks to two external services: a key-addressed blob store
//! that receives the uploaded objects, and a structured record store that
//! holds the full-text payloads. Both are remote network services, so the
//! traits are async; real client bindings live with the host, and this
//! crate ships in-memory backends for tests and embedding.
//!
//! # Design Rules
//!
//! 1. The stores never interpret object contents.
//! 2. An absent record is `Ok(None)`, never an error.
//! 3. Blob writes are last-write-wins on key collision; the relay performs
//!    no deduplication.
//! 4. All transport and service faults are propagated as [`StoreError`],
//!    never silently ignored.

pub mod error;
pub mod memory;
pub mod object;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryBlobStore, InMemoryRecordStore};
pub use object::BlobObject;
pub use traits::{BlobStore, Record, RecordStore};
