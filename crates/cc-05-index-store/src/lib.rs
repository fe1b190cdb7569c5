//! # Certificate Index Store Subsystem (cc-05)
//!
//! The off-chain mirror of confirmed certificate records, optimized for
//! the query patterns the ledger cannot serve efficiently (listing,
//! search by hash). The index is a best-effort cache and never a source
//! of truth: rows are created only after ledger confirmation, and a
//! confirmed ledger record may transiently lack its mirror row.
//!
//! ## Secondary Duplicate Guard
//!
//! The store enforces a uniqueness constraint on `certificate_hash`.
//! A conflicting insert is rejected with `IndexError::DuplicateHash`
//! (never overwritten) so divergent cache entries cannot accumulate.
//!
//! ## Document Metadata
//!
//! Uploaded-document metadata rows reference their certificate via
//! `hash_id`. Storage of the document bytes themselves is out of scope;
//! only the metadata collection and the [`content_hash`] helper used to
//! derive a certificate hash from document bytes live here.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{content_hash, CertificateIndexEntry, DocumentMetadata, IndexError};
pub use ports::{CertificateIndexStore, DocumentMetadataStore};

pub use adapters::InMemoryIndexStore;
