//! # Ledger History Projection Subsystem (cc-04)
//!
//! Reconstructs the complete, ordered transaction feed by scanning ledger
//! blocks and decoding `CertificateAdded` event logs into a queryable
//! projection.
//!
//! ## Incremental Scanning
//!
//! The projector persists the last-processed block number and only scans
//! new blocks on each request, replaying previously decoded views from
//! the projection store. Output content and order are identical to a
//! from-genesis rescan ([`HistoryProjector::full_rescan`] remains the
//! oracle for that equivalence), so the incremental path is a strict
//! improvement, not a behavior change.
//!
//! ## Ordering
//!
//! Views are ordered by block number, then by transaction position within
//! the block — the ledger's own total order. Transactions with no
//! matching certificate event (plain transfers, foreign contracts) are
//! projected with `"Unknown"` placeholders rather than omitted.
//!
//! ## Cost Model
//!
//! `sync` is O(new transactions); `full_rescan` is O(all transactions to
//! date) and exists for parity checks and reconciliation scans.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{
    LedgerTransactionView, ProjectionError, ProjectionSnapshot, ProjectionStoreError,
    UNKNOWN_LABEL,
};
pub use ports::ProjectionStore;
pub use service::HistoryProjector;

pub use adapters::{FileProjectionStore, InMemoryProjectionStore};
