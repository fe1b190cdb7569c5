//! # Certificate Registry Subsystem (cc-02)
//!
//! The write path: validates input, submits the add-certificate
//! transaction, and upon ledger confirmation mirrors the record into the
//! off-chain index, handling every partial-failure combination between
//! the two independently-failing stores.
//!
//! ## Durability Boundary
//!
//! The ledger write is the durability boundary, not the index write. A
//! confirmed ledger write whose mirror insert fails is a
//! `PartialSuccess`: the caller reports success of the authoritative
//! write while the mirror failure is logged for out-of-band repair via
//! [`CertificateRegistry::replay_unmirrored`]. There is no compensation
//! of the ledger side — ledger writes are irreversible by design.
//!
//! ## Duplicate-Detection Guard
//!
//! Two classifications that are never conflated:
//!
//! - the ledger program's rejection of a second write for an existing
//!   hash (authoritative) → `RegistrationOutcome::DuplicateCertificate`;
//! - the index uniqueness constraint tripping after ledger confirmation
//!   (secondary, cache-protection only) → `MirrorFault::Duplicate`
//!   inside a `PartialSuccess`, logged and never reported as a
//!   registration failure.

pub mod domain;
pub mod service;

pub use domain::{
    MirrorFault, ReconciliationReport, RegistrationError, RegistrationOutcome,
};
pub use service::CertificateRegistry;
