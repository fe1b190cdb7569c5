//! # Ledger Client Subsystem (cc-01)
//!
//! Typed access to the certificate ledger: submit a state-changing
//! transaction and wait for finality, read the certificate program's view
//! function, enumerate blocks, fetch receipts, and decode event logs.
//!
//! ## Responsibilities
//!
//! - Submit the add-certificate transaction and block until it is included
//!   and final
//! - Read-only `verify_certificate` view calls with an explicit existence
//!   flag (absence is never inferred from empty fields)
//! - Block and receipt enumeration for history projection
//! - `CertificateAdded` log decoding as a typed `Option` (foreign logs
//!   yield `None`, never an error)
//!
//! ## Failure Policy
//!
//! A ledger rejection (e.g. the duplicate-hash guard) surfaces as
//! `LedgerError::Rejected` with a structured reason and is never retried
//! here; retry policy belongs to the caller. Transport faults surface as
//! `LedgerError::Unavailable`.
//!
//! ## Hexagonal Architecture
//!
//! - **Domain Layer** (`domain/`): call/view types, event decoding, errors
//! - **Ports Layer** (`ports/`): inbound `LedgerApi`, outbound
//!   `SignerProvider` and `TimeSource`
//! - **Adapters Layer** (`adapters/`): in-process ledger, dev signer,
//!   clock sources

pub mod adapters;
pub mod domain;
pub mod ports;

pub use domain::{
    certificate_added_topic, decode_certificate_added, CertificateView, ContractCall,
    LedgerError, RejectionReason, SignerError, SignerIdentity, ViewCall, ViewResult,
};

pub use ports::{LedgerApi, SignerProvider, TimeSource};

pub use adapters::{
    DevSigner, EmptySignerProvider, InProcessLedger, ManualClock, SystemTimeSource,
};
