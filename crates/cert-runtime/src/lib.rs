//! # CertChain Service Runtime
//!
//! Assembles the certificate ledger synchronization engine:
//!
//! - `config` — runtime parameters with environment overrides
//! - `container` — explicit dependency-injected construction of the
//!   ledger client, stores, and services, plus the [`CertificateCore`]
//!   facade the (out-of-scope) request layer calls into
//!
//! The binary entry point adds a background loop that keeps the history
//! projection synced to the ledger head and replays unmirrored confirmed
//! records into the index.

pub mod config;
pub mod container;

pub use config::{ConfigError, CoreConfig};
pub use container::{BootstrapError, CertificateCore, CoreContainer};
