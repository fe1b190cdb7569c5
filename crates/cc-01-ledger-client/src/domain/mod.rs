//! Domain layer: typed calls, event decoding, and error taxonomy.

pub mod calls;
pub mod errors;
pub mod events;

pub use calls::{CertificateView, ContractCall, SignerIdentity, ViewCall, ViewResult};
pub use errors::{LedgerError, RejectionReason, SignerError};
pub use events::{certificate_added_topic, decode_certificate_added};
