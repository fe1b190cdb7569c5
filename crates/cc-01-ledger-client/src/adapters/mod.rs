//! Adapters layer: in-process ledger, signing identities, clock sources.

pub mod in_process;
pub mod signer;
pub mod time;

pub use in_process::InProcessLedger;
pub use signer::{DevSigner, EmptySignerProvider};
pub use time::{ManualClock, SystemTimeSource};
