//! Cross-subsystem integration flows.

pub mod history;
pub mod reconciliation;
pub mod registration;
pub mod verification;
