//! Ports layer: inbound API trait and outbound SPI traits.

pub mod inbound;
pub mod outbound;

pub use inbound::LedgerApi;
pub use outbound::{SignerProvider, TimeSource};
