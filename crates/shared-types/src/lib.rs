//! # Shared Types Crate
//!
//! This crate contains the ledger primitives and certificate entities shared
//! across all CertChain subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Ledger-Native Values**: Timestamps are seconds since epoch as assigned
//!   by the ledger clock; conversion to the caller's millisecond convention
//!   happens at the subsystem boundary, never here.

pub mod entities;
pub mod units;

pub use entities::*;
pub use units::{format_display_units, short_hash};
