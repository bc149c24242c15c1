//! Reference collaborator implementations.
//!
//! Enough to run a pool in-process: an allowance ledger for both assets, a
//! single-owner access policy, and two event sinks.

mod access;
mod ledger;
mod sink;

pub use access::SingleInitializer;
pub use ledger::InMemoryLedger;
pub use sink::{RecordingSink, TracingSink};
