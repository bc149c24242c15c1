//! Collaborator seams of the pool engine.
//!
//! The engine owns only the pool arithmetic.  Moving assets, deciding who
//! may initialize, and publishing events are delegated to implementations
//! of [`AssetTransfer`], [`AccessControl`] and [`EventSink`] injected when
//! the pool is constructed.

mod access_control;
mod asset_transfer;
mod event_sink;

pub use access_control::AccessControl;
pub use asset_transfer::AssetTransfer;
pub use event_sink::EventSink;
