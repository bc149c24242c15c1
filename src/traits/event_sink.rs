//! Write-only destination for pool events.

use crate::domain::PoolEvent;

/// Receives a [`PoolEvent`] for every state change the engine commits.
///
/// Emission happens after the new state is in place and cannot fail the
/// operation; sinks that forward events elsewhere handle their own errors.
pub trait EventSink {
    /// Records one event.
    fn emit(&mut self, event: PoolEvent);
}
