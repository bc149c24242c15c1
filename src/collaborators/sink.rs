//! Event sinks: in-memory recording and `tracing` forwarding.

use tracing::info;

use crate::domain::{PoolEvent, ShareDelta};
use crate::traits::EventSink;

/// Keeps every emitted event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    events: Vec<PoolEvent>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Event names in emission order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.events.iter().map(PoolEvent::name).collect()
    }

    /// Removes and returns every recorded event.
    pub fn drain(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: PoolEvent) {
        self.events.push(event);
    }
}

/// Logs each event through `tracing` at `INFO` with structured fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: PoolEvent) {
        match event {
            PoolEvent::Initialized { x, y } => {
                info!(x = %x, y = %y, "{}", event.name());
            }
            PoolEvent::LiquidityAdded {
                deposit_x,
                deposit_y,
                participant,
            } => {
                info!(deposit_x = %deposit_x, deposit_y = %deposit_y, participant = %participant, "{}", event.name());
            }
            PoolEvent::SharesUpdated { participant, delta } => {
                let (kind, shares) = match delta {
                    ShareDelta::Minted(s) => ("minted", s),
                    ShareDelta::Burned(s) => ("burned", s),
                };
                info!(participant = %participant, kind, shares = %shares, "{}", event.name());
            }
            PoolEvent::PoolParametersUpdated {
                reserve_x,
                reserve_y,
                invariant_k,
            } => {
                info!(reserve_x = %reserve_x, reserve_y = %reserve_y, k = %invariant_k, "{}", event.name());
            }
            PoolEvent::LiquidityRemoved {
                amount_x,
                amount_y,
                participant,
            } => {
                info!(amount_x = %amount_x, amount_y = %amount_y, participant = %participant, "{}", event.name());
            }
            PoolEvent::Swapped {
                direction,
                amount_in,
                amount_out,
                participant,
            } => {
                info!(direction = %direction, amount_in = %amount_in, amount_out = %amount_out, participant = %participant, "{}", event.name());
            }
        }
    }
}
