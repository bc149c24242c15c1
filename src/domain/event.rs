//! Structured records emitted after each successful operation.

use serde::Serialize;

use super::{Amount, Invariant, ParticipantId, Shares, SwapDirection};

/// Change to a participant's share balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "shares")]
pub enum ShareDelta {
    /// Shares issued for a deposit.
    Minted(Shares),
    /// Shares redeemed by a withdrawal.
    Burned(Shares),
}

/// Notification sent to the [`EventSink`](crate::traits::EventSink).
///
/// Events are write-only: the engine never reads them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "event")]
pub enum PoolEvent {
    /// The pool was seeded with its first reserves.
    Initialized {
        /// Initial reserve of X.
        x: Amount,
        /// Initial reserve of Y.
        y: Amount,
    },
    /// A participant deposited at the pool ratio.
    LiquidityAdded {
        /// X deposited.
        deposit_x: Amount,
        /// Y deposited.
        deposit_y: Amount,
        /// Depositor.
        participant: ParticipantId,
    },
    /// A participant's share balance changed.
    SharesUpdated {
        /// Holder whose balance changed.
        participant: ParticipantId,
        /// Minted or burned amount.
        delta: ShareDelta,
    },
    /// Reserves and invariant after the operation.
    PoolParametersUpdated {
        /// New reserve of X.
        reserve_x: Amount,
        /// New reserve of Y.
        reserve_y: Amount,
        /// New `reserve_x × reserve_y`.
        invariant_k: Invariant,
    },
    /// A participant redeemed shares.
    LiquidityRemoved {
        /// X paid out.
        amount_x: Amount,
        /// Y paid out.
        amount_y: Amount,
        /// Withdrawer.
        participant: ParticipantId,
    },
    /// A participant traded against the pool.
    Swapped {
        /// Which asset was sold.
        direction: SwapDirection,
        /// Amount sold to the pool.
        amount_in: Amount,
        /// Amount bought from the pool.
        amount_out: Amount,
        /// Trader.
        participant: ParticipantId,
    },
}

impl PoolEvent {
    /// Short stable name, used as the log message.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Initialized { .. } => "Initialized",
            Self::LiquidityAdded { .. } => "LiquidityAdded",
            Self::SharesUpdated { .. } => "SharesUpdated",
            Self::PoolParametersUpdated { .. } => "PoolParametersUpdated",
            Self::LiquidityRemoved { .. } => "LiquidityRemoved",
            Self::Swapped { .. } => "Swapped",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        let ev = PoolEvent::Initialized {
            x: Amount::new(1),
            y: Amount::new(2),
        };
        assert_eq!(ev.name(), "Initialized");
    }

    #[test]
    fn serializes_with_event_tag() {
        let ev = PoolEvent::SharesUpdated {
            participant: ParticipantId::from_bytes([0u8; 32]),
            delta: ShareDelta::Minted(Shares::new(12)),
        };
        let Ok(json) = serde_json::to_value(ev) else {
            panic!("serializable");
        };
        assert_eq!(json["event"], "SharesUpdated");
        assert_eq!(json["delta"]["kind"], "Minted");
        assert_eq!(json["delta"]["shares"], 12);
    }

    #[test]
    fn swap_event_fields() {
        let ev = PoolEvent::Swapped {
            direction: SwapDirection::XForY,
            amount_in: Amount::new(10),
            amount_out: Amount::new(40),
            participant: ParticipantId::from_bytes([1u8; 32]),
        };
        let Ok(json) = serde_json::to_value(ev) else {
            panic!("serializable");
        };
        assert_eq!(json["direction"], "XForY");
        assert_eq!(json["amount_out"], 40);
    }
}
