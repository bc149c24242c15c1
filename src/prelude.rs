//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pair_amm::prelude::*;
//! ```

pub use crate::collaborators::{InMemoryLedger, RecordingSink, SingleInitializer, TracingSink};
pub use crate::config::PoolConfig;
pub use crate::domain::{
    Amount, Asset, BasisPoints, Deposit, FeeTier, Invariant, ParticipantId, PoolEvent,
    PoolSnapshot, PoolStatus, ShareDelta, Shares, SwapDirection, SwapOutcome, Withdrawal,
};
pub use crate::error::{AmmError, Result, TransferError};
pub use crate::math::CheckedArithmetic;
pub use crate::pools::{Pool, PoolState, SharedPool};
pub use crate::traits::{AccessControl, AssetTransfer, EventSink};
