//! Domain value types used throughout the pool engine.
//!
//! Amounts, shares, the invariant, fee tier, participant identity, swap
//! direction, operation receipts and events.  All types are newtypes or
//! plain enums with validated constructors where an invariant exists.

mod amount;
mod asset;
mod basis_points;
mod event;
mod fee_tier;
mod invariant;
mod participant;
mod receipt;
mod rounding;
mod shares;
mod snapshot;
mod swap_result;

pub use amount::Amount;
pub use asset::{Asset, SwapDirection};
pub use basis_points::BasisPoints;
pub use event::{PoolEvent, ShareDelta};
pub use fee_tier::FeeTier;
pub use invariant::Invariant;
pub use participant::ParticipantId;
pub use receipt::{Deposit, Withdrawal};
pub use rounding::Rounding;
pub use shares::Shares;
pub use snapshot::{PoolSnapshot, PoolStatus};
pub use swap_result::SwapOutcome;
