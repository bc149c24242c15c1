//! Pool implementation in three layers.
//!
//! | Type | Role |
//! |------|------|
//! | [`PoolState`] | Pure arithmetic state machine and share ledger |
//! | [`Pool`] | Engine wiring the state to transfer, access and event collaborators |
//! | [`SharedPool`] | `Arc<RwLock<Pool>>` handle for concurrent callers |

mod engine;
mod shared;
mod state;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use engine::Pool;
pub use shared::SharedPool;
pub use state::{Outcome, PoolState, Transition};
