//! Point-in-time view of the pool parameters.

use core::fmt;

use serde::Serialize;

use super::{Amount, Invariant, Shares};

/// Lifecycle of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum PoolStatus {
    /// Created, all fields zero, waiting for `initialize`.
    #[default]
    Uninitialized,
    /// Initialized; accepts liquidity and swaps from then on.
    Active,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// Copy of the pool's aggregate fields, taken between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct PoolSnapshot {
    /// Lifecycle state.
    pub status: PoolStatus,
    /// Reserve of asset X.
    pub reserve_x: Amount,
    /// Reserve of asset Y.
    pub reserve_y: Amount,
    /// `reserve_x × reserve_y`.
    pub invariant_k: Invariant,
    /// Shares outstanding.
    pub total_shares: Shares,
}

impl fmt::Display for PoolSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool[{}](x={}, y={}, k={}, shares={})",
            self.status, self.reserve_x, self.reserve_y, self.invariant_k, self.total_shares
        )
    }
}
