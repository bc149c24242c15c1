//! Unified error types for the pool engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Failures are
//! always detected before the pool state is touched, so an `Err` from any
//! mutating operation guarantees the pool is exactly as it was before the
//! call.

use thiserror::Error;

use crate::domain::{Amount, Asset};

/// Errors raised by the pool engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// `initialize` was called on a pool that is already active.
    #[error("pool is already initialized")]
    AlreadyInitialized,

    /// The operation requires an active pool.
    #[error("pool is not initialized")]
    NotInitialized,

    /// The caller is not allowed to perform the operation.
    #[error("caller is not authorized to initialize the pool")]
    NotAuthorized,

    /// A zero amount was supplied where a positive one is required.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Deposit amounts do not match the current reserve ratio exactly.
    #[error("deposit ratio does not match the pool ratio")]
    RatioMismatch,

    /// The caller does not own enough shares for the withdrawal.
    #[error("insufficient share: owned {owned}, requested {requested}")]
    InsufficientShare {
        /// Shares currently held by the caller.
        owned: u128,
        /// Shares the caller tried to burn.
        requested: u128,
    },

    /// The swap would return nothing or exhaust the output reserve.
    #[error("insufficient liquidity for swap")]
    InsufficientLiquidity,

    /// A quote was requested against an empty reserve.
    #[error("reserve is zero")]
    ZeroReserve,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The pool configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The asset-transfer collaborator refused a movement of funds.
    #[error("transfer failed: {0}")]
    Transfer(#[from] TransferError),
}

/// Errors reported by an [`AssetTransfer`](crate::traits::AssetTransfer)
/// implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// The participant has not authorized the pool to pull this much.
    #[error("allowance for asset {asset} is {available}, needed {required}")]
    InsufficientAllowance {
        /// Asset being pulled.
        asset: Asset,
        /// Remaining allowance.
        available: Amount,
        /// Amount requested.
        required: Amount,
    },

    /// The source account holds less than the requested amount.
    #[error("balance of asset {asset} is {available}, needed {required}")]
    InsufficientBalance {
        /// Asset being moved.
        asset: Asset,
        /// Balance held by the source.
        available: Amount,
        /// Amount requested.
        required: Amount,
    },

    /// The collaborator rejected the transfer for its own reasons.
    #[error("transfer rejected: {0}")]
    Rejected(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            AmmError::AlreadyInitialized.to_string(),
            "pool is already initialized"
        );
        assert_eq!(
            AmmError::InsufficientShare {
                owned: 3,
                requested: 5
            }
            .to_string(),
            "insufficient share: owned 3, requested 5"
        );
        assert_eq!(
            AmmError::Overflow("reserve_x").to_string(),
            "arithmetic overflow: reserve_x"
        );
    }

    #[test]
    fn transfer_error_converts() {
        let inner = TransferError::InsufficientAllowance {
            asset: Asset::X,
            available: Amount::new(1),
            required: Amount::new(2),
        };
        let err: AmmError = inner.clone().into();
        assert_eq!(err, AmmError::Transfer(inner));
        assert!(err.to_string().starts_with("transfer failed: allowance for asset X"));
    }
}
