//! Asset movement between participants and the pool.
//!
//! The engine never holds balances itself.  It asks an [`AssetTransfer`]
//! implementation to pull deposits and swap inputs from participants into
//! pool custody, and to push withdrawals and swap outputs back out.
//!
//! # Ordering Contract
//!
//! Within one operation the engine performs every pull before any push,
//! and only commits its own state after all transfers succeeded.  When a
//! transfer fails the engine reverses the transfers it already completed
//! for that operation through [`AssetTransfer::refund`] (undoes a pull) and
//! [`AssetTransfer::reclaim`] (undoes a push).  The defaults map them onto
//! `push_to` and `pull_from`; implementations that meter pulls, such as an
//! allowance ledger, override them so a reversal leaves no trace.

use crate::domain::{Amount, Asset, ParticipantId};
use crate::error::TransferError;

/// Moves pool assets on behalf of the engine.
pub trait AssetTransfer {
    /// Moves `amount` of `asset` from `participant` into pool custody.
    ///
    /// # Errors
    ///
    /// - [`TransferError::InsufficientAllowance`] if the participant has not
    ///   authorized at least `amount`.
    /// - [`TransferError::InsufficientBalance`] if the participant holds
    ///   less than `amount`.
    fn pull_from(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Moves `amount` of `asset` from pool custody to `participant`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if custody cannot cover the amount or the
    /// recipient is rejected.
    fn push_to(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError>;

    /// Reverses an earlier successful [`pull_from`](Self::pull_from) of the
    /// same operation.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the reversal itself fails.
    fn refund(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.push_to(participant, asset, amount)
    }

    /// Reverses an earlier successful [`push_to`](Self::push_to) of the same
    /// operation.
    ///
    /// # Errors
    ///
    /// Returns a [`TransferError`] if the reversal itself fails.
    fn reclaim(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.pull_from(participant, asset, amount)
    }
}
