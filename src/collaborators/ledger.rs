//! In-memory token ledger with an approve/pull allowance flow.
//!
//! Each participant holds a balance of each asset and grants the pool an
//! allowance per asset.  The pool's own holdings live in a separate custody
//! balance, so `custody(asset)` always equals the pool reserve plus any dust
//! donated outside the engine.

use std::collections::{HashMap, HashSet};

use crate::domain::{Amount, Asset, ParticipantId};
use crate::error::TransferError;
use crate::traits::AssetTransfer;

/// Balances, allowances and pool custody for both assets.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: HashMap<(ParticipantId, Asset), Amount>,
    allowances: HashMap<(ParticipantId, Asset), Amount>,
    custody_x: Amount,
    custody_y: Amount,
    frozen: HashSet<(ParticipantId, Asset)>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credits `amount` of `asset` to `participant` out of thin air.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Rejected`] if the balance would overflow.
    pub fn mint(
        &mut self,
        participant: ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let entry = self.balances.entry((participant, asset)).or_default();
        *entry = entry
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected(format!("balance overflow on {asset}")))?;
        Ok(())
    }

    /// Sets the amount of `asset` the pool may pull from `participant`.
    ///
    /// Overwrites any previous allowance, like ERC-20 `approve`.
    pub fn approve(&mut self, participant: ParticipantId, asset: Asset, amount: Amount) {
        self.allowances.insert((participant, asset), amount);
    }

    /// Balance of `asset` held by `participant`.
    #[must_use]
    pub fn balance_of(&self, participant: &ParticipantId, asset: Asset) -> Amount {
        self.balances
            .get(&(*participant, asset))
            .copied()
            .unwrap_or_default()
    }

    /// Remaining allowance of `asset` granted by `participant`.
    #[must_use]
    pub fn allowance(&self, participant: &ParticipantId, asset: Asset) -> Amount {
        self.allowances
            .get(&(*participant, asset))
            .copied()
            .unwrap_or_default()
    }

    /// Amount of `asset` held by the pool.
    #[must_use]
    pub const fn custody(&self, asset: Asset) -> Amount {
        match asset {
            Asset::X => self.custody_x,
            Asset::Y => self.custody_y,
        }
    }

    /// Makes every push of `asset` to `participant` fail with
    /// [`TransferError::Rejected`] until [`unfreeze`](Self::unfreeze).
    pub fn freeze(&mut self, participant: ParticipantId, asset: Asset) {
        self.frozen.insert((participant, asset));
    }

    /// Lifts a [`freeze`](Self::freeze).
    pub fn unfreeze(&mut self, participant: &ParticipantId, asset: Asset) {
        self.frozen.remove(&(*participant, asset));
    }

    fn custody_mut(&mut self, asset: Asset) -> &mut Amount {
        match asset {
            Asset::X => &mut self.custody_x,
            Asset::Y => &mut self.custody_y,
        }
    }

    /// Moves funds from `participant` into custody without touching the
    /// allowance.
    fn debit_into_custody(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let balance = self.balance_of(participant, asset);
        let remaining = balance
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance {
                asset,
                available: balance,
                required: amount,
            })?;
        let custody = self
            .custody(asset)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected(format!("custody overflow on {asset}")))?;
        self.balances.insert((*participant, asset), remaining);
        *self.custody_mut(asset) = custody;
        Ok(())
    }

    /// Moves funds out of custody to `participant`, ignoring freezes.
    fn credit_from_custody(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let held = self.custody(asset);
        let custody = held
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientBalance {
                asset,
                available: held,
                required: amount,
            })?;
        let balance = self
            .balance_of(participant, asset)
            .checked_add(&amount)
            .ok_or_else(|| TransferError::Rejected(format!("balance overflow on {asset}")))?;
        *self.custody_mut(asset) = custody;
        self.balances.insert((*participant, asset), balance);
        Ok(())
    }
}

impl AssetTransfer for InMemoryLedger {
    fn pull_from(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        let allowance = self.allowance(participant, asset);
        let left = allowance
            .checked_sub(&amount)
            .ok_or(TransferError::InsufficientAllowance {
                asset,
                available: allowance,
                required: amount,
            })?;
        self.debit_into_custody(participant, asset, amount)?;
        self.allowances.insert((*participant, asset), left);
        Ok(())
    }

    fn push_to(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        if self.frozen.contains(&(*participant, asset)) {
            return Err(TransferError::Rejected(format!(
                "{participant} is frozen for asset {asset}"
            )));
        }
        self.credit_from_custody(participant, asset, amount)
    }

    fn refund(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.credit_from_custody(participant, asset, amount)?;
        let restored = self
            .allowance(participant, asset)
            .checked_add(&amount)
            .unwrap_or(Amount::MAX);
        self.allowances.insert((*participant, asset), restored);
        Ok(())
    }

    fn reclaim(
        &mut self,
        participant: &ParticipantId,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), TransferError> {
        self.debit_into_custody(participant, asset, amount)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> ParticipantId {
        ParticipantId::from_address([0xA1; 20])
    }

    fn funded(amount: u128) -> InMemoryLedger {
        let mut ledger = InMemoryLedger::new();
        let Ok(()) = ledger.mint(alice(), Asset::X, Amount::new(amount)) else {
            panic!("mint failed");
        };
        ledger
    }

    #[test]
    fn pull_without_allowance_fails() {
        let mut ledger = funded(100);
        let Err(TransferError::InsufficientAllowance {
            available,
            required,
            ..
        }) = ledger.pull_from(&alice(), Asset::X, Amount::new(10))
        else {
            panic!("expected InsufficientAllowance");
        };
        assert_eq!(available, Amount::ZERO);
        assert_eq!(required, Amount::new(10));
        assert_eq!(ledger.balance_of(&alice(), Asset::X), Amount::new(100));
    }

    #[test]
    fn pull_beyond_balance_fails_and_keeps_allowance() {
        let mut ledger = funded(5);
        ledger.approve(alice(), Asset::X, Amount::new(50));
        let Err(TransferError::InsufficientBalance { .. }) =
            ledger.pull_from(&alice(), Asset::X, Amount::new(10))
        else {
            panic!("expected InsufficientBalance");
        };
        assert_eq!(ledger.allowance(&alice(), Asset::X), Amount::new(50));
        assert_eq!(ledger.custody(Asset::X), Amount::ZERO);
    }

    #[test]
    fn pull_consumes_allowance_and_fills_custody() {
        let mut ledger = funded(100);
        ledger.approve(alice(), Asset::X, Amount::new(60));
        let Ok(()) = ledger.pull_from(&alice(), Asset::X, Amount::new(40)) else {
            panic!("pull failed");
        };
        assert_eq!(ledger.balance_of(&alice(), Asset::X), Amount::new(60));
        assert_eq!(ledger.allowance(&alice(), Asset::X), Amount::new(20));
        assert_eq!(ledger.custody(Asset::X), Amount::new(40));
        assert_eq!(ledger.custody(Asset::Y), Amount::ZERO);
    }

    #[test]
    fn push_moves_custody_back() {
        let mut ledger = funded(100);
        ledger.approve(alice(), Asset::X, Amount::new(100));
        let Ok(()) = ledger.pull_from(&alice(), Asset::X, Amount::new(100)) else {
            panic!("pull failed");
        };
        let Ok(()) = ledger.push_to(&alice(), Asset::X, Amount::new(30)) else {
            panic!("push failed");
        };
        assert_eq!(ledger.balance_of(&alice(), Asset::X), Amount::new(30));
        assert_eq!(ledger.custody(Asset::X), Amount::new(70));
    }

    #[test]
    fn push_beyond_custody_fails() {
        let mut ledger = InMemoryLedger::new();
        let Err(TransferError::InsufficientBalance { .. }) =
            ledger.push_to(&alice(), Asset::Y, Amount::new(1))
        else {
            panic!("expected InsufficientBalance");
        };
    }

    #[test]
    fn frozen_recipient_rejected_until_unfrozen() {
        let mut ledger = funded(10);
        ledger.approve(alice(), Asset::X, Amount::new(10));
        let Ok(()) = ledger.pull_from(&alice(), Asset::X, Amount::new(10)) else {
            panic!("pull failed");
        };
        ledger.freeze(alice(), Asset::X);
        let Err(TransferError::Rejected(_)) = ledger.push_to(&alice(), Asset::X, Amount::new(1))
        else {
            panic!("expected Rejected");
        };
        ledger.unfreeze(&alice(), Asset::X);
        assert_eq!(ledger.push_to(&alice(), Asset::X, Amount::new(1)), Ok(()));
    }

    #[test]
    fn refund_restores_balance_and_allowance() {
        let mut ledger = funded(100);
        ledger.approve(alice(), Asset::X, Amount::new(100));
        let Ok(()) = ledger.pull_from(&alice(), Asset::X, Amount::new(25)) else {
            panic!("pull failed");
        };
        let Ok(()) = ledger.refund(&alice(), Asset::X, Amount::new(25)) else {
            panic!("refund failed");
        };
        assert_eq!(ledger.balance_of(&alice(), Asset::X), Amount::new(100));
        assert_eq!(ledger.allowance(&alice(), Asset::X), Amount::new(100));
        assert_eq!(ledger.custody(Asset::X), Amount::ZERO);
    }

    #[test]
    fn reclaim_ignores_allowance() {
        let mut ledger = funded(10);
        ledger.approve(alice(), Asset::X, Amount::new(10));
        let Ok(()) = ledger.pull_from(&alice(), Asset::X, Amount::new(10)) else {
            panic!("pull failed");
        };
        let Ok(()) = ledger.push_to(&alice(), Asset::X, Amount::new(4)) else {
            panic!("push failed");
        };
        assert_eq!(ledger.allowance(&alice(), Asset::X), Amount::ZERO);
        let Ok(()) = ledger.reclaim(&alice(), Asset::X, Amount::new(4)) else {
            panic!("reclaim failed");
        };
        assert_eq!(ledger.custody(Asset::X), Amount::new(10));
        assert_eq!(ledger.balance_of(&alice(), Asset::X), Amount::ZERO);
    }
}
