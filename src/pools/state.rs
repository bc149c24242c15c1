//! Pure pool state machine.
//!
//! [`PoolState`] owns the reserves, the invariant, and the share ledger.  It
//! never moves assets.  Every mutation is split in two steps:
//!
//! 1. **Plan**: a `plan_*` method validates the request against the current
//!    state and returns a [`Transition`] describing the next state, the
//!    transfers required to reach it, and the receipt for the caller.
//!    Planning takes `&self`, so a rejected request cannot leave a trace.
//! 2. **Apply**: once the transfers have settled, the transition is written
//!    back in one step.
//!
//! The [`Pool`](super::Pool) engine sits between the two steps and performs
//! the transfers.  Callers that only need the arithmetic (simulations,
//! property tests) can use the one-shot methods [`PoolState::initialize`],
//! [`PoolState::add_liquidity`], [`PoolState::remove_liquidity`] and
//! [`PoolState::swap`], which plan and apply without any collaborator.

use std::collections::HashMap;

use crate::config::PoolConfig;
use crate::domain::{
    Amount, Asset, Deposit, FeeTier, Invariant, ParticipantId, PoolEvent, PoolSnapshot,
    PoolStatus, ShareDelta, Shares, SwapDirection, SwapOutcome, Withdrawal,
};
use crate::error::AmmError;
use crate::math::{
    proportional_amount, quote_deposit, ratio_matches, swap_output, CheckedArithmetic,
};

/// What a transition does, with the figures the caller gets back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// First deposit of the pool.
    Initialized(Deposit),
    /// Ratio-matched deposit into an active pool.
    LiquidityAdded(Deposit),
    /// Share redemption.
    LiquidityRemoved(Withdrawal),
    /// Trade against the curve.
    Swapped(SwapOutcome),
}

/// A validated, not yet applied state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    participant: ParticipantId,
    pulls: Vec<(Asset, Amount)>,
    pushes: Vec<(Asset, Amount)>,
    reserve_x: Amount,
    reserve_y: Amount,
    total_shares: Shares,
    participant_shares: Shares,
    outcome: Outcome,
}

impl Transition {
    /// Participant the transition acts for.
    #[must_use]
    pub const fn participant(&self) -> &ParticipantId {
        &self.participant
    }

    /// Amounts to pull from the participant into the pool, in order.
    #[must_use]
    pub fn pulls(&self) -> &[(Asset, Amount)] {
        &self.pulls
    }

    /// Amounts to push from the pool to the participant, in order.
    #[must_use]
    pub fn pushes(&self) -> &[(Asset, Amount)] {
        &self.pushes
    }

    /// Reserve of X once applied.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Reserve of Y once applied.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Invariant once applied.
    pub fn invariant_k(&self) -> Invariant {
        Invariant::of(self.reserve_x, self.reserve_y)
    }

    /// Shares outstanding once applied.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// The operation and its figures.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Events describing the transition, in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<PoolEvent> {
        let participant = self.participant;
        let parameters = PoolEvent::PoolParametersUpdated {
            reserve_x: self.reserve_x,
            reserve_y: self.reserve_y,
            invariant_k: self.invariant_k(),
        };
        match self.outcome {
            Outcome::Initialized(deposit) => vec![
                PoolEvent::Initialized {
                    x: deposit.amount_x,
                    y: deposit.amount_y,
                },
                PoolEvent::SharesUpdated {
                    participant,
                    delta: ShareDelta::Minted(deposit.minted),
                },
                parameters,
            ],
            Outcome::LiquidityAdded(deposit) => vec![
                PoolEvent::LiquidityAdded {
                    deposit_x: deposit.amount_x,
                    deposit_y: deposit.amount_y,
                    participant,
                },
                PoolEvent::SharesUpdated {
                    participant,
                    delta: ShareDelta::Minted(deposit.minted),
                },
                parameters,
            ],
            Outcome::LiquidityRemoved(withdrawal) => vec![
                PoolEvent::LiquidityRemoved {
                    amount_x: withdrawal.amount_x,
                    amount_y: withdrawal.amount_y,
                    participant,
                },
                PoolEvent::SharesUpdated {
                    participant,
                    delta: ShareDelta::Burned(withdrawal.burned),
                },
                parameters,
            ],
            Outcome::Swapped(swap) => vec![
                PoolEvent::Swapped {
                    direction: swap.direction(),
                    amount_in: swap.amount_in(),
                    amount_out: swap.amount_out(),
                    participant,
                },
                parameters,
            ],
        }
    }
}

/// Reserves, invariant and share ledger of one pool.
///
/// # Invariants
///
/// - `invariant_k == reserve_x × reserve_y` after every applied transition.
/// - The sum of all share balances equals `total_shares`.
/// - `status` moves from `Uninitialized` to `Active` once and never back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoolState {
    fee_tier: FeeTier,
    status: PoolStatus,
    reserve_x: Amount,
    reserve_y: Amount,
    invariant_k: Invariant,
    total_shares: Shares,
    share_of: HashMap<ParticipantId, Shares>,
}

impl PoolState {
    /// Creates an uninitialized pool charging `fee_tier` on swap input.
    #[must_use]
    pub fn new(fee_tier: FeeTier) -> Self {
        Self {
            fee_tier,
            ..Self::default()
        }
    }

    /// Creates an uninitialized pool from a configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`PoolConfig::validate`] failures.
    pub fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self::new(config.fee_tier()))
    }

    // -- queries ----------------------------------------------------------------

    /// Swap fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }

    /// Lifecycle state.
    #[must_use]
    pub const fn status(&self) -> PoolStatus {
        self.status
    }

    /// `true` once `initialize` has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.status == PoolStatus::Active
    }

    /// `true` if the pool is active but every share has been redeemed.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.is_initialized() && self.total_shares.is_zero()
    }

    /// Reserve of asset X.
    pub const fn reserve_x(&self) -> Amount {
        self.reserve_x
    }

    /// Reserve of asset Y.
    pub const fn reserve_y(&self) -> Amount {
        self.reserve_y
    }

    /// Reserve of `asset`.
    pub const fn reserve(&self, asset: Asset) -> Amount {
        match asset {
            Asset::X => self.reserve_x,
            Asset::Y => self.reserve_y,
        }
    }

    /// `reserve_x × reserve_y`.
    #[must_use]
    pub const fn invariant_k(&self) -> Invariant {
        self.invariant_k
    }

    /// Shares outstanding.
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Shares held by `participant`; zero for unknown participants.
    pub fn share_of(&self, participant: &ParticipantId) -> Shares {
        self.share_of.get(participant).copied().unwrap_or_default()
    }

    /// Every participant with a non-zero balance.
    pub fn shareholders(&self) -> impl Iterator<Item = (&ParticipantId, Shares)> + '_ {
        self.share_of.iter().map(|(p, s)| (p, *s))
    }

    /// Copy of the aggregate fields.
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            status: self.status,
            reserve_x: self.reserve_x,
            reserve_y: self.reserve_y,
            invariant_k: self.invariant_k,
            total_shares: self.total_shares,
        }
    }

    /// X that matches a deposit of `deposit_y` at the current ratio, floored.
    ///
    /// Only a hint: `add_liquidity` still demands an exact ratio match.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::ZeroReserve`] if the Y reserve is empty.
    pub fn quote_x_for_y_deposit(&self, deposit_y: Amount) -> Result<Amount, AmmError> {
        self.require_active()?;
        quote_deposit(deposit_y, self.reserve_y, self.reserve_x)
    }

    /// Y that matches a deposit of `deposit_x` at the current ratio, floored.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::ZeroReserve`] if the X reserve is empty.
    pub fn quote_y_for_x_deposit(&self, deposit_x: Amount) -> Result<Amount, AmmError> {
        self.require_active()?;
        quote_deposit(deposit_x, self.reserve_x, self.reserve_y)
    }

    /// Result of a swap without executing it.
    ///
    /// # Errors
    ///
    /// Same as [`PoolState::plan_swap`].
    pub fn preview_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.require_active()?;
        let reserve_in = self.reserve(direction.input());
        let reserve_out = self.reserve(direction.output());
        let amount_out = swap_output(amount_in, reserve_in, reserve_out, self.fee_tier)?;
        let fee = self.fee_tier.fee_on(amount_in)?;
        SwapOutcome::new(direction, amount_in, amount_out, fee)
    }

    /// `(amount_x, amount_y)` paid out for redeeming `shares`, without
    /// executing the withdrawal.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShare`] if `shares` exceeds the total
    ///   outstanding.
    pub fn preview_remove_liquidity(&self, shares: Shares) -> Result<(Amount, Amount), AmmError> {
        self.require_active()?;
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("share amount must be positive"));
        }
        if shares > self.total_shares {
            return Err(AmmError::InsufficientShare {
                owned: self.total_shares.get(),
                requested: shares.get(),
            });
        }
        self.withdrawal_amounts(shares)
    }

    // -- planning ---------------------------------------------------------------

    /// Plans the first deposit.
    ///
    /// Does not check authorization; that belongs to the engine.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AlreadyInitialized`] if the pool is active.
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    /// - [`AmmError::Overflow`] if `amount_x + amount_y` overflows.
    pub fn plan_initialize(
        &self,
        participant: ParticipantId,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<(Transition, Deposit), AmmError> {
        if self.is_initialized() {
            return Err(AmmError::AlreadyInitialized);
        }
        if amount_x.is_zero() || amount_y.is_zero() {
            return Err(AmmError::InvalidAmount("initial reserves must be positive"));
        }
        let minted = Shares::from_deposit(amount_x, amount_y)
            .ok_or(AmmError::Overflow("initial share issue overflow"))?;

        let deposit = Deposit {
            amount_x,
            amount_y,
            minted,
        };
        let transition = Transition {
            participant,
            pulls: vec![(Asset::X, amount_x), (Asset::Y, amount_y)],
            pushes: Vec::new(),
            reserve_x: amount_x,
            reserve_y: amount_y,
            total_shares: minted,
            participant_shares: minted,
            outcome: Outcome::Initialized(deposit),
        };
        Ok((transition, deposit))
    }

    /// Plans a deposit at the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::InvalidAmount`] if either deposit is zero.
    /// - [`AmmError::RatioMismatch`] unless
    ///   `deposit_x × reserve_y == deposit_y × reserve_x`.
    /// - [`AmmError::Overflow`] if a reserve or share balance overflows.
    pub fn plan_add_liquidity(
        &self,
        participant: ParticipantId,
        deposit_x: Amount,
        deposit_y: Amount,
    ) -> Result<(Transition, Deposit), AmmError> {
        self.require_active()?;
        if deposit_x.is_zero() || deposit_y.is_zero() {
            return Err(AmmError::InvalidAmount("deposits must be positive"));
        }
        if !ratio_matches(deposit_x, deposit_y, self.reserve_x, self.reserve_y) {
            return Err(AmmError::RatioMismatch);
        }

        let minted = Shares::from_deposit(deposit_x, deposit_y)
            .ok_or(AmmError::Overflow("share issue overflow"))?;
        let deposit = Deposit {
            amount_x: deposit_x,
            amount_y: deposit_y,
            minted,
        };
        let transition = Transition {
            participant,
            pulls: vec![(Asset::X, deposit_x), (Asset::Y, deposit_y)],
            pushes: Vec::new(),
            reserve_x: self.reserve_x.safe_add(&deposit_x)?,
            reserve_y: self.reserve_y.safe_add(&deposit_y)?,
            total_shares: self.total_shares.safe_add(&minted)?,
            participant_shares: self.share_of(&participant).safe_add(&minted)?,
            outcome: Outcome::LiquidityAdded(deposit),
        };
        Ok((transition, deposit))
    }

    /// Plans redeeming `shares` for a floored pro-rata cut of both reserves.
    ///
    /// Zero-amount legs are left out of the push list.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShare`] if the participant owns fewer.
    pub fn plan_remove_liquidity(
        &self,
        participant: ParticipantId,
        shares: Shares,
    ) -> Result<(Transition, Withdrawal), AmmError> {
        self.require_active()?;
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount("share amount must be positive"));
        }
        let owned = self.share_of(&participant);
        if owned < shares {
            return Err(AmmError::InsufficientShare {
                owned: owned.get(),
                requested: shares.get(),
            });
        }

        let (amount_x, amount_y) = self.withdrawal_amounts(shares)?;
        let withdrawal = Withdrawal {
            amount_x,
            amount_y,
            burned: shares,
        };
        let pushes = [(Asset::X, amount_x), (Asset::Y, amount_y)]
            .into_iter()
            .filter(|(_, amount)| !amount.is_zero())
            .collect();
        let transition = Transition {
            participant,
            pulls: Vec::new(),
            pushes,
            reserve_x: self.reserve_x.safe_sub(&amount_x)?,
            reserve_y: self.reserve_y.safe_sub(&amount_y)?,
            total_shares: self.total_shares.safe_sub(&shares)?,
            participant_shares: owned.safe_sub(&shares)?,
            outcome: Outcome::LiquidityRemoved(withdrawal),
        };
        Ok((transition, withdrawal))
    }

    /// Plans selling `amount_in` of `direction.input()`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the output floors to zero or
    ///   would exhaust the output reserve.
    pub fn plan_swap(
        &self,
        participant: ParticipantId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<(Transition, SwapOutcome), AmmError> {
        let swap = self.preview_swap(direction, amount_in)?;

        let reserve_in = self
            .reserve(direction.input())
            .safe_add(&swap.amount_in())?;
        let reserve_out = self
            .reserve(direction.output())
            .safe_sub(&swap.amount_out())?;
        let (reserve_x, reserve_y) = match direction {
            SwapDirection::XForY => (reserve_in, reserve_out),
            SwapDirection::YForX => (reserve_out, reserve_in),
        };

        let transition = Transition {
            participant,
            pulls: vec![(direction.input(), swap.amount_in())],
            pushes: vec![(direction.output(), swap.amount_out())],
            reserve_x,
            reserve_y,
            total_shares: self.total_shares,
            participant_shares: self.share_of(&participant),
            outcome: Outcome::Swapped(swap),
        };
        Ok((transition, swap))
    }

    // -- applying ---------------------------------------------------------------

    /// Writes a transition planned against this exact state.
    pub(crate) fn apply(&mut self, transition: &Transition) {
        self.status = PoolStatus::Active;
        self.reserve_x = transition.reserve_x;
        self.reserve_y = transition.reserve_y;
        self.invariant_k = transition.invariant_k();
        self.total_shares = transition.total_shares;
        if transition.participant_shares.is_zero() {
            self.share_of.remove(&transition.participant);
        } else {
            self.share_of
                .insert(transition.participant, transition.participant_shares);
        }
    }

    // -- one-shot operations ----------------------------------------------------

    /// Plans and applies [`PoolState::plan_initialize`].
    ///
    /// # Errors
    ///
    /// Same as [`PoolState::plan_initialize`].
    pub fn initialize(
        &mut self,
        participant: ParticipantId,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<Deposit, AmmError> {
        let (transition, deposit) = self.plan_initialize(participant, amount_x, amount_y)?;
        self.apply(&transition);
        Ok(deposit)
    }

    /// Plans and applies [`PoolState::plan_add_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`PoolState::plan_add_liquidity`].
    pub fn add_liquidity(
        &mut self,
        participant: ParticipantId,
        deposit_x: Amount,
        deposit_y: Amount,
    ) -> Result<Deposit, AmmError> {
        let (transition, deposit) = self.plan_add_liquidity(participant, deposit_x, deposit_y)?;
        self.apply(&transition);
        Ok(deposit)
    }

    /// Plans and applies [`PoolState::plan_remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`PoolState::plan_remove_liquidity`].
    pub fn remove_liquidity(
        &mut self,
        participant: ParticipantId,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        let (transition, withdrawal) = self.plan_remove_liquidity(participant, shares)?;
        self.apply(&transition);
        Ok(withdrawal)
    }

    /// Plans and applies [`PoolState::plan_swap`].
    ///
    /// # Errors
    ///
    /// Same as [`PoolState::plan_swap`].
    pub fn swap(
        &mut self,
        participant: ParticipantId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        let (transition, swap) = self.plan_swap(participant, direction, amount_in)?;
        self.apply(&transition);
        Ok(swap)
    }

    fn require_active(&self) -> Result<(), AmmError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(AmmError::NotInitialized)
        }
    }

    fn withdrawal_amounts(&self, shares: Shares) -> Result<(Amount, Amount), AmmError> {
        let amount_x = proportional_amount(self.reserve_x, shares, self.total_shares)?;
        let amount_y = proportional_amount(self.reserve_y, shares, self.total_shares)?;
        Ok((amount_x, amount_y))
    }
}
