//! Pool engine: state machine plus collaborators.
//!
//! Every mutating operation runs the same pipeline:
//!
//! 1. authorize (only `initialize`),
//! 2. plan a [`Transition`] against the current [`PoolState`],
//! 3. settle: all pulls, then all pushes, through the [`AssetTransfer`],
//! 4. apply the transition,
//! 5. emit its events.
//!
//! A failure in steps 1–3 returns `Err` with the state untouched.  When a
//! transfer fails in step 3, the transfers already made for the operation
//! are reversed before returning.

use tracing::{debug, error, info, warn};

use super::state::{PoolState, Transition};
use crate::config::PoolConfig;
use crate::domain::{
    Amount, Asset, Deposit, FeeTier, Invariant, ParticipantId, PoolSnapshot, Shares,
    SwapDirection, SwapOutcome, Withdrawal,
};
use crate::error::AmmError;
use crate::traits::{AccessControl, AssetTransfer, EventSink};

/// A two-asset constant-product pool wired to its collaborators.
///
/// # Example
///
/// ```rust
/// use pair_amm::collaborators::{InMemoryLedger, RecordingSink, SingleInitializer};
/// use pair_amm::config::PoolConfig;
/// use pair_amm::domain::{Amount, Asset, ParticipantId};
/// use pair_amm::pools::Pool;
///
/// let owner = ParticipantId::from_address([1u8; 20]);
/// let mut ledger = InMemoryLedger::new();
/// for (asset, amount) in [(Asset::X, 1_000u128), (Asset::Y, 5_000)] {
///     ledger.mint(owner, asset, Amount::new(amount)).expect("no overflow");
///     ledger.approve(owner, asset, Amount::new(amount));
/// }
///
/// let mut pool = Pool::new(
///     PoolConfig::default(),
///     ledger,
///     SingleInitializer::new(owner),
///     RecordingSink::new(),
/// )
/// .expect("default config is valid");
///
/// let deposit = pool
///     .initialize(&owner, Amount::new(1_000), Amount::new(5_000))
///     .expect("owner may initialize");
/// assert_eq!(deposit.minted.get(), 6_000);
/// assert_eq!(pool.transfer().custody(Asset::Y), Amount::new(5_000));
/// ```
#[derive(Debug, Clone)]
pub struct Pool<T, A, E> {
    config: PoolConfig,
    state: PoolState,
    transfer: T,
    access: A,
    events: E,
}

impl<T, A, E> Pool<T, A, E>
where
    T: AssetTransfer,
    A: AccessControl,
    E: EventSink,
{
    /// Creates an uninitialized pool.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid.
    pub fn new(config: PoolConfig, transfer: T, access: A, events: E) -> Result<Self, AmmError> {
        let state = PoolState::from_config(&config)?;
        debug!(pool = %config.label(), fee = %config.fee_tier(), "pool created");
        Ok(Self {
            config,
            state,
            transfer,
            access,
            events,
        })
    }

    // -- mutating operations ----------------------------------------------------

    /// Seeds the pool with its first reserves and issues
    /// `amount_x + amount_y` shares to `caller`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotAuthorized`] unless `caller` is the initializer.
    /// - [`AmmError::AlreadyInitialized`] on an active pool.
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    /// - [`AmmError::Transfer`] if pulling either asset fails.
    pub fn initialize(
        &mut self,
        caller: &ParticipantId,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<Deposit, AmmError> {
        if !self.access.is_initializer(caller) {
            warn!(pool = %self.config.label(), caller = %caller, "initialize refused");
            return Err(AmmError::NotAuthorized);
        }
        let (transition, deposit) = self
            .state
            .plan_initialize(*caller, amount_x, amount_y)
            .inspect_err(|e| self.rejected("initialize", caller, e))?;
        self.execute("initialize", &transition)?;
        Ok(deposit)
    }

    /// Deposits both assets at exactly the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::InvalidAmount`] if either deposit is zero.
    /// - [`AmmError::RatioMismatch`] if the deposit is off-ratio.
    /// - [`AmmError::Transfer`] if pulling either asset fails.
    pub fn add_liquidity(
        &mut self,
        caller: &ParticipantId,
        deposit_x: Amount,
        deposit_y: Amount,
    ) -> Result<Deposit, AmmError> {
        let (transition, deposit) = self
            .state
            .plan_add_liquidity(*caller, deposit_x, deposit_y)
            .inspect_err(|e| self.rejected("add_liquidity", caller, e))?;
        self.execute("add_liquidity", &transition)?;
        Ok(deposit)
    }

    /// Redeems `shares` for a floored pro-rata cut of both reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientShare`] if `caller` owns fewer shares.
    /// - [`AmmError::Transfer`] if pushing either asset fails.
    pub fn remove_liquidity(
        &mut self,
        caller: &ParticipantId,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        let (transition, withdrawal) = self
            .state
            .plan_remove_liquidity(*caller, shares)
            .inspect_err(|e| self.rejected("remove_liquidity", caller, e))?;
        self.execute("remove_liquidity", &transition)?;
        Ok(withdrawal)
    }

    /// Sells `amount_in` of X for Y.
    ///
    /// # Errors
    ///
    /// See [`Pool::swap`].
    pub fn swap_x_for_y(
        &mut self,
        caller: &ParticipantId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.swap(caller, SwapDirection::XForY, amount_in)
    }

    /// Sells `amount_in` of Y for X.
    ///
    /// # Errors
    ///
    /// See [`Pool::swap`].
    pub fn swap_y_for_x(
        &mut self,
        caller: &ParticipantId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.swap(caller, SwapDirection::YForX, amount_in)
    }

    /// Sells `amount_in` of `direction.input()` against the curve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotInitialized`] before `initialize`.
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the output floors to zero or
    ///   would exhaust the output reserve.
    /// - [`AmmError::Transfer`] if the pull or the push fails.
    pub fn swap(
        &mut self,
        caller: &ParticipantId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        let (transition, outcome) = self
            .state
            .plan_swap(*caller, direction, amount_in)
            .inspect_err(|e| self.rejected("swap", caller, e))?;
        self.execute("swap", &transition)?;
        Ok(outcome)
    }

    // -- pipeline ---------------------------------------------------------------

    fn execute(&mut self, op: &'static str, transition: &Transition) -> Result<(), AmmError> {
        debug!(
            pool = %self.config.label(),
            op,
            participant = %transition.participant(),
            pulls = transition.pulls().len(),
            pushes = transition.pushes().len(),
            "transition planned"
        );
        self.settle(op, transition)?;
        self.state.apply(transition);
        info!(
            pool = %self.config.label(),
            op,
            reserve_x = %self.state.reserve_x(),
            reserve_y = %self.state.reserve_y(),
            k = %self.state.invariant_k(),
            total_shares = %self.state.total_shares(),
            "transition committed"
        );
        for event in transition.events() {
            self.events.emit(event);
        }
        Ok(())
    }

    fn settle(&mut self, op: &'static str, transition: &Transition) -> Result<(), AmmError> {
        let who = transition.participant();
        let pulls = transition.pulls();
        let pushes = transition.pushes();

        for (i, &(asset, amount)) in pulls.iter().enumerate() {
            if let Err(e) = self.transfer.pull_from(who, asset, amount) {
                warn!(pool = %self.config.label(), op, %asset, %amount, error = %e, "pull failed, unwinding");
                self.unwind(who, &pulls[..i], &[]);
                return Err(e.into());
            }
        }
        for (i, &(asset, amount)) in pushes.iter().enumerate() {
            if let Err(e) = self.transfer.push_to(who, asset, amount) {
                warn!(pool = %self.config.label(), op, %asset, %amount, error = %e, "push failed, unwinding");
                self.unwind(who, pulls, &pushes[..i]);
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// Reverses completed transfers, newest first.
    fn unwind(
        &mut self,
        who: &ParticipantId,
        pulled: &[(Asset, Amount)],
        pushed: &[(Asset, Amount)],
    ) {
        for &(asset, amount) in pushed.iter().rev() {
            if let Err(e) = self.transfer.reclaim(who, asset, amount) {
                error!(pool = %self.config.label(), participant = %who, %asset, %amount, error = %e, "reclaim failed");
            }
        }
        for &(asset, amount) in pulled.iter().rev() {
            if let Err(e) = self.transfer.refund(who, asset, amount) {
                error!(pool = %self.config.label(), participant = %who, %asset, %amount, error = %e, "refund failed");
            }
        }
    }

    fn rejected(&self, op: &'static str, caller: &ParticipantId, e: &AmmError) {
        debug!(pool = %self.config.label(), op, caller = %caller, error = %e, "operation rejected");
    }
}

impl<T, A, E> Pool<T, A, E> {
    // -- queries ----------------------------------------------------------------

    /// Reserve of asset X.
    pub const fn reserve_x(&self) -> Amount {
        self.state.reserve_x()
    }

    /// Reserve of asset Y.
    pub const fn reserve_y(&self) -> Amount {
        self.state.reserve_y()
    }

    /// `reserve_x × reserve_y`.
    #[must_use]
    pub const fn invariant_k(&self) -> Invariant {
        self.state.invariant_k()
    }

    /// Shares outstanding.
    pub const fn total_shares(&self) -> Shares {
        self.state.total_shares()
    }

    /// Shares held by `participant`.
    pub fn share_of(&self, participant: &ParticipantId) -> Shares {
        self.state.share_of(participant)
    }

    /// See [`PoolState::quote_x_for_y_deposit`].
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] or [`AmmError::ZeroReserve`].
    pub fn quote_x_for_y_deposit(&self, deposit_y: Amount) -> Result<Amount, AmmError> {
        self.state.quote_x_for_y_deposit(deposit_y)
    }

    /// See [`PoolState::quote_y_for_x_deposit`].
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] or [`AmmError::ZeroReserve`].
    pub fn quote_y_for_x_deposit(&self, deposit_x: Amount) -> Result<Amount, AmmError> {
        self.state.quote_y_for_x_deposit(deposit_x)
    }

    /// See [`PoolState::preview_swap`].
    ///
    /// # Errors
    ///
    /// Same as [`Pool::swap`], minus transfer failures.
    pub fn preview_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.state.preview_swap(direction, amount_in)
    }

    /// See [`PoolState::preview_remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`PoolState::preview_remove_liquidity`].
    pub fn preview_remove_liquidity(&self, shares: Shares) -> Result<(Amount, Amount), AmmError> {
        self.state.preview_remove_liquidity(shares)
    }

    /// Copy of the aggregate fields.
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        self.state.snapshot()
    }

    /// `true` once `initialize` has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// `true` if active with no shares outstanding.
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.state.is_drained()
    }

    /// Swap fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        self.state.fee_tier()
    }

    /// Configuration the pool was built from.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Underlying state machine.
    #[must_use]
    pub const fn state(&self) -> &PoolState {
        &self.state
    }

    // -- collaborators ----------------------------------------------------------

    /// Asset-transfer collaborator.
    #[must_use]
    pub const fn transfer(&self) -> &T {
        &self.transfer
    }

    /// Mutable asset-transfer collaborator, e.g. to fund participants.
    pub fn transfer_mut(&mut self) -> &mut T {
        &mut self.transfer
    }

    /// Access-control collaborator.
    #[must_use]
    pub const fn access(&self) -> &A {
        &self.access
    }

    /// Event sink.
    #[must_use]
    pub const fn events(&self) -> &E {
        &self.events
    }

    /// Mutable event sink.
    pub fn events_mut(&mut self) -> &mut E {
        &mut self.events
    }

    /// Splits the pool into state and collaborators.
    pub fn into_parts(self) -> (PoolState, T, A, E) {
        (self.state, self.transfer, self.access, self.events)
    }
}
