//! Lock-guarded pool handle for concurrent callers.
//!
//! Mutating operations hold the write lock for their whole pipeline
//! (plan, settle, apply, emit), so they are serialized per pool.  Queries
//! take the read lock and may run alongside each other, never alongside a
//! mutation.

use std::sync::Arc;

use parking_lot::RwLock;

use super::Pool;
use crate::domain::{
    Amount, Deposit, Invariant, ParticipantId, PoolSnapshot, Shares, SwapDirection, SwapOutcome,
    Withdrawal,
};
use crate::error::AmmError;
use crate::traits::{AccessControl, AssetTransfer, EventSink};

/// Cloneable handle to one [`Pool`] shared between threads.
///
/// Every clone refers to the same pool.
#[derive(Debug)]
pub struct SharedPool<T, A, E> {
    inner: Arc<RwLock<Pool<T, A, E>>>,
}

impl<T, A, E> Clone for SharedPool<T, A, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T, A, E> From<Pool<T, A, E>> for SharedPool<T, A, E> {
    fn from(pool: Pool<T, A, E>) -> Self {
        Self::new(pool)
    }
}

impl<T, A, E> SharedPool<T, A, E> {
    /// Wraps `pool`.
    #[must_use]
    pub fn new(pool: Pool<T, A, E>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(pool)),
        }
    }

    /// Runs `f` under the read lock.
    pub fn inspect<R>(&self, f: impl FnOnce(&Pool<T, A, E>) -> R) -> R {
        f(&self.inner.read())
    }

    /// Runs `f` under the write lock, e.g. to fund participants through
    /// [`Pool::transfer_mut`].
    pub fn inspect_mut<R>(&self, f: impl FnOnce(&mut Pool<T, A, E>) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// Unwraps the pool if this is the last handle; otherwise returns the
    /// handle unchanged.
    ///
    /// # Errors
    ///
    /// Returns `self` while other clones are alive.
    pub fn into_inner(self) -> Result<Pool<T, A, E>, Self> {
        Arc::try_unwrap(self.inner)
            .map(|lock| lock.into_inner())
            .map_err(|inner| Self { inner })
    }

    /// Reserve of asset X.
    pub fn reserve_x(&self) -> Amount {
        self.inner.read().reserve_x()
    }

    /// Reserve of asset Y.
    pub fn reserve_y(&self) -> Amount {
        self.inner.read().reserve_y()
    }

    /// `reserve_x × reserve_y`.
    #[must_use]
    pub fn invariant_k(&self) -> Invariant {
        self.inner.read().invariant_k()
    }

    /// Shares outstanding.
    pub fn total_shares(&self) -> Shares {
        self.inner.read().total_shares()
    }

    /// Shares held by `participant`.
    pub fn share_of(&self, participant: &ParticipantId) -> Shares {
        self.inner.read().share_of(participant)
    }

    /// Consistent copy of the aggregate fields.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        self.inner.read().snapshot()
    }

    /// See [`Pool::quote_x_for_y_deposit`].
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] or [`AmmError::ZeroReserve`].
    pub fn quote_x_for_y_deposit(&self, deposit_y: Amount) -> Result<Amount, AmmError> {
        self.inner.read().quote_x_for_y_deposit(deposit_y)
    }

    /// See [`Pool::quote_y_for_x_deposit`].
    ///
    /// # Errors
    ///
    /// [`AmmError::NotInitialized`] or [`AmmError::ZeroReserve`].
    pub fn quote_y_for_x_deposit(&self, deposit_x: Amount) -> Result<Amount, AmmError> {
        self.inner.read().quote_y_for_x_deposit(deposit_x)
    }

    /// See [`Pool::preview_swap`].
    ///
    /// # Errors
    ///
    /// Same as [`Pool::preview_swap`].
    pub fn preview_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.inner.read().preview_swap(direction, amount_in)
    }
}

impl<T, A, E> SharedPool<T, A, E>
where
    T: AssetTransfer,
    A: AccessControl,
    E: EventSink,
{
    /// See [`Pool::initialize`].
    ///
    /// # Errors
    ///
    /// Same as [`Pool::initialize`].
    pub fn initialize(
        &self,
        caller: &ParticipantId,
        amount_x: Amount,
        amount_y: Amount,
    ) -> Result<Deposit, AmmError> {
        self.inner.write().initialize(caller, amount_x, amount_y)
    }

    /// See [`Pool::add_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`Pool::add_liquidity`].
    pub fn add_liquidity(
        &self,
        caller: &ParticipantId,
        deposit_x: Amount,
        deposit_y: Amount,
    ) -> Result<Deposit, AmmError> {
        self.inner.write().add_liquidity(caller, deposit_x, deposit_y)
    }

    /// See [`Pool::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Same as [`Pool::remove_liquidity`].
    pub fn remove_liquidity(
        &self,
        caller: &ParticipantId,
        shares: Shares,
    ) -> Result<Withdrawal, AmmError> {
        self.inner.write().remove_liquidity(caller, shares)
    }

    /// See [`Pool::swap_x_for_y`].
    ///
    /// # Errors
    ///
    /// Same as [`Pool::swap`].
    pub fn swap_x_for_y(
        &self,
        caller: &ParticipantId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.inner.write().swap_x_for_y(caller, amount_in)
    }

    /// See [`Pool::swap_y_for_x`].
    ///
    /// # Errors
    ///
    /// Same as [`Pool::swap`].
    pub fn swap_y_for_x(
        &self,
        caller: &ParticipantId,
        amount_in: Amount,
    ) -> Result<SwapOutcome, AmmError> {
        self.inner.write().swap_y_for_x(caller, amount_in)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::collaborators::{InMemoryLedger, RecordingSink, SingleInitializer};
    use crate::config::PoolConfig;
    use crate::domain::Asset;

    type Shared = SharedPool<InMemoryLedger, SingleInitializer, RecordingSink>;

    fn participant(n: u8) -> ParticipantId {
        ParticipantId::from_address([n; 20])
    }

    fn seeded() -> Shared {
        let owner = participant(0);
        let Ok(pool) = Pool::new(
            PoolConfig::default(),
            InMemoryLedger::new(),
            SingleInitializer::new(owner),
            RecordingSink::new(),
        ) else {
            panic!("valid config");
        };
        let shared = SharedPool::new(pool);
        shared.inspect_mut(|pool| {
            for n in 0..=8u8 {
                for asset in [Asset::X, Asset::Y] {
                    let Ok(()) = pool
                        .transfer_mut()
                        .mint(participant(n), asset, Amount::new(1_000_000))
                    else {
                        panic!("mint failed");
                    };
                    pool.transfer_mut()
                        .approve(participant(n), asset, Amount::new(1_000_000));
                }
            }
        });
        let Ok(_) = shared.initialize(&owner, Amount::new(100_000), Amount::new(500_000)) else {
            panic!("initialize failed");
        };
        shared
    }

    #[test]
    fn clones_share_one_pool() {
        let a = seeded();
        let b = a.clone();
        let Ok(_) = a.add_liquidity(&participant(1), Amount::new(10), Amount::new(50)) else {
            panic!("deposit failed");
        };
        assert_eq!(b.share_of(&participant(1)), Shares::new(60));
        assert!(b.clone().into_inner().is_err());
        drop(b);
        let Ok(pool) = a.into_inner() else {
            panic!("last handle");
        };
        assert_eq!(pool.total_shares(), Shares::new(600_060));
    }

    #[test]
    fn concurrent_swaps_keep_books_consistent() {
        let shared = seeded();
        let k0 = shared.invariant_k();
        std::thread::scope(|s| {
            for n in 1..=8u8 {
                let pool = shared.clone();
                s.spawn(move || {
                    for _ in 0..25 {
                        let who = participant(n);
                        let r = if n % 2 == 0 {
                            pool.swap_x_for_y(&who, Amount::new(100))
                        } else {
                            pool.swap_y_for_x(&who, Amount::new(500))
                        };
                        assert!(r.is_ok());
                        let snap = pool.snapshot();
                        assert_eq!(
                            snap.invariant_k,
                            Invariant::of(snap.reserve_x, snap.reserve_y)
                        );
                    }
                });
            }
        });
        assert!(shared.invariant_k() > k0);
        shared.inspect(|pool| {
            assert_eq!(pool.reserve_x(), pool.transfer().custody(Asset::X));
            assert_eq!(pool.reserve_y(), pool.transfer().custody(Asset::Y));
            assert_eq!(pool.events().events().len(), 3 + 8 * 25 * 2);
        });
    }

    #[test]
    fn queries_read_through() {
        let shared = seeded();
        assert_eq!(shared.reserve_x(), Amount::new(100_000));
        assert_eq!(shared.reserve_y(), Amount::new(500_000));
        assert_eq!(shared.total_shares(), Shares::new(600_000));
        assert_eq!(
            shared.quote_y_for_x_deposit(Amount::new(10)),
            Ok(Amount::new(50))
        );
        assert_eq!(
            shared.quote_x_for_y_deposit(Amount::new(50)),
            Ok(Amount::new(10))
        );
        assert!(shared
            .preview_swap(SwapDirection::XForY, Amount::new(100))
            .is_ok());
    }
}
