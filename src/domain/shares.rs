//! Liquidity-provider share units.

use core::fmt;

use ethereum_types::U256;
use serde::{Deserialize, Serialize};

use super::Amount;

/// Units of proportional ownership of the pool reserves.
///
/// Shares are denominated in the sum-of-deposits convention: depositing
/// `x` of asset X together with `y` of asset Y mints `x + y` shares.  The
/// unit is therefore not asset-symmetric, and its value per unit only stays
/// constant across deposits made at the exact pool ratio.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, Shares};
///
/// let minted = Shares::from_deposit(Amount::new(2), Amount::new(10));
/// assert_eq!(minted, Some(Shares::new(12)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates `Shares` from a raw value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Shares minted for a two-sided deposit: `amount_x + amount_y`.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub const fn from_deposit(amount_x: Amount, amount_y: Amount) -> Option<Self> {
        match amount_x.get().checked_add(amount_y.get()) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if no shares are represented.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Widens to 256 bits.
    #[must_use]
    pub fn widen(&self) -> U256 {
        U256::from(self.0)
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Shares {
    fn from(value: u128) -> Self {
        Self(value)
    }
}
