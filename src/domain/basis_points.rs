//! Basis-point representation for percentages.

use core::fmt;

use ethereum_types::U256;
use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::math::{mul_div, narrow};

/// 100% in basis points.
pub(crate) const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// # Examples
///
/// ```
/// use pair_amm::domain::BasisPoints;
///
/// let bp = BasisPoints::new(100);
/// assert_eq!(bp.get(), 100);
/// assert_eq!(bp.complement(), Some(BasisPoints::new(9_900)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= MAX_BPS
    }

    /// Returns `10_000 − self`, or `None` above 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match MAX_BPS.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// The product is formed in 256 bits, so only a result above `u128`
    /// (a percentage over 100%) can fail.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if the
    /// result does not fit in `u128`.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let scaled = mul_div(
            amount.widen(),
            U256::from(self.0),
            U256::from(MAX_BPS),
            rounding,
        )?;
        narrow(scaled, "basis points apply overflow").map(Amount::new)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
