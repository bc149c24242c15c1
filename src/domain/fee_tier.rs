//! Swap fee taken from the input side.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::basis_points::MAX_BPS;
use super::{Amount, BasisPoints, Rounding};

/// The pool's single swap fee, expressed in [`BasisPoints`].
///
/// The swap formula consumes the fee as an integer ratio
/// `numerator / denominator` where `numerator = 10_000 − bps` and
/// `denominator = 10_000`.  The default 1% tier is therefore `9_900 /
/// 10_000`, which reduces to `99 / 100` and yields bit-identical outputs.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::FeeTier;
///
/// let fee = FeeTier::default();
/// assert_eq!(fee.basis_points().get(), 100);
/// assert_eq!(fee.numerator(), 9_900);
/// assert_eq!(fee.denominator(), 10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 1.00% fee, the pool default.
    pub const ONE_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier`.
    ///
    /// Values of 100% or more leave nothing to price and are rejected by
    /// [`PoolConfig::validate`](crate::config::PoolConfig::validate).
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Fraction of the input that reaches the pricing curve, scaled by
    /// [`denominator`](Self::denominator).
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        match self.0.complement() {
            Some(bp) => bp.get() as u128,
            None => 0,
        }
    }

    /// Fixed scale of the fee ratio.
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        MAX_BPS as u128
    }

    /// Informational fee charged on `amount_in`, floored.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) only
    /// for an out-of-range tier above 100%.
    pub fn fee_on(&self, amount_in: Amount) -> crate::error::Result<Amount> {
        self.0.apply(amount_in, Rounding::Down)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::ONE_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
