//! The constant-product invariant `k = reserve_x × reserve_y`.

use core::fmt;

use ethereum_types::U256;
use serde::{Deserialize, Serialize};

use super::Amount;

/// Product of the two pool reserves.
///
/// Two `u128` reserves multiply to at most 256 bits, so the product is
/// held in a [`U256`] and computing it can never overflow.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, Invariant};
///
/// let k = Invariant::of(Amount::new(100_000), Amount::new(500_000));
/// assert_eq!(k.to_string(), "50000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Invariant(U256);

impl Invariant {
    /// The invariant of an empty pool.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Computes `reserve_x × reserve_y`.
    #[must_use]
    pub fn of(reserve_x: Amount, reserve_y: Amount) -> Self {
        // u128::MAX² < 2^256, so the product cannot overflow.
        Self(U256::from(reserve_x.get()) * U256::from(reserve_y.get()))
    }

    /// Wraps a raw 256-bit value.
    #[must_use]
    pub const fn from_raw(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the invariant is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn product_of_small_reserves() {
        let k = Invariant::of(Amount::new(3), Amount::new(7));
        assert_eq!(k.get(), U256::from(21u64));
    }

    #[test]
    fn product_beyond_u128() {
        let e18 = 10u128.pow(18);
        let k = Invariant::of(Amount::new(100_000 * e18), Amount::new(500_000 * e18));
        let Ok(expected) = U256::from_dec_str("50000000000000000000000000000000000000000000000")
        else {
            panic!("valid decimal");
        };
        assert_eq!(k.get(), expected);
        assert_eq!(k.to_string(), "50000000000000000000000000000000000000000000000");
    }

    #[test]
    fn max_reserves_fit() {
        let k = Invariant::of(Amount::MAX, Amount::MAX);
        assert!(k > Invariant::ZERO);
    }

    #[test]
    fn zero_reserve_gives_zero() {
        assert!(Invariant::of(Amount::ZERO, Amount::new(9)).is_zero());
        assert_eq!(Invariant::default(), Invariant::ZERO);
    }

    #[test]
    fn ordering_follows_value() {
        let lo = Invariant::of(Amount::new(10), Amount::new(10));
        let hi = Invariant::of(Amount::new(10), Amount::new(11));
        assert!(lo < hi);
    }
}
