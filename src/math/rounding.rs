//! Rounding-aware 256-bit division.
//!
//! Every division in the pool engine goes through [`div_round`] with an
//! explicit [`Rounding`].  Pool-side quantities (swap output, withdrawal
//! amounts, quotes) always use [`Rounding::Down`] so that truncation leaves
//! the remainder in the pool.
//!
//! # Examples
//!
//! ```
//! use ethereum_types::U256;
//! use pair_amm::domain::Rounding;
//! use pair_amm::math::div_round;
//!
//! let ten = U256::from(10u64);
//! let three = U256::from(3u64);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u64)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U256::from(4u64)));
//! assert_eq!(div_round(ten, U256::zero(), Rounding::Down), None);
//! ```

use ethereum_types::U256;

use crate::domain::Rounding;

/// Divides `numerator` by `denominator` in the given direction.
///
/// Returns `None` if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    let q = numerator.checked_div(denominator)?;
    let exact = (numerator % denominator).is_zero();
    q.checked_add(U256::from(rounding.bump(!exact)))
}
