//! 256-bit intermediates for `u128` pool quantities.
//!
//! Reserves and shares are `u128`.  Products of two of them need up to 256
//! bits, and the swap numerator multiplies three factors, so every product is
//! formed with checked [`U256`] arithmetic and only the final quotient is
//! narrowed back to `u128`.

use ethereum_types::U256;

use super::div_round;
use crate::domain::Rounding;
use crate::error::AmmError;

/// Computes `a × b / c` with explicit rounding.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if `a × b` exceeds 256 bits.
/// - [`AmmError::DivisionByZero`] if `c` is zero.
pub fn mul_div(a: U256, b: U256, c: U256, rounding: Rounding) -> Result<U256, AmmError> {
    let product = a
        .checked_mul(b)
        .ok_or(AmmError::Overflow("mul_div product exceeds 256 bits"))?;
    div_round(product, c, rounding).ok_or(AmmError::DivisionByZero)
}

/// Checked 256-bit product.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] tagged with `what` on overflow.
pub fn checked_product(a: U256, b: U256, what: &'static str) -> Result<U256, AmmError> {
    a.checked_mul(b).ok_or(AmmError::Overflow(what))
}

/// Narrows a 256-bit value to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] tagged with `what` if the value does not
/// fit.
pub fn narrow(value: U256, what: &'static str) -> Result<u128, AmmError> {
    if value > U256::from(u128::MAX) {
        return Err(AmmError::Overflow(what));
    }
    Ok(value.as_u128())
}
