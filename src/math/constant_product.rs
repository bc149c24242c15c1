//! Constant-product formulas over integer reserves.
//!
//! # Swap output
//!
//! With fee ratio `n / d` (the part of the input that reaches the curve):
//!
//! ```text
//! amount_out = floor( d_in·n·reserve_out / (reserve_in·d + d_in·n) )
//! ```
//!
//! This is `(reserve_in + d_in·n/d)·(reserve_out − amount_out) = reserve_in·reserve_out`
//! solved for `amount_out` and rearranged so that a single floor division
//! happens last.  Flooring makes the pool keep the remainder, so
//! `k_after ≥ k_before` for every successful swap.
//!
//! # Withdrawal and quoting
//!
//! ```text
//! amount   = floor( reserve · shares / total_shares )
//! quote    = floor( deposit · reserve_wanted / reserve_given )
//! ratio ok ⇔ deposit_x · reserve_y == deposit_y · reserve_x
//! ```

use super::wide::{checked_product, mul_div, narrow};
use crate::domain::{Amount, FeeTier, Rounding, Shares};
use crate::error::AmmError;
use ethereum_types::U256;

/// Output of selling `amount_in` against `(reserve_in, reserve_out)`.
///
/// The fee is taken from the input before pricing:
/// `floor(d·n·r_out / (r_in·10000 + d·n))` with `n = 10000 − fee_bps`.
/// Charging the fee on the output instead, `floor(d·n·r_out / ((r_in + d)·10000))`,
/// pays slightly less (989990100098999010 rather than 989990199097028939 for
/// 5e18 in against 500 000e18 / 100 000e18 at 1%).
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero, or the
///   floored output is zero or would reach `reserve_out`.
/// - [`AmmError::Overflow`] if an intermediate product exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, FeeTier};
/// use pair_amm::math::swap_output;
///
/// let e18 = 10u128.pow(18);
/// let out = swap_output(
///     Amount::new(5 * e18),
///     Amount::new(500_000 * e18),
///     Amount::new(100_000 * e18),
///     FeeTier::ONE_PERCENT,
/// );
/// assert_eq!(out, Ok(Amount::new(989_990_199_097_028_939)));
/// ```
pub fn swap_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount("swap input must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let effective_in = checked_product(
        amount_in.widen(),
        U256::from(fee.numerator()),
        "fee-adjusted input overflow",
    )?;
    let scaled_reserve = checked_product(
        reserve_in.widen(),
        U256::from(fee.denominator()),
        "scaled reserve overflow",
    )?;
    let denominator = scaled_reserve
        .checked_add(effective_in)
        .ok_or(AmmError::Overflow("swap denominator overflow"))?;

    let out = mul_div(effective_in, reserve_out.widen(), denominator, Rounding::Down)?;
    let out = Amount::new(narrow(out, "swap output exceeds u128")?);

    if out.is_zero() || out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(out)
}

/// Share of `reserve` owed for `shares` out of `total_shares`, floored.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `total_shares` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit `u128`.
pub fn proportional_amount(
    reserve: Amount,
    shares: Shares,
    total_shares: Shares,
) -> Result<Amount, AmmError> {
    let v = mul_div(
        reserve.widen(),
        shares.widen(),
        total_shares.widen(),
        Rounding::Down,
    )?;
    Ok(Amount::new(narrow(v, "withdrawal amount exceeds u128")?))
}

/// Amount of the wanted asset that matches `deposit` of the given asset,
/// floored: `deposit × reserve_wanted / reserve_given`.
///
/// # Errors
///
/// - [`AmmError::ZeroReserve`] if `reserve_given` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit `u128`.
pub fn quote_deposit(
    deposit: Amount,
    reserve_given: Amount,
    reserve_wanted: Amount,
) -> Result<Amount, AmmError> {
    if reserve_given.is_zero() {
        return Err(AmmError::ZeroReserve);
    }
    let v = mul_div(
        deposit.widen(),
        reserve_wanted.widen(),
        reserve_given.widen(),
        Rounding::Down,
    )?;
    Ok(Amount::new(narrow(v, "quote exceeds u128")?))
}

/// Exact cross-multiplied ratio check:
/// `deposit_x × reserve_y == deposit_y × reserve_x`.
#[must_use]
pub fn ratio_matches(
    deposit_x: Amount,
    deposit_y: Amount,
    reserve_x: Amount,
    reserve_y: Amount,
) -> bool {
    // Both sides are products of two u128 values and fit in 256 bits.
    deposit_x.widen() * reserve_y.widen() == deposit_y.widen() * reserve_x.widen()
}
