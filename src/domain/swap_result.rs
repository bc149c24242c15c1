//! Outcome of a swap.

use core::fmt;

use serde::Serialize;

use super::{Amount, SwapDirection};
use crate::error::AmmError;

/// What a swap took in, paid out, and charged.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `fee < amount_in`.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Amount, SwapDirection, SwapOutcome};
///
/// let outcome = SwapOutcome::new(
///     SwapDirection::XForY,
///     Amount::new(1_000),
///     Amount::new(4_900),
///     Amount::new(10),
/// );
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwapOutcome {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome` with validated invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero or `fee >= amount_in`.
    /// - [`AmmError::InsufficientLiquidity`] if `amount_out` is zero.
    pub const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
    ) -> crate::error::Result<Self> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be positive"));
        }
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        if fee.get() >= amount_in.get() {
            return Err(AmmError::InvalidAmount("fee must be less than swap input"));
        }
        Ok(Self {
            direction,
            amount_in,
            amount_out,
            fee,
        })
    }

    /// Swap direction.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Amount paid in.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Amount paid out.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Portion of the input retained as fee (informational, floored).
    pub const fn fee(&self) -> Amount {
        self.fee
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap[{}](in={}, out={}, fee={})",
            self.direction, self.amount_in, self.amount_out, self.fee
        )
    }
}
