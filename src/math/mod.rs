//! Integer arithmetic for pool calculations.
//!
//! - [`CheckedArithmetic`]: `Result`-returning add/sub for domain types.
//! - [`div_round`]: 256-bit division with explicit [`Rounding`](crate::domain::Rounding).
//! - [`mul_div`], [`narrow`]: widened products narrowed back to `u128`.
//! - Constant-product formulas: [`swap_output`], [`proportional_amount`],
//!   [`quote_deposit`], [`ratio_matches`].

mod checked;
mod constant_product;
mod rounding;
mod wide;

pub use checked::CheckedArithmetic;
pub use constant_product::{proportional_amount, quote_deposit, ratio_matches, swap_output};
pub use rounding::div_round;
pub use wide::{checked_product, mul_div, narrow};
