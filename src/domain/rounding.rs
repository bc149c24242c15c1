//! Direction of every integer division in the crate.

/// Which way a truncated quotient moves when the division is inexact.
///
/// Pool payouts (swap output, withdrawals, quotes) use `Down`, so the
/// remainder stays in the pool as dust.  `Up` gives the opposite bound.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Rounding;
///
/// // 7 / 2 truncates to 3 with a remainder
/// assert_eq!(Rounding::Down.bump(true), 0);
/// assert_eq!(Rounding::Up.bump(true), 1);
/// assert_eq!(Rounding::Up.bump(false), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor; what the pool uses.
    #[default]
    Down,
}

impl Rounding {
    /// Amount to add to a truncated quotient: `1` when rounding up an
    /// inexact division, `0` otherwise.
    #[must_use]
    pub const fn bump(&self, has_remainder: bool) -> u8 {
        match self {
            Self::Up if has_remainder => 1,
            _ => 0,
        }
    }
}
