//! Receipts returned by the liquidity operations.

use core::fmt;

use serde::Serialize;

use super::{Amount, Shares};

/// A two-sided deposit and the shares it minted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Deposit {
    /// Amount of X pulled from the depositor.
    pub amount_x: Amount,
    /// Amount of Y pulled from the depositor.
    pub amount_y: Amount,
    /// Shares credited to the depositor.
    pub minted: Shares,
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(x={}, y={}, minted={})",
            self.amount_x, self.amount_y, self.minted
        )
    }
}

/// A withdrawal: shares burned and the reserves paid out for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Withdrawal {
    /// Amount of X pushed to the withdrawer.
    pub amount_x: Amount,
    /// Amount of Y pushed to the withdrawer.
    pub amount_y: Amount,
    /// Shares debited from the withdrawer.
    pub burned: Shares,
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(x={}, y={}, burned={})",
            self.amount_x, self.amount_y, self.burned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_deposit() {
        let d = Deposit {
            amount_x: Amount::new(1),
            amount_y: Amount::new(5),
            minted: Shares::new(6),
        };
        assert_eq!(d.to_string(), "Deposit(x=1, y=5, minted=6)");
    }

    #[test]
    fn display_withdrawal() {
        let w = Withdrawal {
            amount_x: Amount::new(2),
            amount_y: Amount::new(9),
            burned: Shares::new(11),
        };
        assert_eq!(w.to_string(), "Withdrawal(x=2, y=9, burned=11)");
    }
}
