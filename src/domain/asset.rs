//! The two pool assets and swap directions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// One side of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Asset {
    /// Asset X.
    X,
    /// Asset Y.
    Y,
}

impl Asset {
    /// Returns the other asset of the pair.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::Y => write!(f, "Y"),
        }
    }
}

/// Direction of a swap.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Asset, SwapDirection};
///
/// let dir = SwapDirection::YForX;
/// assert_eq!(dir.input(), Asset::Y);
/// assert_eq!(dir.output(), Asset::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapDirection {
    /// Sell X, receive Y ("buy Y").
    XForY,
    /// Sell Y, receive X ("buy X").
    YForX,
}

impl SwapDirection {
    /// Asset the caller pays in.
    #[must_use]
    pub const fn input(&self) -> Asset {
        match self {
            Self::XForY => Asset::X,
            Self::YForX => Asset::Y,
        }
    }

    /// Asset the caller receives.
    #[must_use]
    pub const fn output(&self) -> Asset {
        self.input().other()
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::XForY => Self::YForX,
            Self::YForX => Self::XForY,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::XForY => write!(f, "X->Y"),
            Self::YForX => write!(f, "Y->X"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_asset() {
        assert_eq!(Asset::X.other(), Asset::Y);
        assert_eq!(Asset::Y.other(), Asset::X);
    }

    #[test]
    fn direction_assets() {
        assert_eq!(SwapDirection::XForY.input(), Asset::X);
        assert_eq!(SwapDirection::XForY.output(), Asset::Y);
        assert_eq!(SwapDirection::YForX.input(), Asset::Y);
        assert_eq!(SwapDirection::YForX.output(), Asset::X);
    }

    #[test]
    fn reversed_round_trips() {
        assert_eq!(SwapDirection::XForY.reversed(), SwapDirection::YForX);
        assert_eq!(
            SwapDirection::YForX.reversed().reversed(),
            SwapDirection::YForX
        );
    }

    #[test]
    fn display() {
        assert_eq!(Asset::X.to_string(), "X");
        assert_eq!(SwapDirection::YForX.to_string(), "Y->X");
    }
}
