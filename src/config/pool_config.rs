//! Configuration for a two-asset constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{BasisPoints, FeeTier};
use crate::error::AmmError;

/// Label used when none is configured.
pub const DEFAULT_LABEL: &str = "pool";

/// Fee charged on swap input when none is configured, in basis points.
pub const DEFAULT_FEE_BPS: u32 = 100;

/// Immutable parameters of a pool.
///
/// # Validation
///
/// - `label` must not be empty or whitespace.
/// - `fee_bps` must be strictly below 10 000 (a 100 % fee would make every
///   swap return nothing).
///
/// # TOML
///
/// ```
/// use pair_amm::config::PoolConfig;
///
/// let Ok(cfg) = PoolConfig::from_toml_str("label = \"xy\"\nfee_bps = 30\n") else {
///     panic!("valid config");
/// };
/// assert_eq!(cfg.label(), "xy");
/// assert_eq!(cfg.fee_tier().basis_points().get(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    label: String,
    fee_bps: u32,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_owned(),
            fee_bps: DEFAULT_FEE_BPS,
        }
    }
}

impl PoolConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if validation fails.
    pub fn new(label: impl Into<String>, fee_bps: u32) -> Result<Self, AmmError> {
        let config = Self {
            label: label.into(),
            fee_bps,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document, fills missing keys with defaults, and
    /// validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the document does not
    /// parse or the values are invalid.
    pub fn from_toml_str(source: &str) -> Result<Self, AmmError> {
        let config: Self = toml::from_str(source)
            .map_err(|e| AmmError::InvalidConfiguration(e.message().to_owned()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.label.trim().is_empty() {
            return Err(AmmError::InvalidConfiguration(
                "label must not be empty".to_owned(),
            ));
        }
        if self.fee_bps >= BasisPoints::MAX_PERCENT.get() {
            return Err(AmmError::InvalidConfiguration(format!(
                "fee_bps must be below 10000, got {}",
                self.fee_bps
            )));
        }
        Ok(())
    }

    /// Pool label, used in logs.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Swap fee tier.
    #[must_use]
    pub const fn fee_tier(&self) -> FeeTier {
        FeeTier::new(BasisPoints::new(self.fee_bps))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_one_percent() {
        let cfg = PoolConfig::default();
        assert_eq!(cfg.label(), "pool");
        assert_eq!(cfg.fee_tier(), FeeTier::ONE_PERCENT);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn new_validates() {
        assert!(PoolConfig::new("xy", 30).is_ok());
        assert!(PoolConfig::new("xy", 0).is_ok());
        assert!(PoolConfig::new("xy", 9_999).is_ok());
        let Err(AmmError::InvalidConfiguration(msg)) = PoolConfig::new("xy", 10_000) else {
            panic!("expected InvalidConfiguration");
        };
        assert!(msg.contains("fee_bps"));
        let Err(AmmError::InvalidConfiguration(_)) = PoolConfig::new("  ", 30) else {
            panic!("expected InvalidConfiguration");
        };
    }

    #[test]
    fn toml_missing_keys_use_defaults() {
        let Ok(cfg) = PoolConfig::from_toml_str("") else {
            panic!("expected Ok");
        };
        assert_eq!(cfg, PoolConfig::default());

        let Ok(cfg) = PoolConfig::from_toml_str("fee_bps = 25") else {
            panic!("expected Ok");
        };
        assert_eq!(cfg.label(), DEFAULT_LABEL);
        assert_eq!(cfg.fee_tier().basis_points().get(), 25);
    }

    #[test]
    fn toml_rejects_bad_documents() {
        assert!(matches!(
            PoolConfig::from_toml_str("fee_bps = \"high\""),
            Err(AmmError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            PoolConfig::from_toml_str("fee_bps = 20000"),
            Err(AmmError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            PoolConfig::from_toml_str("tick_spacing = 60"),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }
}
