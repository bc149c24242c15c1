//! Pool configuration.
//!
//! [`PoolConfig`] carries the immutable parameters of a pool: a label for
//! logs and the swap fee tier.  It can be built in code or loaded from TOML.

mod pool_config;

pub use pool_config::{DEFAULT_FEE_BPS, DEFAULT_LABEL, PoolConfig};
