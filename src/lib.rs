//! # Pair AMM
//!
//! Two-asset constant-product pool engine: reserves `x` and `y`, invariant
//! `k = x × y`, a share ledger issuing `Δx + Δy` shares per deposit, and a
//! swap curve that keeps a fee on the input side.
//!
//! The engine only does pool arithmetic.  Moving tokens, deciding who may
//! seed the pool, and publishing events are delegated to collaborators
//! behind the [`AssetTransfer`](traits::AssetTransfer),
//! [`AccessControl`](traits::AccessControl) and
//! [`EventSink`](traits::EventSink) traits.
//!
//! # Quick Start
//!
//! ```rust
//! use pair_amm::prelude::*;
//!
//! let e18 = 10u128.pow(18);
//! let owner = ParticipantId::from_address([0xA1; 20]);
//! let trader = ParticipantId::from_address([0xB0; 20]);
//!
//! // 1. Fund participants and let the pool pull from them
//! let mut ledger = InMemoryLedger::new();
//! for (who, x, y) in [(owner, 100_000 * e18, 500_000 * e18), (trader, 0, 5 * e18)] {
//!     ledger.mint(who, Asset::X, Amount::new(x)).expect("no overflow");
//!     ledger.mint(who, Asset::Y, Amount::new(y)).expect("no overflow");
//!     ledger.approve(who, Asset::X, Amount::new(x));
//!     ledger.approve(who, Asset::Y, Amount::new(y));
//! }
//!
//! // 2. Build and seed the pool (1% fee by default)
//! let mut pool = Pool::new(
//!     PoolConfig::default(),
//!     ledger,
//!     SingleInitializer::new(owner),
//!     RecordingSink::new(),
//! )
//! .expect("valid config");
//! pool.initialize(&owner, Amount::new(100_000 * e18), Amount::new(500_000 * e18))
//!     .expect("owner seeds the pool");
//!
//! // 3. Sell 5 Y for X
//! let swap = pool.swap_y_for_x(&trader, Amount::new(5 * e18)).expect("swap ok");
//! assert_eq!(swap.amount_out(), Amount::new(989_990_199_097_028_939));
//! assert_eq!(pool.events().names(), [
//!     "Initialized", "SharesUpdated", "PoolParametersUpdated",
//!     "Swapped", "PoolParametersUpdated",
//! ]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  SharedPool  │  Arc<RwLock<Pool>>: one writer, many readers
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐   pull / push / refund / reclaim   ┌────────────────┐
//! │     Pool     │ ─────────────────────────────────▶ │ AssetTransfer  │
//! │  (pipeline)  │ ─── is_initializer ──────────────▶ │ AccessControl  │
//! │              │ ─── emit ────────────────────────▶ │ EventSink      │
//! └──────┬───────┘                                     └────────────────┘
//!        │ plan / apply Transition
//!        ▼
//! ┌──────────────┐
//! │  PoolState   │  reserves, k, share ledger
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ math, domain │  U256 mul-div, Amount, Shares, Invariant, FeeTier, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Invariant`](domain::Invariant), events, receipts |
//! | [`math`]   | Checked arithmetic and the constant-product formulas |
//! | [`traits`] | Collaborator seams |
//! | [`collaborators`] | In-memory ledger, single-owner access, event sinks |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) with TOML loading |
//! | [`pools`]  | [`PoolState`](pools::PoolState), [`Pool`](pools::Pool), [`SharedPool`](pools::SharedPool) |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`TransferError`](error::TransferError) |
//! | [`prelude`] | Convenience re-exports |

pub mod collaborators;
pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
