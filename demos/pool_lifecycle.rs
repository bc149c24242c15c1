//! Pool lifecycle walkthrough at 18-decimal scale.
//!
//! Seeds a 100 000 X / 500 000 Y pool, adds liquidity at the quoted ratio,
//! trades in both directions, and withdraws.  Events are logged through
//! `tracing`; raise the level to see the engine's own planning logs.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=pair_amm=debug cargo run --example pool_lifecycle
//! ```

use pair_amm::collaborators::{InMemoryLedger, SingleInitializer, TracingSink};
use pair_amm::config::PoolConfig;
use pair_amm::domain::{Amount, Asset, ParticipantId, Shares};
use pair_amm::pools::Pool;

const E18: u128 = 1_000_000_000_000_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Constant-product pool (x · y = k) ===\n");

    // ── 1. Fund participants ────────────────────────────────────────────
    let owner = ParticipantId::from_address([0x11; 20]);
    let bob = ParticipantId::from_address([0xB0; 20]);

    let mut ledger = InMemoryLedger::new();
    for (who, x, y) in [(owner, 100_000 * E18, 500_000 * E18), (bob, 10 * E18, 50 * E18)] {
        ledger.mint(who, Asset::X, Amount::new(x))?;
        ledger.mint(who, Asset::Y, Amount::new(y))?;
        ledger.approve(who, Asset::X, Amount::new(x));
        ledger.approve(who, Asset::Y, Amount::new(y));
    }

    // ── 2. Create and seed the pool ─────────────────────────────────────
    let config = PoolConfig::from_toml_str("label = \"demo\"\nfee_bps = 100\n")?;
    let mut pool = Pool::new(config, ledger, SingleInitializer::new(owner), TracingSink)?;

    let seed = pool.initialize(&owner, Amount::new(100_000 * E18), Amount::new(500_000 * E18))?;
    println!("Seeded:    {seed}");
    println!("Pool:      {}", pool.snapshot());

    // ── 3. Bob adds liquidity at the quoted ratio ───────────────────────
    let deposit_y = Amount::new(5_500_000_000_000_000_000);
    let deposit_x = pool.quote_x_for_y_deposit(deposit_y)?;
    let deposit = pool.add_liquidity(&bob, deposit_x, deposit_y)?;
    println!("\nBob:       {deposit}");

    match pool.add_liquidity(&bob, Amount::new(E18), Amount::new(E18)) {
        Ok(_) => println!("unexpected: off-ratio deposit accepted"),
        Err(e) => println!("Off-ratio: {e}"),
    }

    // ── 4. Trade both ways ──────────────────────────────────────────────
    let k_before = pool.invariant_k();
    let buy_x = pool.swap_y_for_x(&bob, Amount::new(5 * E18))?;
    println!("\nSwap:      {buy_x}");
    let buy_y = pool.swap_x_for_y(&bob, Amount::new(E18))?;
    println!("Swap:      {buy_y}");
    println!("k grew:    {} -> {}", k_before, pool.invariant_k());

    // ── 5. Withdraw ─────────────────────────────────────────────────────
    let bob_shares = pool.share_of(&bob);
    let out = pool.remove_liquidity(&bob, bob_shares)?;
    println!("\nBob out:   {out}");

    let owner_half = Shares::new(pool.share_of(&owner).get() / 2);
    let out = pool.remove_liquidity(&owner, owner_half)?;
    println!("Owner out: {out}");

    println!("\nFinal:     {}", pool.snapshot());
    println!(
        "Bob holds: {} X, {} Y",
        pool.transfer().balance_of(&bob, Asset::X),
        pool.transfer().balance_of(&bob, Asset::Y)
    );

    Ok(())
}
