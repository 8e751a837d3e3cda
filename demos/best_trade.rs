//! Best-trade routing example.
//!
//! Demonstrates building constant-product pairs from configuration,
//! searching for the best exact-input and exact-output trades across them,
//! and bounding the result by a user-supplied slippage tolerance.
//!
//! # Run
//!
//! ```bash
//! cargo run --example best_trade
//! ```

use swap_router::config::{PairConfig, SearchConfig};
use swap_router::domain::{Rounding, SlippagePercent, Token, TokenAmount};
use swap_router::pools::Pair;
use swap_router::routing::{best_trade_exact_in, best_trade_exact_out, best_trades_exact_in};
use swap_router::traits::FromConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Best-Trade Routing ===\n");

    // ── 1. Define tokens ────────────────────────────────────────────────
    let usdc = Token::try_new("0xa0b86991", 6)?.with_symbol("USDC");
    let weth = Token::try_new("0xc02aaa39", 18)?.with_symbol("WETH");
    let dai = Token::try_new("0x6b175474", 18)?.with_symbol("DAI");

    // ── 2. Build pairs from reserve snapshots ───────────────────────────
    //    The direct USDC/DAI pool is shallow; the WETH pools are deep.
    let configs = [
        PairConfig::new(usdc.clone(), dai.clone(), "5000", "5000")?,
        PairConfig::new(usdc.clone(), weth.clone(), "20000000", "10000")?,
        PairConfig::new(weth.clone(), dai.clone(), "10000", "20000000")?,
    ];
    let pairs = configs
        .iter()
        .map(Pair::from_config)
        .collect::<Result<Vec<_>, _>>()?;
    for pair in &pairs {
        println!("Pair: {pair}");
    }

    // ── 3. Rank exact-input trades ──────────────────────────────────────
    let amount_in = TokenAmount::from_token_str(usdc.clone(), "2500")?;
    let cfg = SearchConfig::default();
    println!("\n--- Sell {amount_in} ---");
    for (rank, trade) in best_trades_exact_in(&pairs, &amount_in, &dai, &cfg)?
        .iter()
        .enumerate()
    {
        println!(
            "  #{}: {} via {} ({} hops)",
            rank + 1,
            trade.output_amount().to_fixed(4, Rounding::Down),
            trade.route(),
            trade.route().hops()
        );
    }

    // ── 4. Inspect the best trade ───────────────────────────────────────
    let Some(best) = best_trade_exact_in(&pairs, &amount_in, &dai, &cfg)? else {
        println!("No route found");
        return Ok(());
    };
    let slippage: SlippagePercent = "0.5".parse()?;
    println!("\n--- Best trade ---");
    println!("  Route:        {}", best.route());
    println!("  Output:       {}", best.output_amount());
    println!("  Exec. price:  {}", best.execution_price()?);
    println!("  Mid price:    {}", best.mid_price()?);
    println!("  Price impact: {}", best.price_impact()?);
    println!("  Slippage:     {slippage}");
    println!(
        "  Min. output:  {}",
        best.minimum_amount_out(&slippage).to_fixed(6, Rounding::Down)
    );

    // ── 5. Quote an exact-output trade ──────────────────────────────────
    let amount_out = TokenAmount::from_token_str(weth.clone(), "1.5")?;
    println!("\n--- Buy {amount_out} ---");
    match best_trade_exact_out(&pairs, &usdc, &amount_out, &cfg)? {
        Some(trade) => {
            println!("  Route:        {}", trade.route());
            println!("  Input:        {}", trade.input_amount());
            println!(
                "  Max. input:   {}",
                trade.maximum_amount_in(&slippage).to_fixed(2, Rounding::Up)
            );
        }
        None => println!("  No route can supply {amount_out}"),
    }

    println!("\n=== Done ===");
    Ok(())
}
