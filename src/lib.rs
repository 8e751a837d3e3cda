//! # Swap Router
//!
//! Exact-arithmetic trade math for constant-product AMM pairs: reserve
//! snapshots, multi-hop routes, best-trade search and slippage bounds.
//!
//! Every price and ratio is an arbitrary-precision [`Rational`](math::Rational)
//! and every raw amount an unbounded integer, so results are reproducible
//! bit for bit and never overflow.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for value types and configs |
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! swap-router = "0.1"
//! ```
//!
//! ## Find the best route and bound it by slippage
//!
//! ```rust
//! use swap_router::config::SearchConfig;
//! use swap_router::domain::{Amount, SlippagePercent, Token, TokenAmount};
//! use swap_router::pools::Pair;
//! use swap_router::routing::best_trade_exact_in;
//!
//! // 1. Define three tokens
//! let usdc = Token::try_new("0xa0", 6).expect("valid token").with_symbol("USDC");
//! let weth = Token::try_new("0xc0", 18).expect("valid token").with_symbol("WETH");
//! let dai = Token::try_new("0x6b", 18).expect("valid token").with_symbol("DAI");
//!
//! // 2. Snapshot the pairs
//! let reserves = |token: &Token, text: &str| {
//!     TokenAmount::from_token_str(token.clone(), text).expect("valid reserve")
//! };
//! let pairs = vec![
//!     Pair::new(reserves(&usdc, "2000000"), reserves(&weth, "1000")).expect("distinct"),
//!     Pair::new(reserves(&weth, "1000"), reserves(&dai, "2000000")).expect("distinct"),
//! ];
//!
//! // 3. Search for the best exact-input trade
//! let amount_in = reserves(&usdc, "1000");
//! let trade = best_trade_exact_in(&pairs, &amount_in, &dai, &SearchConfig::default())
//!     .expect("valid config")
//!     .expect("a route exists");
//! assert_eq!(trade.route().hops(), 2);
//!
//! // 4. Bound the output by 0.5% slippage
//! let min_out = trade.minimum_amount_out(&SlippagePercent::from_bps(50));
//! assert!(min_out.amount() < trade.output_amount().amount());
//! assert!(min_out.amount() > &Amount::zero());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Routing    │  best_trade_exact_in / _out, Trade, Route
//! └──────┬──────┘
//!        │ get_output_amount / get_input_amount
//!        ▼
//! ┌─────────────┐
//! │    Pools     │  Pair (x · y = k, 0.3% fee)
//! └──────┬──────┘
//!        │ TokenAmount, Price, Percent
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  Token, Amount, Price, SlippagePercent, …
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │    Math      │  Rational, div_round
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Token`](domain::Token), [`TokenAmount`](domain::TokenAmount), [`Price`](domain::Price), [`SlippagePercent`](domain::SlippagePercent), etc. |
//! | [`pools`]  | [`Pair`](pools::Pair) constant-product reserve snapshot |
//! | [`routing`] | [`Route`](routing::Route), [`Trade`](routing::Trade) and the best-trade search |
//! | [`config`] | [`PairConfig`](config::PairConfig) and [`SearchConfig`](config::SearchConfig) |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) construction seam |
//! | [`math`]   | [`Rational`](math::Rational) and rounding division |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The search emits [`tracing`] events: `trace` for every pruned branch and
//! `debug` for per-search summaries.  Install a subscriber to see them.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod routing;
pub mod traits;
