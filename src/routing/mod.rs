//! Routes, trades and the best-trade search.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Route`] | Validated chain of [`Pair`](crate::pools::Pair)s from one token to another |
//! | [`Trade`] | A route with both amounts resolved, plus price and slippage helpers |
//! | [`trade_comparator`] | Ranking used by the search |
//! | [`best_trade_exact_in`] / [`best_trade_exact_out`] | Bounded DFS over a pair set |
//! | [`TradeQuote`] | Pending / empty / found result wrapper |

mod best_trade;
mod quote;
mod route;
mod trade;

pub use best_trade::{
    best_trade_exact_in, best_trade_exact_out, best_trades_exact_in, best_trades_exact_out,
};
pub use quote::TradeQuote;
pub use route::Route;
pub use trade::{Trade, trade_comparator};
