//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use swap_router::prelude::*;
//!
//! let slippage: SlippagePercent = "0.5".parse().expect("valid slippage");
//! assert_eq!(slippage, SlippagePercent::from_bps(50));
//! ```
//!
//! This re-exports the most frequently used domain types, the pair and
//! routing types, configuration and error types so that consumers don't
//! need to import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Amount, Decimals, Percent, Price, Rounding, SlippagePercent, Token, TokenAddress, TokenAmount,
    TokenPair, TradeType,
};

// Re-export math
pub use crate::math::Rational;

// Re-export pools and routing
pub use crate::pools::Pair;
pub use crate::routing::{
    Route, Trade, TradeQuote, best_trade_exact_in, best_trade_exact_out, best_trades_exact_in,
    best_trades_exact_out,
};

// Re-export configuration and traits
pub use crate::config::{PairConfig, SearchConfig};
pub use crate::traits::FromConfig;

// Re-export error types
pub use crate::error::{AmmError, Result};
