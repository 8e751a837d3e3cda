//! Fundamental domain value types used throughout the crate.
//!
//! This module contains the core value types that model the AMM domain:
//! tokens, raw amounts, percentages, prices, trade direction and slippage.
//! All types are immutable newtypes with validated constructors that
//! enforce their invariants.

mod amount;
mod decimals;
mod percent;
mod price;
mod rounding;
mod slippage;
mod token;
mod token_address;
mod token_amount;
mod token_pair;
mod trade_type;

#[cfg(test)]
mod proptest_properties;

pub use amount::Amount;
pub use decimals::Decimals;
pub use percent::{BPS_PER_WHOLE, Percent};
pub use price::Price;
pub use rounding::Rounding;
pub use slippage::{DEFAULT_SLIPPAGE_BPS, SlippagePercent, adjust_down, adjust_up, parse_slippage};
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_amount::TokenAmount;
pub use token_pair::TokenPair;
pub use trade_type::TradeType;
