//! Liquidity pool models.
//!
//! | Pool | Style |
//! |------|-------|
//! | [`Pair`] | Constant product, 0.3% fee (Uniswap V2) |

pub mod pair;

#[cfg(test)]
mod proptest_properties;

pub use pair::{FEE_DENOMINATOR, FEE_NUMERATOR, MINIMUM_LIQUIDITY, Pair};
