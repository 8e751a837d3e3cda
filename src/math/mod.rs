//! Exact arithmetic utilities for AMM calculations.
//!
//! This module provides [`Rational`], the arbitrary-precision fraction type
//! every price and ratio in the crate is built on, and [`div_round`] for
//! integer division with an explicit [`Rounding`](crate::domain::Rounding).
//!
//! | Item | Use case |
//! |------|----------|
//! | [`Rational`] | prices, percentages, price impact |
//! | [`div_round`] | reserve formulas, decimal rendering |
//! | [`pow10`] | token decimal scaling |

mod rational;
mod rounding;

pub use rational::{Rational, pow10};
pub(crate) use rational::trim_fraction;
pub use rounding::div_round;
