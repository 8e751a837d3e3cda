//! Concrete trades along a route.

use core::cmp::Ordering;
use core::fmt;

use crate::config::SearchConfig;
use crate::domain::{
    Percent, Price, SlippagePercent, Token, TokenAmount, TradeType, adjust_down, adjust_up,
};
use crate::error::{AmmError, Result};
use crate::pools::Pair;

use super::Route;
use super::best_trade::{best_trade_exact_in, best_trade_exact_out};

/// A swap along a [`Route`] with both amounts resolved.
///
/// For [`TradeType::ExactInput`] the input is the caller's amount and the
/// output is computed hop by hop; for [`TradeType::ExactOutput`] the route
/// is walked backwards from the requested output.  The post-trade pair
/// snapshots are kept so [`Trade::next_mid_price`] can report where the
/// market moves to.
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Amount, SlippagePercent, Token, TokenAmount};
/// use swap_router::pools::Pair;
/// use swap_router::routing::{Route, Trade};
///
/// let a = Token::try_new("0x0a", 18).expect("valid");
/// let b = Token::try_new("0x0b", 18).expect("valid");
/// let pair = Pair::new(
///     TokenAmount::from_wei(a.clone(), Amount::new(1_000_000u32)),
///     TokenAmount::from_wei(b.clone(), Amount::new(1_000_000u32)),
/// )
/// .expect("distinct");
///
/// let route = Route::new(vec![pair], a.clone(), b.clone()).expect("contiguous");
/// let trade = Trade::exact_in(route, TokenAmount::from_wei(a, Amount::new(1_000u32)))
///     .expect("liquid");
/// assert_eq!(trade.output_amount().amount(), &Amount::new(996u32));
///
/// let min_out = trade.minimum_amount_out(&SlippagePercent::from_bps(50));
/// assert_eq!(min_out.amount(), &Amount::new(991u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade {
    route: Route,
    trade_type: TradeType,
    input_amount: TokenAmount,
    output_amount: TokenAmount,
    next_pairs: Vec<Pair>,
}

impl Trade {
    /// Sells exactly `amount_in` of the route's input token.
    ///
    /// # Errors
    ///
    /// - [`AmmError::TokenMismatch`] if `amount_in` is not in the route's
    ///   input token.
    /// - Any liquidity error raised by a hop.
    pub fn exact_in(route: Route, amount_in: TokenAmount) -> Result<Self> {
        if amount_in.token() != route.input() {
            return Err(AmmError::TokenMismatch);
        }

        let mut next_pairs = Vec::with_capacity(route.hops());
        let mut current = amount_in.clone();
        for pair in route.pairs() {
            let (out, next) = pair.get_output_amount(&current)?;
            next_pairs.push(next);
            current = out;
        }

        Ok(Self {
            route,
            trade_type: TradeType::ExactInput,
            input_amount: amount_in,
            output_amount: current,
            next_pairs,
        })
    }

    /// Buys exactly `amount_out` of the route's output token.
    ///
    /// # Errors
    ///
    /// - [`AmmError::TokenMismatch`] if `amount_out` is not in the route's
    ///   output token.
    /// - Any liquidity error raised by a hop.
    pub fn exact_out(route: Route, amount_out: TokenAmount) -> Result<Self> {
        if amount_out.token() != route.output() {
            return Err(AmmError::TokenMismatch);
        }

        let mut next_pairs = Vec::with_capacity(route.hops());
        let mut current = amount_out.clone();
        for pair in route.pairs().iter().rev() {
            let (inp, next) = pair.get_input_amount(&current)?;
            next_pairs.push(next);
            current = inp;
        }
        next_pairs.reverse();

        Ok(Self {
            route,
            trade_type: TradeType::ExactOutput,
            input_amount: current,
            output_amount: amount_out,
            next_pairs,
        })
    }

    /// Best exact-input trade over `pairs` with the default [`SearchConfig`].
    #[must_use]
    pub fn best_exact_in(
        pairs: &[Pair],
        amount_in: &TokenAmount,
        token_out: &Token,
    ) -> Option<Self> {
        best_trade_exact_in(pairs, amount_in, token_out, &SearchConfig::default())
            .ok()
            .flatten()
    }

    /// Best exact-output trade over `pairs` with the default [`SearchConfig`].
    #[must_use]
    pub fn best_exact_out(
        pairs: &[Pair],
        token_in: &Token,
        amount_out: &TokenAmount,
    ) -> Option<Self> {
        best_trade_exact_out(pairs, token_in, amount_out, &SearchConfig::default())
            .ok()
            .flatten()
    }

    /// The route traded along.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Which side was fixed.
    #[must_use]
    pub const fn trade_type(&self) -> TradeType {
        self.trade_type
    }

    /// Amount sold.
    #[must_use]
    pub const fn input_amount(&self) -> &TokenAmount {
        &self.input_amount
    }

    /// Amount bought.
    #[must_use]
    pub const fn output_amount(&self) -> &TokenAmount {
        &self.output_amount
    }

    /// Pair snapshots after this trade settles, in route order.
    #[must_use]
    pub fn next_pairs(&self) -> &[Pair] {
        &self.next_pairs
    }

    /// Average realised price: `output / input`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the input is zero.
    pub fn execution_price(&self) -> Result<Price> {
        Price::from_amounts(&self.input_amount, &self.output_amount)
    }

    /// Route mid price before the trade.
    ///
    /// # Errors
    ///
    /// See [`Route::mid_price`].
    pub fn mid_price(&self) -> Result<Price> {
        self.route.mid_price()
    }

    /// Route mid price after the trade's own reserve updates.
    ///
    /// # Errors
    ///
    /// See [`Route::mid_price`].
    pub fn next_mid_price(&self) -> Result<Price> {
        Route::new(
            self.next_pairs.clone(),
            self.route.input().clone(),
            self.route.output().clone(),
        )?
        .mid_price()
    }

    /// Relative shortfall against the mid price:
    /// `(mid × input − output) / (mid × input)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroReserve`] if a pair on the route is empty.
    /// - [`AmmError::DivisionByZero`] if the quoted amount is zero.
    pub fn price_impact(&self) -> Result<Percent> {
        let mid = self.route.mid_price()?;
        let quoted = mid.raw() * &self.input_amount.amount().to_rational();
        let shortfall = &quoted - &self.output_amount.amount().to_rational();
        Ok(Percent::from_rational(shortfall.checked_div(&quoted)?))
    }

    /// Least output accepted under `slippage`.
    ///
    /// Exact-input trades shrink the computed output; exact-output trades
    /// return the fixed output unchanged.
    #[must_use]
    pub fn minimum_amount_out(&self, slippage: &SlippagePercent) -> TokenAmount {
        match self.trade_type {
            TradeType::ExactOutput => self.output_amount.clone(),
            TradeType::ExactInput => TokenAmount::from_wei(
                self.output_amount.token().clone(),
                adjust_down(self.output_amount.amount(), slippage),
            ),
        }
    }

    /// Most input paid under `slippage`.
    ///
    /// Exact-output trades grow the computed input; exact-input trades
    /// return the fixed input unchanged.
    #[must_use]
    pub fn maximum_amount_in(&self, slippage: &SlippagePercent) -> TokenAmount {
        match self.trade_type {
            TradeType::ExactInput => self.input_amount.clone(),
            TradeType::ExactOutput => TokenAmount::from_wei(
                self.input_amount.token().clone(),
                adjust_up(self.input_amount.amount(), slippage),
            ),
        }
    }

    /// Execution price at the slippage bounds: `min_out / max_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the maximum input is zero.
    pub fn worst_execution_price(&self, slippage: &SlippagePercent) -> Result<Price> {
        Price::from_amounts(
            &self.maximum_amount_in(slippage),
            &self.minimum_amount_out(slippage),
        )
    }
}

/// Ranks two trades, best first.
///
/// Greater output wins; on equal output the smaller input wins; on equal
/// amounts the route with fewer hops wins.  `Ordering::Less` means `a` is
/// the better trade, so `sort_by(trade_comparator)` puts the best first.
#[must_use]
pub fn trade_comparator(a: &Trade, b: &Trade) -> Ordering {
    b.output_amount
        .amount()
        .cmp(a.output_amount.amount())
        .then_with(|| a.input_amount.amount().cmp(b.input_amount.amount()))
        .then_with(|| a.route.hops().cmp(&b.route.hops()))
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} for {} via {}",
            self.trade_type, self.input_amount, self.output_amount, self.route
        )
    }
}
