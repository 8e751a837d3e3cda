//! Constant Product pair (Uniswap V2 style).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two tokens.  A fixed 0.3% fee is taken from the input amount
//! **before** the pricing formula is applied, and stays in the pool.
//!
//! # Swap Algorithm (exact input, Token A → Token B)
//!
//! 1. `with_fee = amount_in × 997`
//! 2. `amount_out = ⌊with_fee × reserve_b / (reserve_a × 1000 + with_fee)⌋`
//! 3. `reserve_a += amount_in`
//! 4. `reserve_b −= amount_out`
//!
//! # Swap Algorithm (exact output)
//!
//! `amount_in = ⌊reserve_a × amount_out × 1000 / ((reserve_b − amount_out) × 997)⌋ + 1`
//!
//! # Invariant
//!
//! After every swap, `k_after ≥ k_before` because the fee component
//! increases reserves without a corresponding output, and outputs are
//! floored.

use core::fmt;

use crate::config::PairConfig;
use crate::domain::{Amount, Price, Rounding, Token, TokenAmount, TokenPair};
use crate::error::AmmError;
use crate::traits::FromConfig;

/// Fee numerator: the share of the input that is priced (99.7%).
pub const FEE_NUMERATOR: u32 = 997;

/// Fee denominator.
pub const FEE_DENOMINATOR: u32 = 1000;

/// LP shares permanently locked by the first deposit.
pub const MINIMUM_LIQUIDITY: u32 = 1000;

/// A snapshot of a constant-product pool (`x · y = k`).
///
/// Reserves are stored in canonical order: `reserve0` holds the token whose
/// address sorts first.  A `Pair` is an immutable value: swap methods
/// return the post-trade snapshot alongside the computed amount.
///
/// # Example
///
/// ```rust
/// use swap_router::domain::{Amount, Token, TokenAmount};
/// use swap_router::pools::Pair;
///
/// let a = Token::try_new("0x0a", 18).expect("valid");
/// let b = Token::try_new("0x0b", 18).expect("valid");
/// let pair = Pair::new(
///     TokenAmount::from_wei(a.clone(), Amount::new(10u32)),
///     TokenAmount::from_wei(b.clone(), Amount::new(20u32)),
/// )
/// .expect("distinct tokens");
///
/// let (out, next) = pair
///     .get_output_amount(&TokenAmount::from_wei(a, Amount::new(1u32)))
///     .expect("enough liquidity");
/// assert_eq!(out, TokenAmount::from_wei(b, Amount::new(1u32)));
/// assert_eq!(next.reserve0().amount(), &Amount::new(11u32));
/// assert_eq!(next.reserve1().amount(), &Amount::new(19u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair {
    reserve0: TokenAmount,
    reserve1: TokenAmount,
}

impl Pair {
    /// Creates a pair from two reserves, in either order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if both reserves are denominated
    /// in the same token.
    pub fn new(reserve_a: TokenAmount, reserve_b: TokenAmount) -> Result<Self, AmmError> {
        let tokens = TokenPair::new(reserve_a.token().clone(), reserve_b.token().clone())?;
        let (reserve0, reserve1) = if reserve_a.token() == tokens.first() {
            (reserve_a, reserve_b)
        } else {
            (reserve_b, reserve_a)
        };
        Ok(Self { reserve0, reserve1 })
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub fn token0(&self) -> &Token {
        self.reserve0.token()
    }

    /// Returns the token with the higher address.
    #[must_use]
    pub fn token1(&self) -> &Token {
        self.reserve1.token()
    }

    /// Returns the reserve of [`Pair::token0`].
    #[must_use]
    pub const fn reserve0(&self) -> &TokenAmount {
        &self.reserve0
    }

    /// Returns the reserve of [`Pair::token1`].
    #[must_use]
    pub const fn reserve1(&self) -> &TokenAmount {
        &self.reserve1
    }

    /// Returns `true` if `token` is one of the pair's two tokens.
    #[must_use]
    pub fn involves_token(&self, token: &Token) -> bool {
        self.token0() == token || self.token1() == token
    }

    /// Returns the counterpart of `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn other_token(&self, token: &Token) -> Result<&Token, AmmError> {
        if self.token0() == token {
            Ok(self.token1())
        } else if self.token1() == token {
            Ok(self.token0())
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Returns the reserve denominated in `token`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `token` is not in the pair.
    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount, AmmError> {
        if self.token0() == token {
            Ok(&self.reserve0)
        } else if self.token1() == token {
            Ok(&self.reserve1)
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Returns `true` if either reserve is zero, making the pair untradeable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reserve0.is_zero() || self.reserve1.is_zero()
    }

    /// The constant-product invariant `reserve0 × reserve1`.
    pub fn k(&self) -> Amount {
        self.reserve0.amount() * self.reserve1.amount()
    }

    /// `(reserve_in, reserve_out)` for a swap that sells `token_in`.
    fn directed_reserves(&self, token_in: &Token) -> Result<(&TokenAmount, &TokenAmount), AmmError> {
        if self.token0() == token_in {
            Ok((&self.reserve0, &self.reserve1))
        } else if self.token1() == token_in {
            Ok((&self.reserve1, &self.reserve0))
        } else {
            Err(AmmError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Builds the post-trade snapshot from the new directed reserves.
    fn with_reserves(&self, reserve_in: TokenAmount, reserve_out: TokenAmount) -> Self {
        if reserve_in.token() == self.token0() {
            Self {
                reserve0: reserve_in,
                reserve1: reserve_out,
            }
        } else {
            Self {
                reserve0: reserve_out,
                reserve1: reserve_in,
            }
        }
    }

    /// Computes the output for an exact input and the resulting pair.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if the input token is not in the pair.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve is zero or the
    ///   output would drain the pool.
    /// - [`AmmError::InsufficientInputAmount`] if the output rounds to zero.
    pub fn get_output_amount(
        &self,
        input_amount: &TokenAmount,
    ) -> Result<(TokenAmount, Self), AmmError> {
        let (reserve_in, reserve_out) = self.directed_reserves(input_amount.token())?;
        if self.is_empty() {
            return Err(AmmError::InsufficientLiquidity);
        }

        let r_in = reserve_in.amount();
        let r_out = reserve_out.amount();
        let with_fee = input_amount.amount() * &Amount::from(u64::from(FEE_NUMERATOR));
        let numerator = &with_fee * r_out;
        let denominator = &(r_in * &Amount::from(u64::from(FEE_DENOMINATOR))) + &with_fee;
        let out = numerator
            .checked_div(&denominator, Rounding::Down)
            .ok_or(AmmError::InsufficientInputAmount)?;

        if out.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        let Some(remaining_out) = r_out.checked_sub(&out).filter(|r| !r.is_zero()) else {
            return Err(AmmError::InsufficientLiquidity);
        };

        let output = TokenAmount::from_wei(reserve_out.token().clone(), out);
        let next = self.with_reserves(
            TokenAmount::from_wei(reserve_in.token().clone(), r_in + input_amount.amount()),
            TokenAmount::from_wei(reserve_out.token().clone(), remaining_out),
        );
        Ok((output, next))
    }

    /// Computes the input required for an exact output and the resulting pair.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if the output token is not in the pair.
    /// - [`AmmError::InsufficientLiquidity`] if a reserve is zero or
    ///   `amount_out >= reserve_out`.
    pub fn get_input_amount(
        &self,
        output_amount: &TokenAmount,
    ) -> Result<(TokenAmount, Self), AmmError> {
        let token_in = self.other_token(output_amount.token())?;
        let (reserve_in, reserve_out) = self.directed_reserves(token_in)?;
        if self.is_empty() {
            return Err(AmmError::InsufficientLiquidity);
        }

        let r_in = reserve_in.amount();
        let Some(remaining_out) = reserve_out
            .amount()
            .checked_sub(output_amount.amount())
            .filter(|r| !r.is_zero())
        else {
            return Err(AmmError::InsufficientLiquidity);
        };

        let numerator = &(r_in * output_amount.amount()) * &Amount::from(u64::from(FEE_DENOMINATOR));
        let denominator = &remaining_out * &Amount::from(u64::from(FEE_NUMERATOR));
        let floor = numerator
            .checked_div(&denominator, Rounding::Down)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let amount_in = &floor + &Amount::from(1u64);

        let input = TokenAmount::from_wei(reserve_in.token().clone(), amount_in);
        let next = self.with_reserves(
            TokenAmount::from_wei(reserve_in.token().clone(), r_in + input.amount()),
            TokenAmount::from_wei(reserve_out.token().clone(), remaining_out),
        );
        Ok((input, next))
    }

    /// Marginal price of `token_in` in terms of the other token:
    /// `reserve_out / reserve_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token_in` is not in the pair.
    /// - [`AmmError::ZeroReserve`] if either reserve is zero.
    pub fn mid_price(&self, token_in: &Token) -> Result<Price, AmmError> {
        let (reserve_in, reserve_out) = self.directed_reserves(token_in)?;
        if self.is_empty() {
            return Err(AmmError::ZeroReserve);
        }
        Price::from_amounts(reserve_in, reserve_out)
    }

    /// Price of `token0` in units of `token1`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroReserve`] if either reserve is zero.
    pub fn token0_price(&self) -> Result<Price, AmmError> {
        self.mid_price(self.token0())
    }

    /// Price of `token1` in units of `token0`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ZeroReserve`] if either reserve is zero.
    pub fn token1_price(&self) -> Result<Price, AmmError> {
        self.mid_price(self.token1())
    }

    /// Price of `token` in units of the other token.
    ///
    /// # Errors
    ///
    /// See [`Pair::mid_price`].
    pub fn price_of(&self, token: &Token) -> Result<Price, AmmError> {
        self.mid_price(token)
    }

    /// Orders two deposit amounts as `(amount0, amount1)`.
    fn sorted_deposit<'a>(
        &self,
        amount_a: &'a TokenAmount,
        amount_b: &'a TokenAmount,
    ) -> Result<(&'a TokenAmount, &'a TokenAmount), AmmError> {
        let (first, second) = if amount_a.token() == self.token0() {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        if first.token() != self.token0() || second.token() != self.token1() {
            return Err(AmmError::InvalidToken(
                "deposit must contain both tokens of the pair",
            ));
        }
        Ok((first, second))
    }

    /// LP shares minted for depositing `amount_a` and `amount_b`.
    ///
    /// - First deposit (`total_supply == 0`): `√(a × b) − MINIMUM_LIQUIDITY`.
    /// - Otherwise: `min(a × S / reserve0, b × S / reserve1)`, floored.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if the deposit tokens do not match the pair.
    /// - [`AmmError::ZeroReserve`] if supply exists but a reserve is zero.
    /// - [`AmmError::InsufficientInputAmount`] if no shares would be minted.
    pub fn liquidity_minted(
        &self,
        total_supply: &Amount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<Amount, AmmError> {
        let (amount0, amount1) = self.sorted_deposit(amount_a, amount_b)?;

        let minted = if total_supply.is_zero() {
            let root = Amount::new((amount0.amount() * amount1.amount()).into_inner().sqrt());
            root.checked_sub(&Amount::from(u64::from(MINIMUM_LIQUIDITY)))
                .unwrap_or_else(Amount::zero)
        } else {
            let share0 = (amount0.amount() * total_supply)
                .checked_div(self.reserve0.amount(), Rounding::Down)
                .ok_or(AmmError::ZeroReserve)?;
            let share1 = (amount1.amount() * total_supply)
                .checked_div(self.reserve1.amount(), Rounding::Down)
                .ok_or(AmmError::ZeroReserve)?;
            share0.min(share1)
        };

        if minted.is_zero() {
            return Err(AmmError::InsufficientInputAmount);
        }
        Ok(minted)
    }

    /// Amount of `token` redeemable for `liquidity` LP shares:
    /// `reserve × liquidity / total_supply`, floored.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if `token` is not in the pair.
    /// - [`AmmError::InvalidQuantity`] if `liquidity > total_supply`.
    /// - [`AmmError::DivisionByZero`] if `total_supply` is zero.
    pub fn liquidity_value(
        &self,
        token: &Token,
        total_supply: &Amount,
        liquidity: &Amount,
    ) -> Result<TokenAmount, AmmError> {
        let reserve = self.reserve_of(token)?;
        if liquidity > total_supply {
            return Err(AmmError::InvalidQuantity(
                "liquidity exceeds total supply",
            ));
        }
        let value = (reserve.amount() * liquidity)
            .checked_div(total_supply, Rounding::Down)
            .ok_or(AmmError::DivisionByZero)?;
        Ok(TokenAmount::from_wei(token.clone(), value))
    }
}

impl FromConfig<PairConfig> for Pair {
    /// Creates a pair from a reserve snapshot.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PairConfig::validate`].
    fn from_config(config: &PairConfig) -> Result<Self, AmmError> {
        config.validate()?;
        let (reserve_a, reserve_b) = config.reserve_amounts()?;
        Self::new(reserve_a, reserve_b)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.reserve0, self.reserve1)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::math::Rational;

    fn tok(addr: &str) -> Token {
        let Ok(t) = Token::try_new(addr, 18) else {
            panic!("invalid token in test");
        };
        t
    }

    fn amt(token: &Token, raw: u128) -> TokenAmount {
        TokenAmount::from_wei(token.clone(), Amount::from(raw))
    }

    fn pair(a: &Token, ra: u128, b: &Token, rb: u128) -> Pair {
        let Ok(p) = Pair::new(amt(a, ra), amt(b, rb)) else {
            panic!("expected valid pair");
        };
        p
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_sorts_reserves() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&b, 20, &a, 10);
        assert_eq!(p.token0(), &a);
        assert_eq!(p.token1(), &b);
        assert_eq!(p.reserve0(), &amt(&a, 10));
        assert_eq!(p.reserve1(), &amt(&b, 20));
        assert_eq!(p, pair(&a, 10, &b, 20));
    }

    #[test]
    fn new_rejects_same_token() {
        let a = tok("0x0a");
        assert!(matches!(
            Pair::new(amt(&a, 1), amt(&a, 2)),
            Err(AmmError::InvalidToken(_))
        ));
    }

    #[test]
    fn accessors() {
        let (a, b, c) = (tok("0x0a"), tok("0x0b"), tok("0x0c"));
        let p = pair(&a, 10, &b, 20);
        assert!(p.involves_token(&a));
        assert!(!p.involves_token(&c));
        assert_eq!(p.other_token(&a), Ok(&b));
        assert!(p.other_token(&c).is_err());
        assert_eq!(p.reserve_of(&b), Ok(&amt(&b, 20)));
        assert_eq!(p.k(), Amount::new(200u32));
        assert!(!p.is_empty());
        assert!(pair(&a, 0, &b, 20).is_empty());
    }

    // -- Exact input --------------------------------------------------------

    #[test]
    fn output_small_pool() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 10, &b, 20);
        let Ok((out, next)) = p.get_output_amount(&amt(&a, 1)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, amt(&b, 1));
        assert_eq!(next, pair(&a, 11, &b, 19));
    }

    #[test]
    fn output_reference_values() {
        // 1000 in against 1_000_000 / 1_000_000 => 996
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 1_000_000, &b, 1_000_000);
        let Ok((out, _)) = p.get_output_amount(&amt(&a, 1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, amt(&b, 996));
    }

    #[test]
    fn output_k_never_decreases() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 123_456, &b, 987_654);
        let Ok((_, next)) = p.get_output_amount(&amt(&b, 55_555)) else {
            panic!("expected Ok");
        };
        assert!(next.k() >= p.k());
    }

    #[test]
    fn output_zero_rounds_to_insufficient_input() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 1_000, &b, 10);
        assert_eq!(
            p.get_output_amount(&amt(&a, 1)),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn output_empty_pool() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 0, &b, 10);
        assert_eq!(
            p.get_output_amount(&amt(&a, 5)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn output_foreign_token() {
        let (a, b, c) = (tok("0x0a"), tok("0x0b"), tok("0x0c"));
        let p = pair(&a, 10, &b, 10);
        assert!(matches!(
            p.get_output_amount(&amt(&c, 1)),
            Err(AmmError::InvalidToken(_))
        ));
    }

    // -- Exact output -------------------------------------------------------

    #[test]
    fn input_small_pool() {
        // 10 * 1 * 1000 / (19 * 997) = 0.527 -> 0 + 1
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 10, &b, 20);
        let Ok((inp, next)) = p.get_input_amount(&amt(&b, 1)) else {
            panic!("expected Ok");
        };
        assert_eq!(inp, amt(&a, 1));
        assert_eq!(next, pair(&a, 11, &b, 19));
    }

    #[test]
    fn input_drains_pool() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 10, &b, 20);
        assert_eq!(
            p.get_input_amount(&amt(&a, 10)),
            Err(AmmError::InsufficientLiquidity)
        );
        assert_eq!(
            p.get_input_amount(&amt(&a, 52)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn input_then_output_covers_request() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 1_000_000, &b, 2_000_000);
        let Ok((inp, _)) = p.get_input_amount(&amt(&b, 12_345)) else {
            panic!("expected Ok");
        };
        let Ok((out, _)) = p.get_output_amount(&inp) else {
            panic!("expected Ok");
        };
        assert!(out.amount() >= &Amount::from(12_345u64));
    }

    #[test]
    fn input_never_decreases_with_output() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 12_345, &b, 98_765);
        let mut previous = Amount::zero();
        for wanted in (0..98_765u128).step_by(7) {
            let Ok((inp, _)) = p.get_input_amount(&amt(&b, wanted)) else {
                panic!("output {wanted} is below the reserve");
            };
            assert!(inp.amount() >= &previous, "input dropped at output {wanted}");
            previous = inp.amount().clone();
        }
        assert_eq!(
            p.get_input_amount(&amt(&b, 98_765)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    // -- Prices -------------------------------------------------------------

    #[test]
    fn mid_prices() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 10, &b, 20);
        let (Ok(p0), Ok(p1)) = (p.token0_price(), p.token1_price()) else {
            panic!("expected Ok");
        };
        assert_eq!(p0.raw(), &Rational::from(2i64));
        assert_eq!(p0.base(), &a);
        let Ok(half) = Rational::new(1, 2) else {
            panic!("valid");
        };
        assert_eq!(p1.raw(), &half);
        assert_eq!(p.price_of(&b), Ok(p1));
    }

    #[test]
    fn mid_price_zero_reserve() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        assert_eq!(
            pair(&a, 0, &b, 20).mid_price(&a),
            Err(AmmError::ZeroReserve)
        );
    }

    // -- Liquidity ----------------------------------------------------------

    #[test]
    fn liquidity_minted_first_deposit() {
        // sqrt(4000 * 4000) - 1000 = 3000
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 0, &b, 0);
        assert_eq!(
            p.liquidity_minted(&Amount::zero(), &amt(&b, 4_000), &amt(&a, 4_000)),
            Ok(Amount::new(3_000u32))
        );
        assert_eq!(
            p.liquidity_minted(&Amount::zero(), &amt(&a, 1_000), &amt(&b, 1_000)),
            Err(AmmError::InsufficientInputAmount)
        );
    }

    #[test]
    fn liquidity_minted_proportional() {
        // min(10 * 1000 / 100, 30 * 1000 / 200) = min(100, 150) = 100
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 100, &b, 200);
        assert_eq!(
            p.liquidity_minted(&Amount::new(1_000u32), &amt(&a, 10), &amt(&b, 30)),
            Ok(Amount::new(100u32))
        );
    }

    #[test]
    fn liquidity_minted_rejects_wrong_tokens() {
        let (a, b, c) = (tok("0x0a"), tok("0x0b"), tok("0x0c"));
        let p = pair(&a, 100, &b, 200);
        assert!(matches!(
            p.liquidity_minted(&Amount::new(1u32), &amt(&a, 10), &amt(&c, 30)),
            Err(AmmError::InvalidToken(_))
        ));
    }

    #[test]
    fn liquidity_value_pro_rata() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let p = pair(&a, 1_000, &b, 500);
        assert_eq!(
            p.liquidity_value(&a, &Amount::new(500u32), &Amount::new(250u32)),
            Ok(amt(&a, 500))
        );
        assert_eq!(
            p.liquidity_value(&b, &Amount::new(3u32), &Amount::new(1u32)),
            Ok(amt(&b, 166))
        );
        assert!(matches!(
            p.liquidity_value(&a, &Amount::new(1u32), &Amount::new(2u32)),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    // -- Config -------------------------------------------------------------

    #[test]
    fn from_config_builds_pair() {
        let (a, b) = (tok("0x0a"), tok("0x0b"));
        let Ok(cfg) = PairConfig::new(b.clone(), a.clone(), "0.00000000000000002", "0.00000000000000001")
        else {
            panic!("expected valid config");
        };
        assert_eq!(Pair::from_config(&cfg), Ok(pair(&a, 10, &b, 20)));
    }
}
