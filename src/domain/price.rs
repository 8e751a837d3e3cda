//! Exchange rate between two tokens.

use core::fmt;

use super::{Amount, Rounding, Token, TokenAmount};
use crate::error::{AmmError, Result};
use crate::math::Rational;

/// Exact exchange rate: how many raw units of `quote` one raw unit of
/// `base` is worth.
///
/// The ratio is kept in raw (smallest-unit) terms so it composes directly
/// with [`Amount`] arithmetic.  Rendering goes through [`Price::adjusted`],
/// which rescales by the difference in token decimals so a human reads
/// "quote tokens per base token".
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Amount, Price, Rounding, Token, TokenAmount};
///
/// let weth = Token::try_new("0xc02a", 18).expect("valid");
/// let usdc = Token::try_new("0xa0b8", 6).expect("valid");
///
/// // 1 WETH = 2_000 USDC
/// let price = Price::from_amounts(
///     &TokenAmount::from_token_str(weth.clone(), "1").expect("valid"),
///     &TokenAmount::from_token_str(usdc.clone(), "2000").expect("valid"),
/// )
/// .expect("non-zero base");
///
/// assert_eq!(price.to_significant(6, Rounding::HalfUp).expect("digits"), "2000");
/// let inverse = price.invert().expect("non-zero");
/// assert_eq!(inverse.to_fixed(4, Rounding::HalfUp), "0.0005");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price {
    base: Token,
    quote: Token,
    raw: Rational,
}

impl Price {
    /// Creates a price from a raw `quote / base` ratio.
    #[must_use]
    pub const fn new(base: Token, quote: Token, raw: Rational) -> Self {
        Self { base, quote, raw }
    }

    /// Price implied by exchanging `base_amount` for `quote_amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `base_amount` is zero.
    pub fn from_amounts(base_amount: &TokenAmount, quote_amount: &TokenAmount) -> Result<Self> {
        let raw = Rational::new(
            quote_amount.amount().get().clone(),
            base_amount.amount().get().clone(),
        )?;
        Ok(Self::new(
            base_amount.token().clone(),
            quote_amount.token().clone(),
            raw,
        ))
    }

    /// Returns the base token.
    #[must_use]
    pub const fn base(&self) -> &Token {
        &self.base
    }

    /// Returns the quote token.
    #[must_use]
    pub const fn quote_token(&self) -> &Token {
        &self.quote
    }

    /// Raw-unit ratio (`quote` smallest units per `base` smallest unit).
    #[must_use]
    pub const fn raw(&self) -> &Rational {
        &self.raw
    }

    /// Decimal-adjusted ratio: whole `quote` tokens per whole `base` token.
    #[must_use]
    pub fn adjusted(&self) -> Rational {
        let scalar = Rational::new(
            self.base.decimals().factor(),
            self.quote.decimals().factor(),
        )
        .unwrap_or_else(|_| Rational::one());
        &self.raw * &scalar
    }

    /// Reciprocal price with base and quote swapped.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if the price is zero.
    pub fn invert(&self) -> Result<Self> {
        Ok(Self::new(
            self.quote.clone(),
            self.base.clone(),
            self.raw.invert()?,
        ))
    }

    /// Chains two prices: `base/quote × quote/other` gives `base/other`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if `other.base()` is not this
    /// price's quote token.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.quote != other.base {
            return Err(AmmError::InvalidToken(
                "price chain requires matching quote and base tokens",
            ));
        }
        Ok(Self::new(
            self.base.clone(),
            other.quote.clone(),
            &self.raw * &other.raw,
        ))
    }

    /// Converts an amount of the base token into the quote token, flooring.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TokenMismatch`] if `amount` is not denominated in
    /// the base token.
    pub fn quote(&self, amount: &TokenAmount) -> Result<TokenAmount> {
        if *amount.token() != self.base {
            return Err(AmmError::TokenMismatch);
        }
        let value = &self.raw * &amount.amount().to_rational();
        let raw = value
            .quotient()
            .to_biguint()
            .ok_or(AmmError::Underflow("quoted amount would become negative"))?;
        Ok(TokenAmount::from_wei(self.quote.clone(), Amount::new(raw)))
    }

    /// Renders the adjusted price with exactly `decimal_places` fractional digits.
    #[must_use]
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.adjusted().to_fixed(decimal_places, rounding)
    }

    /// Renders the adjusted price with `significant_digits` significant digits.
    ///
    /// # Errors
    ///
    /// See [`Rational::to_significant`].
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        self.adjusted().to_significant(significant_digits, rounding)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .to_significant(6, Rounding::HalfUp)
            .map_err(|_| fmt::Error)?;
        write!(f, "{rendered} {}/{}", self.quote, self.base)
    }
}
