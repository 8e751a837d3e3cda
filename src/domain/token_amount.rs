//! Raw amounts bound to their token.

use core::fmt;
use core::ops::{Add, Sub};

use super::{Amount, Rounding, Token};
use crate::error::{AmmError, Result};
use crate::math::Rational;

/// An [`Amount`] of a specific [`Token`].
///
/// Two token amounts are equal when both the token and the raw amount
/// match.  Combining amounts of different tokens is an error: the checked
/// methods return [`AmmError::TokenMismatch`], while the `+` / `-`
/// operators treat it as a broken precondition and panic.
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Amount, Token, TokenAmount};
///
/// let usdc = Token::try_new("0xa0b8", 6).expect("valid");
/// let a = TokenAmount::from_token_str(usdc.clone(), "1.5").expect("valid");
/// let b = TokenAmount::from_wei(usdc, Amount::new(500_000u32));
///
/// let sum = a.checked_add(&b).expect("same token");
/// assert_eq!(sum.to_exact(), "2");
/// assert_eq!(sum.amount(), &Amount::new(2_000_000u32));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenAmount {
    token: Token,
    amount: Amount,
}

impl TokenAmount {
    /// Binds a raw amount to a token.
    #[must_use]
    pub const fn from_wei(token: Token, amount: Amount) -> Self {
        Self { token, amount }
    }

    /// Parses a whole-token decimal string (`"1.5"`) for `token`.
    ///
    /// # Errors
    ///
    /// See [`Amount::from_token`].
    pub fn from_token_str(token: Token, raw: &str) -> Result<Self> {
        let amount = Amount::from_token(token.decimals(), raw)?;
        Ok(Self { token, amount })
    }

    /// A zero amount of `token`.
    #[must_use]
    pub fn zero(token: Token) -> Self {
        Self::from_wei(token, Amount::zero())
    }

    /// Returns the token.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the raw amount.
    #[must_use]
    pub const fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Returns `true` if the raw amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    fn ensure_same_token(&self, other: &Self) -> Result<()> {
        if self.token == other.token {
            Ok(())
        } else {
            Err(AmmError::TokenMismatch)
        }
    }

    /// Adds two amounts of the same token.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::TokenMismatch`] if the tokens differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.ensure_same_token(other)?;
        Ok(Self::from_wei(self.token.clone(), &self.amount + &other.amount))
    }

    /// Subtracts an amount of the same token.
    ///
    /// # Errors
    ///
    /// - [`AmmError::TokenMismatch`] if the tokens differ.
    /// - [`AmmError::Underflow`] if `other` is larger than `self`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.ensure_same_token(other)?;
        let amount = self
            .amount
            .checked_sub(&other.amount)
            .ok_or(AmmError::Underflow("token amount would become negative"))?;
        Ok(Self::from_wei(self.token.clone(), amount))
    }

    /// Whole-token value as an exact [`Rational`].
    #[must_use]
    pub fn to_rational(&self) -> Rational {
        self.amount.to_token_rational(self.token.decimals())
    }

    /// Exact whole-token rendering with trailing zeros removed.
    #[must_use]
    pub fn to_exact(&self) -> String {
        self.amount.to_token(self.token.decimals())
    }

    /// Whole-token rendering with exactly `decimal_places` fractional digits.
    #[must_use]
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.to_rational().to_fixed(decimal_places, rounding)
    }

    /// Whole-token rendering with `significant_digits` significant digits.
    ///
    /// # Errors
    ///
    /// See [`Rational::to_significant`].
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        self.to_rational().to_significant(significant_digits, rounding)
    }
}

impl Add<&TokenAmount> for &TokenAmount {
    type Output = TokenAmount;

    /// # Panics
    ///
    /// Panics if the operands are denominated in different tokens.
    fn add(self, rhs: &TokenAmount) -> TokenAmount {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}: {} + {}", self.token, rhs.token),
        }
    }
}

impl Sub<&TokenAmount> for &TokenAmount {
    type Output = TokenAmount;

    /// # Panics
    ///
    /// Panics if the operands are denominated in different tokens or if the
    /// difference would be negative.
    fn sub(self, rhs: &TokenAmount) -> TokenAmount {
        match self.checked_sub(rhs) {
            Ok(diff) => diff,
            Err(e) => panic!("{e}: {} - {}", self.token, rhs.token),
        }
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.token)
    }
}
