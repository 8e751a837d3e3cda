//! Raw integer token amount ("wei") with exact decimal conversion.

use core::fmt;
use core::ops::{Add, Mul};
use core::str::FromStr;

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use super::{Decimals, Rounding};
use crate::error::{AmmError, Result};
use crate::math::{Rational, div_round, trim_fraction};

/// A raw token amount in the smallest unit (wei, satoshi, or equivalent).
///
/// `Amount` is an arbitrary-precision non-negative integer, so balances and
/// reserve products never overflow.  It never interprets decimals on its
/// own: [`Amount::to_token`] and [`Amount::from_token`] take the
/// [`Decimals`] of the token explicitly.
///
/// Addition and multiplication are infallible.  Subtraction and division
/// are checked and return `None` on underflow or division by zero.
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Amount, Decimals, Rounding};
///
/// let a = Amount::new(100u32);
/// let b = Amount::new(200u32);
/// assert_eq!(&a + &b, Amount::new(300u32));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100u32)));
/// assert_eq!(a.checked_sub(&b), None);
///
/// let six = Decimals::new(6).expect("valid");
/// let raw = Amount::from_token(six, "1.5").expect("valid decimal");
/// assert_eq!(raw, Amount::new(1_500_000u32));
/// assert_eq!(raw.to_token(six), "1.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
#[must_use]
pub struct Amount(BigUint);

impl Amount {
    /// Creates a new `Amount` from any unsigned integer.
    pub fn new(value: impl Into<BigUint>) -> Self {
        Self(value.into())
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns the underlying integer.
    #[must_use]
    pub const fn get(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the amount and returns the underlying integer.
    #[must_use]
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Returns the value as `u128` if it fits.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        self.0.to_u128()
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            return None;
        }
        Some(Self(&self.0 - &other.0))
    }

    /// Checked division with explicit rounding direction.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        div_round(&self.0, &divisor.0, rounding).map(Self)
    }

    /// Exact value as a [`Rational`].
    #[must_use]
    pub fn to_rational(&self) -> Rational {
        Rational::from(self.0.clone())
    }

    /// Renders the amount in whole-token units: exact `amount / 10^decimals`
    /// with trailing fractional zeros removed.
    ///
    /// ```
    /// use swap_router::domain::{Amount, Decimals};
    ///
    /// let eighteen = Decimals::MAX;
    /// assert_eq!(Amount::new(1u32).to_token(eighteen), "0.000000000000000001");
    /// assert_eq!(Amount::new(2_000_000u32).to_token(Decimals::new(6).expect("valid")), "2");
    /// ```
    #[must_use]
    pub fn to_token(&self, decimals: Decimals) -> String {
        let places = u32::from(decimals.get());
        let exact = self.to_token_rational(decimals);
        // 10^decimals divides the denominator, so rendering is exact
        trim_fraction(exact.to_fixed(places, Rounding::Down))
    }

    /// Exact whole-token value as a [`Rational`].
    #[must_use]
    pub fn to_token_rational(&self, decimals: Decimals) -> Rational {
        self.to_rational()
            .checked_div(&Rational::from(decimals.factor()))
            .unwrap_or_else(|_| Rational::zero())
    }

    /// Parses a decimal token quantity (`"1.5"`) into raw units, flooring
    /// any digits beyond the token's precision.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidDecimal`] if `raw` is not a decimal number.
    /// - [`AmmError::InvalidQuantity`] if the value is negative.
    pub fn from_token(decimals: Decimals, raw: &str) -> Result<Self> {
        let value: Rational = raw.parse()?;
        if value.is_negative() {
            return Err(AmmError::InvalidQuantity("token amount must be non-negative"));
        }
        let scaled = &value * &Rational::from(decimals.factor());
        scaled
            .quotient()
            .to_biguint()
            .map(Self)
            .ok_or(AmmError::InvalidQuantity("token amount must be non-negative"))
    }
}

impl Add<&Amount> for &Amount {
    type Output = Amount;

    fn add(self, rhs: &Amount) -> Amount {
        Amount(&self.0 + &rhs.0)
    }
}

impl Mul<&Amount> for &Amount {
    type Output = Amount;

    fn mul(self, rhs: &Amount) -> Amount {
        Amount(&self.0 * &rhs.0)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for Amount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl FromStr for Amount {
    type Err = AmmError;

    /// Parses a raw integer amount (no decimal point, no sign).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmmError::InvalidDecimal("raw amount must be unsigned digits"));
        }
        BigUint::parse_bytes(s.as_bytes(), 10)
            .map(Self)
            .ok_or(AmmError::InvalidDecimal("raw amount must be unsigned digits"))
    }
}

impl TryFrom<String> for Amount {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Amount> for String {
    fn from(value: Amount) -> Self {
        value.0.to_string()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
