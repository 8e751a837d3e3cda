//! Exact percentage values.

use core::fmt;

use num_bigint::BigInt;

use super::Rounding;
use crate::error::Result;
use crate::math::Rational;

/// Basis points in one whole (100%).
pub const BPS_PER_WHOLE: u32 = 10_000;

/// A [`Rational`] tagged as a ratio: `0.05` means 5%.
///
/// Arithmetic with another rational returns a plain [`Rational`]; only
/// rendering treats the value as a percentage (multiplied by 100).
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Percent, Rounding};
///
/// let fee = Percent::new(3, 1000).expect("valid");
/// assert_eq!(fee.to_string(), "0.30%");
/// assert_eq!(fee.to_fixed(3, Rounding::Down), "0.300");
/// assert_eq!(Percent::from_bps(30), fee);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Percent(Rational);

impl Percent {
    /// Creates a percent from a ratio `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`](crate::error::AmmError::DivisionByZero)
    /// if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        Rational::new(numerator, denominator).map(Self)
    }

    /// Wraps an existing ratio.
    #[must_use]
    pub const fn from_rational(value: Rational) -> Self {
        Self(value)
    }

    /// Creates a percent from basis points (`50` bps = 0.5%).
    #[must_use]
    pub fn from_bps(bps: u32) -> Self {
        Self(Rational::new(bps, BPS_PER_WHOLE).unwrap_or_else(|_| Rational::zero()))
    }

    /// Zero percent.
    #[must_use]
    pub fn zero() -> Self {
        Self(Rational::zero())
    }

    /// One hundred percent.
    #[must_use]
    pub fn one_hundred() -> Self {
        Self(Rational::one())
    }

    /// Returns the underlying ratio.
    #[must_use]
    pub const fn as_rational(&self) -> &Rational {
        &self.0
    }

    /// Consumes the percent and returns the underlying ratio.
    #[must_use]
    pub fn into_rational(self) -> Rational {
        self.0
    }

    /// Returns `true` if the ratio is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// `self + other` as a plain ratio.
    #[must_use]
    pub fn plus(&self, other: &Rational) -> Rational {
        &self.0 + other
    }

    /// `self - other` as a plain ratio.
    #[must_use]
    pub fn minus(&self, other: &Rational) -> Rational {
        &self.0 - other
    }

    /// `self * other` as a plain ratio.
    #[must_use]
    pub fn multiplied_by(&self, other: &Rational) -> Rational {
        &self.0 * other
    }

    fn hundredfold(&self) -> Rational {
        &self.0 * &Rational::from_integer(100)
    }

    /// Renders `value * 100` with exactly `decimal_places` fractional digits.
    #[must_use]
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.hundredfold().to_fixed(decimal_places, rounding)
    }

    /// Renders `value * 100` with `significant_digits` significant digits.
    ///
    /// # Errors
    ///
    /// See [`Rational::to_significant`].
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        self.hundredfold().to_significant(significant_digits, rounding)
    }
}

impl From<Rational> for Percent {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_fixed(2, Rounding::HalfUp))
    }
}
