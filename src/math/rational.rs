//! Arbitrary-precision exact rational numbers.
//!
//! [`Rational`] is the arithmetic foundation of the crate: every price,
//! percentage and intermediate ratio is carried as an exact fraction of two
//! [`BigInt`]s.  Nothing in the crate ever converts to floating point.
//!
//! Fractions are kept in canonical form (reduced by their gcd, with a
//! strictly positive denominator), so structural equality is numeric
//! equality and hashing is consistent.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use core::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::div_round;
use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Returns `10^exp` as a [`BigUint`].
#[must_use]
pub fn pow10(exp: u32) -> BigUint {
    num_traits::pow(BigUint::from(10u32), exp as usize)
}

/// An exact rational number `numerator / denominator`.
///
/// # Invariants
///
/// - `denominator > 0`
/// - `gcd(|numerator|, denominator) == 1`
/// - zero is always represented as `0 / 1`
///
/// # Examples
///
/// ```
/// use swap_router::domain::Rounding;
/// use swap_router::math::Rational;
///
/// let a = Rational::new(1, 3).expect("non-zero denominator");
/// let b: Rational = "0.5".parse().expect("valid decimal");
///
/// let sum = &a + &b;
/// assert_eq!(sum, Rational::new(5, 6).expect("valid"));
/// assert_eq!(sum.to_fixed(4, Rounding::HalfUp), "0.8333");
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Creates a rational from a numerator and a denominator.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(AmmError::DivisionByZero);
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    /// Creates a rational with denominator one.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// Rational zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// Rational one.
    #[must_use]
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    /// Canonicalizes a fraction whose denominator is known to be non-zero.
    fn reduced(mut numerator: BigInt, mut denominator: BigInt) -> Self {
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        if numerator.is_zero() {
            return Self::zero();
        }
        let g = numerator.gcd(&denominator);
        if !g.is_one() {
            numerator /= &g;
            denominator /= &g;
        }
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the (reduced) numerator.
    #[must_use]
    pub const fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Returns the (reduced, positive) denominator.
    #[must_use]
    pub const fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Floor of the value.
    #[must_use]
    pub fn quotient(&self) -> BigInt {
        self.numerator.div_floor(&self.denominator)
    }

    /// Fractional part: `self - floor(self)`, always in `[0, 1)`.
    #[must_use]
    pub fn remainder(&self) -> Self {
        Self::reduced(
            self.numerator.mod_floor(&self.denominator),
            self.denominator.clone(),
        )
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns `true` if the value is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.numerator.is_positive()
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `self` is zero.
    pub fn invert(&self) -> Result<Self> {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Exact division.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        Self::new(
            &self.numerator * &divisor.denominator,
            &self.denominator * &divisor.numerator,
        )
    }

    /// Scales `|self|` by `10^places` and rounds to an integer.
    fn scaled_magnitude(&self, places: u32, rounding: Rounding) -> BigUint {
        let numerator = self.numerator.magnitude() * pow10(places);
        // the denominator is never zero, so `div_round` always yields a value
        div_round(&numerator, self.denominator.magnitude(), rounding).unwrap_or_default()
    }

    /// Renders the value with exactly `decimal_places` fractional digits.
    ///
    /// This is the single rendering primitive of the crate: percentages,
    /// prices and token amounts all format through it, so every displayed
    /// number follows the same rounding rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use swap_router::domain::Rounding;
    /// use swap_router::math::Rational;
    ///
    /// let v = Rational::new(-2, 3).expect("valid");
    /// assert_eq!(v.to_fixed(2, Rounding::HalfUp), "-0.67");
    /// assert_eq!(v.to_fixed(2, Rounding::Down), "-0.66");
    /// assert_eq!(Rational::from_integer(1234).to_fixed(2, Rounding::Down), "1234.00");
    /// ```
    #[must_use]
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let scaled = self.scaled_magnitude(decimal_places, rounding);
        let negative = self.is_negative() && !scaled.is_zero();
        render_scaled(negative, &scaled, decimal_places)
    }

    /// Renders the value rounded to `significant_digits` significant
    /// digits, with trailing fractional zeros removed.
    ///
    /// Integer parts longer than the digit budget are rounded at the
    /// corresponding power of ten (`12345` at 3 digits renders `12300`).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidQuantity`] if `significant_digits` is zero.
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        if significant_digits == 0 {
            return Err(AmmError::InvalidQuantity(
                "significant digits must be positive",
            ));
        }
        if self.is_zero() {
            return Ok("0".to_owned());
        }

        let places = i64::from(significant_digits) - 1 - self.decimal_exponent();
        if places >= 0 {
            let fixed = self.to_fixed(u32::try_from(places).unwrap_or(u32::MAX), rounding);
            return Ok(trim_fraction(fixed));
        }

        let exponent = u32::try_from(-places).unwrap_or(u32::MAX);
        let step = pow10(exponent);
        let divisor = self.denominator.magnitude() * &step;
        let rounded = div_round(self.numerator.magnitude(), &divisor, rounding)
            .unwrap_or_default()
            * step;
        let negative = self.is_negative() && !rounded.is_zero();
        Ok(render_scaled(negative, &rounded, 0))
    }

    /// Position of the most significant decimal digit: `floor(log10(|self|))`.
    ///
    /// Must not be called on zero.
    fn decimal_exponent(&self) -> i64 {
        let num = self.numerator.magnitude();
        let den = self.denominator.magnitude();
        let int_part = num / den;
        if !int_part.is_zero() {
            return decimal_len(&int_part) - 1;
        }
        // |self| < 1: find the smallest k with num * 10^k >= den
        let mut k = (decimal_len(den) - decimal_len(num) - 1).max(1);
        while num * pow10(u32::try_from(k).unwrap_or(u32::MAX)) < *den {
            k += 1;
        }
        -k
    }
}

/// Number of decimal digits of a non-zero integer.
fn decimal_len(value: &BigUint) -> i64 {
    i64::try_from(value.to_str_radix(10).len()).unwrap_or(i64::MAX)
}

/// Places a decimal point `places` digits from the right of `scaled`.
fn render_scaled(negative: bool, scaled: &BigUint, places: u32) -> String {
    let digits = scaled.to_str_radix(10);
    let places = places as usize;
    let mut out = String::with_capacity(digits.len() + places + 2);
    if negative {
        out.push('-');
    }
    if places == 0 {
        out.push_str(&digits);
        return out;
    }
    if digits.len() <= places {
        out.push_str("0.");
        out.extend(core::iter::repeat_n('0', places - digits.len()));
        out.push_str(&digits);
    } else {
        let (int_part, frac_part) = digits.split_at(digits.len() - places);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Drops trailing fractional zeros (and a dangling decimal point).
pub(crate) fn trim_fraction(mut rendered: String) -> String {
    if rendered.contains('.') {
        let trimmed = rendered.trim_end_matches('0').trim_end_matches('.').len();
        rendered.truncate(trimmed);
    }
    rendered
}

/// Parses an unsigned run of ASCII digits.
fn parse_digits(digits: &str) -> Result<BigUint> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmmError::InvalidDecimal("unexpected character"));
    }
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or(AmmError::InvalidDecimal("unparseable digits"))
}

impl FromStr for Rational {
    type Err = AmmError;

    /// Parses either a decimal string (`"-12.5"`, `".25"`, `"7"`) or an
    /// explicit fraction (`"3/4"`).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmmError::InvalidDecimal("empty string"));
        }

        if let Some((num, den)) = s.split_once('/') {
            let num = BigInt::from_str(num.trim())
                .map_err(|_| AmmError::InvalidDecimal("malformed numerator"))?;
            let den = BigInt::from_str(den.trim())
                .map_err(|_| AmmError::InvalidDecimal("malformed denominator"))?;
            return Self::new(num, den);
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(AmmError::InvalidDecimal("no digits"));
        }

        let places = u32::try_from(frac_part.len())
            .map_err(|_| AmmError::InvalidDecimal("too many fractional digits"))?;
        let magnitude = parse_digits(int_part)? * pow10(places) + parse_digits(frac_part)?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(Self::reduced(
            BigInt::from_biguint(sign, magnitude),
            BigInt::from_biguint(Sign::Plus, pow10(places)),
        ))
    }
}

impl TryFrom<String> for Rational {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rational> for String {
    fn from(value: Rational) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Rational {
    /// Exact rendering: `n` for integers, `n/d` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational::reduced(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                (&self).$method(rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigUint> for Rational {
    fn from(value: BigUint) -> Self {
        Self::from_integer(BigInt::from(value))
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<u64> for Rational {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}

impl From<u128> for Rational {
    fn from(value: u128) -> Self {
        Self::from_integer(value)
    }
}
