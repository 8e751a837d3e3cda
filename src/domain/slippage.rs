//! Validated slippage tolerance and the settlement bounds derived from it.

use core::fmt;
use core::str::FromStr;

use num_traits::Zero;

use super::{Amount, Percent};
use crate::error::{AmmError, Result};
use crate::math::Rational;

/// Default tolerance used when the caller has no preference: 0.5%.
pub const DEFAULT_SLIPPAGE_BPS: u32 = 50;

/// A non-negative slippage tolerance.
///
/// Only the validating constructors produce values of this type, so every
/// `SlippagePercent` in circulation is known to be `>= 0`.  Values above
/// 100% are accepted; [`adjust_down`] clamps its result at zero for them.
///
/// # Examples
///
/// ```
/// use swap_router::domain::{Amount, SlippagePercent};
///
/// let s: SlippagePercent = "0.5".parse().expect("valid percent text");
/// assert_eq!(s, SlippagePercent::from_bps(50));
/// assert_eq!(s.adjust_down(&Amount::new(1000u32)), Amount::new(995u32));
/// assert_eq!(s.adjust_up(&Amount::new(1000u32)), Amount::new(1005u32));
/// assert!("-1".parse::<SlippagePercent>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Percent", into = "Percent")
)]
pub struct SlippagePercent(Percent);

/// Validates a slippage tolerance.
///
/// # Errors
///
/// Returns [`AmmError::InvalidSlippage`] if `value` is negative.
pub fn parse_slippage(value: Percent) -> Result<SlippagePercent> {
    if value.is_negative() {
        return Err(AmmError::InvalidSlippage("slippage must be non-negative"));
    }
    Ok(SlippagePercent(value))
}

/// `floor(amount × (1 − slippage))`, clamped at zero.
pub fn adjust_down(amount: &Amount, slippage: &SlippagePercent) -> Amount {
    let factor = Rational::one() - slippage.0.as_rational();
    scale_floor(amount, &factor)
}

/// `floor(amount × (1 + slippage))`.
pub fn adjust_up(amount: &Amount, slippage: &SlippagePercent) -> Amount {
    let factor = slippage.0.plus(&Rational::one());
    scale_floor(amount, &factor)
}

fn scale_floor(amount: &Amount, factor: &Rational) -> Amount {
    let scaled = &amount.to_rational() * factor;
    // negative factors only come from tolerances above 100%
    scaled
        .quotient()
        .to_biguint()
        .map_or_else(Amount::zero, Amount::new)
}

impl SlippagePercent {
    /// Tolerance expressed in basis points (`50` = 0.5%).
    #[must_use]
    pub fn from_bps(bps: u32) -> Self {
        Self(Percent::from_bps(bps))
    }

    /// Zero tolerance.
    #[must_use]
    pub fn zero() -> Self {
        Self(Percent::zero())
    }

    /// Returns the tolerance as a [`Percent`].
    #[must_use]
    pub const fn as_percent(&self) -> &Percent {
        &self.0
    }

    /// Returns `true` if the tolerance is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.as_rational().numerator().is_zero()
    }

    /// See [`adjust_down`].
    pub fn adjust_down(&self, amount: &Amount) -> Amount {
        adjust_down(amount, self)
    }

    /// See [`adjust_up`].
    pub fn adjust_up(&self, amount: &Amount) -> Amount {
        adjust_up(amount, self)
    }
}

impl Default for SlippagePercent {
    fn default() -> Self {
        Self::from_bps(DEFAULT_SLIPPAGE_BPS)
    }
}

impl FromStr for SlippagePercent {
    type Err = AmmError;

    /// Parses user-typed percent text: `"0.5"` and `"0.5%"` both mean 0.5%.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        let text = text.strip_suffix('%').unwrap_or(text);
        let points: Rational = text
            .parse()
            .map_err(|_| AmmError::InvalidSlippage("slippage must be a decimal percentage"))?;
        let ratio = points.checked_div(&Rational::from_integer(100))?;
        parse_slippage(Percent::from_rational(ratio))
    }
}

impl TryFrom<Percent> for SlippagePercent {
    type Error = AmmError;

    fn try_from(value: Percent) -> Result<Self> {
        parse_slippage(value)
    }
}

impl From<SlippagePercent> for Percent {
    fn from(value: SlippagePercent) -> Self {
        value.0
    }
}

impl fmt::Display for SlippagePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
