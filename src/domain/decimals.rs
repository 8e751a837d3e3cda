//! Token decimal places.

use num_bigint::BigUint;

use super::Amount;
use crate::error::AmmError;
use crate::math::pow10;

/// Maximum allowed decimal places (EVM standard).
const MAX_DECIMALS: u8 = 18;

/// Represents the number of decimal places for a token amount.
///
/// Valid range is `0..=18`, matching the common blockchain standard.
/// Construction is validated: values above 18 are rejected.
///
/// # Examples
///
/// ```
/// use swap_router::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.get(), 6);
/// assert_eq!(d.scale_up(2).to_string(), "2000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Decimals(u8);

impl Default for Decimals {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Maximum standard decimal places (18).
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPrecision`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self, AmmError> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidPrecision("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Converts a whole number of tokens to the smallest raw unit.
    ///
    /// For example, with `decimals = 6`, an input of `1` yields `1_000_000`.
    pub fn scale_up(&self, whole: u64) -> Amount {
        Amount::new(BigUint::from(whole) * self.factor())
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub fn factor(&self) -> BigUint {
        pow10(u32::from(self.0))
    }
}

impl TryFrom<u8> for Decimals {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self, AmmError> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_zero() {
        let Ok(d) = Decimals::new(0) else {
            panic!("expected Ok");
        };
        assert_eq!(d.get(), 0);
    }

    #[test]
    fn valid_eighteen() {
        let Ok(d) = Decimals::new(18) else {
            panic!("expected Ok");
        };
        assert_eq!(d.get(), 18);
    }

    #[test]
    fn invalid_nineteen() {
        let Err(e) = Decimals::new(19) else {
            panic!("expected Err");
        };
        assert_eq!(e, AmmError::InvalidPrecision("decimals must be 0..=18"));
    }

    #[test]
    fn try_from_u8() {
        assert_eq!(Decimals::try_from(6), Decimals::new(6));
        assert!(Decimals::try_from(u8::MAX).is_err());
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Decimals::default(), Decimals::ZERO);
    }

    #[test]
    fn factor_values() {
        assert_eq!(Decimals::ZERO.factor(), BigUint::from(1u32));
        assert_eq!(
            Decimals::MAX.factor(),
            BigUint::from(1_000_000_000_000_000_000u128)
        );
    }

    #[test]
    fn scale_up_usdc() {
        let Ok(d) = Decimals::new(6) else {
            panic!("expected Ok");
        };
        assert_eq!(d.scale_up(1), Amount::from(1_000_000u64));
    }

    #[test]
    fn scale_up_beyond_u128_is_exact() {
        let raw = Decimals::MAX.scale_up(u64::MAX);
        assert_eq!(
            raw.get(),
            &(BigUint::from(u64::MAX) * BigUint::from(10u32).pow(18))
        );
    }

    #[test]
    fn ordering() {
        let (Ok(d6), Ok(d18)) = (Decimals::new(6), Decimals::new(18)) else {
            panic!("expected Ok");
        };
        assert!(d6 < d18);
    }
}
