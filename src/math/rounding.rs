//! Rounding helpers for arbitrary-precision integer division.
//!
//! [`div_round`] is the low-level building block used by
//! [`Amount`](crate::domain::Amount) and by decimal rendering in
//! [`Rational`](super::Rational).
//!
//! # Convention
//!
//! Settlement amounts always round against the user:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`] |
//! | Minimum received | [`Rounding::Down`] |
//! | Maximum sent | [`Rounding::Down`] on `amount × (1 + slippage)` |
//! | Display | [`Rounding::HalfUp`] unless the caller picks otherwise |
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigUint;
//! use swap_router::domain::Rounding;
//! use swap_router::math::div_round;
//!
//! let ten = BigUint::from(10u32);
//! let three = BigUint::from(3u32);
//! assert_eq!(div_round(&ten, &three, Rounding::Down), Some(BigUint::from(3u32)));
//! assert_eq!(div_round(&ten, &three, Rounding::Up), Some(BigUint::from(4u32)));
//! assert_eq!(div_round(&ten, &BigUint::from(0u32), Rounding::Down), None);
//! ```

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::domain::Rounding;

/// Integer division of [`BigUint`] values with an explicit rounding mode.
///
/// - [`Rounding::Down`]: floor division.
/// - [`Rounding::Up`]: ceiling division.
/// - [`Rounding::HalfUp`]: nearest integer, `x.5` rounds up.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: &BigUint, denominator: &BigUint, rounding: Rounding) -> Option<BigUint> {
    if denominator.is_zero() {
        return None;
    }
    let (q, r) = numerator.div_rem(denominator);
    if r.is_zero() {
        return Some(q);
    }
    let bump = match rounding {
        Rounding::Down => false,
        Rounding::Up => true,
        // 2r >= d  <=>  remainder is at least half the divisor
        Rounding::HalfUp => (&r << 1u32) >= *denominator,
    };
    Some(if bump { q + 1u32 } else { q })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u128) -> BigUint {
        BigUint::from(v)
    }

    // -- Division by zero ---------------------------------------------------

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(&big(100), &big(0), Rounding::Down), None);
        assert_eq!(div_round(&big(100), &big(0), Rounding::HalfUp), None);
        assert_eq!(div_round(&big(0), &big(0), Rounding::Up), None);
    }

    // -- Exact division ----------------------------------------------------

    #[test]
    fn exact_division_agrees_in_all_modes() {
        for mode in [Rounding::Down, Rounding::HalfUp, Rounding::Up] {
            assert_eq!(div_round(&big(100), &big(10), mode), Some(big(10)));
        }
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(div_round(&big(0), &big(5), Rounding::Up), Some(big(0)));
    }

    // -- Remainders ----------------------------------------------------------

    #[test]
    fn remainder_down_and_up() {
        assert_eq!(div_round(&big(10), &big(3), Rounding::Down), Some(big(3)));
        assert_eq!(div_round(&big(10), &big(3), Rounding::Up), Some(big(4)));
    }

    #[test]
    fn half_up_below_half() {
        // 10 / 3 = 3.33
        assert_eq!(div_round(&big(10), &big(3), Rounding::HalfUp), Some(big(3)));
    }

    #[test]
    fn half_up_exact_half() {
        // 5 / 2 = 2.5
        assert_eq!(div_round(&big(5), &big(2), Rounding::HalfUp), Some(big(3)));
    }

    #[test]
    fn half_up_above_half() {
        // 11 / 4 = 2.75
        assert_eq!(div_round(&big(11), &big(4), Rounding::HalfUp), Some(big(3)));
    }

    // -- Values beyond u128 --------------------------------------------------

    #[test]
    fn beyond_u128_ceiling() {
        let n = big(u128::MAX) * big(3) + big(1);
        let d = big(3);
        assert_eq!(div_round(&n, &d, Rounding::Down), Some(big(u128::MAX)));
        assert_eq!(div_round(&n, &d, Rounding::Up), Some(big(u128::MAX) + 1u32));
    }
}
