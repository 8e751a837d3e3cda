//! Property-based tests using `proptest` for amount conversion and
//! slippage bounds.
//!
//! 1. **Decimal round trip**: `from_token(d, to_token(d, x)) == x`.
//! 2. **Slippage bounds**: `adjust_down(x) <= x <= adjust_up(x)`.
//! 3. **Rational ordering**: exact comparison agrees with cross products.

use proptest::prelude::*;

use super::{Amount, Decimals, SlippagePercent, adjust_down, adjust_up};
use crate::math::Rational;

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

fn decimals_strategy() -> impl Strategy<Value = Decimals> {
    (0u8..=18u8).prop_filter_map("decimals in range", |d| Decimals::new(d).ok())
}

/// Raw amounts spanning beyond `u128` via a multiplier.
fn amount_strategy() -> impl Strategy<Value = Amount> {
    (any::<u128>(), 1u64..=1_000u64)
        .prop_map(|(v, m)| &Amount::from(v) * &Amount::from(m))
}

/// Tolerances in basis points, including values above 100%.
fn bps_strategy() -> impl Strategy<Value = u32> {
    0u32..=20_000u32
}

// ---------------------------------------------------------------------------
// Property 1: Decimal Round Trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_token_string_round_trip(
        amount in amount_strategy(),
        decimals in decimals_strategy(),
    ) {
        let text = amount.to_token(decimals);
        prop_assert_eq!(Amount::from_token(decimals, &text), Ok(amount));
    }

    #[test]
    fn prop_to_token_has_no_trailing_zeros(
        amount in amount_strategy(),
        decimals in decimals_strategy(),
    ) {
        let text = amount.to_token(decimals);
        if text.contains('.') {
            prop_assert!(!text.ends_with('0'), "{}", text);
            prop_assert!(!text.ends_with('.'), "{}", text);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Slippage Bounds
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_slippage_brackets_amount(
        amount in amount_strategy(),
        bps in bps_strategy(),
    ) {
        let slippage = SlippagePercent::from_bps(bps);
        let low = adjust_down(&amount, &slippage);
        let high = adjust_up(&amount, &slippage);
        prop_assert!(low <= amount);
        prop_assert!(amount <= high);
    }

    #[test]
    fn prop_wider_slippage_widens_bounds(
        amount in amount_strategy(),
        bps in 0u32..=10_000u32,
        extra in 0u32..=10_000u32,
    ) {
        let narrow = SlippagePercent::from_bps(bps);
        let wide = SlippagePercent::from_bps(bps + extra);
        prop_assert!(wide.adjust_down(&amount) <= narrow.adjust_down(&amount));
        prop_assert!(wide.adjust_up(&amount) >= narrow.adjust_up(&amount));
    }
}

// ---------------------------------------------------------------------------
// Property 3: Rational Ordering
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_rational_order_matches_cross_product(
        a in any::<i64>(),
        b in 1i64..=i64::MAX,
        c in any::<i64>(),
        d in 1i64..=i64::MAX,
    ) {
        let (Ok(x), Ok(y)) = (Rational::new(a, b), Rational::new(c, d)) else {
            return Ok(());
        };
        let expected = (i128::from(a) * i128::from(d)).cmp(&(i128::from(c) * i128::from(b)));
        prop_assert_eq!(x.cmp(&y), expected);
    }

    #[test]
    fn prop_decimal_parse_matches_fixed_rendering(
        whole in 0u64..=1_000_000u64,
        frac in 0u32..=999_999u32,
    ) {
        let text = format!("{whole}.{frac:06}");
        let Ok(value) = text.parse::<Rational>() else {
            return Err(TestCaseError::fail(format!("unparseable {text}")));
        };
        prop_assert_eq!(value.to_fixed(6, crate::domain::Rounding::Down), text);
    }
}
