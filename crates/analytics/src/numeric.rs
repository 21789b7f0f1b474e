//! Numeric policy shared by every report: safe division and output rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Divides `numerator` by `denominator`, returning `fallback` when the
/// denominator is zero or negative.
pub fn divide(numerator: Decimal, denominator: Decimal, fallback: Decimal) -> Decimal {
    if denominator <= Decimal::ZERO {
        return fallback;
    }
    numerator.checked_div(denominator).unwrap_or(fallback)
}

/// Per-user cost of a single tool. A tool nobody uses costs its full price
/// per "user", so it is never hidden behind a zero.
pub fn cost_per_user(monthly_cost: Decimal, users: u32) -> Decimal {
    divide(monthly_cost, Decimal::from(users), monthly_cost)
}

/// Share of `part` in `whole`, as a percentage. Zero when `whole` is zero.
pub fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
    divide(part, whole, Decimal::ZERO) * Decimal::ONE_HUNDRED
}

/// Currency values are emitted with 2 decimal places, half-up.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Percentages are emitted with 1 decimal place, half-up.
pub fn round_percent(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn divide_falls_back_on_non_positive_denominator() {
        assert_eq!(divide(dec!(10), dec!(0), dec!(0)), dec!(0));
        assert_eq!(divide(dec!(10), dec!(-2), dec!(7)), dec!(7));
        assert_eq!(divide(dec!(10), dec!(4), dec!(0)), dec!(2.5));
    }

    #[test]
    fn zero_user_tool_costs_its_full_price_per_user() {
        assert_eq!(cost_per_user(dec!(100), 0), dec!(100));
        assert_eq!(cost_per_user(dec!(100), 4), dec!(25));
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_currency(dec!(2.345)), dec!(2.35));
        assert_eq!(round_currency(dec!(2.344)), dec!(2.34));
        assert_eq!(round_percent(dec!(16.65)), dec!(16.7));
        assert_eq!(round_percent(dec!(83.333)), dec!(83.3));
    }

    #[test]
    fn percentage_of_empty_whole_is_zero() {
        assert_eq!(percentage_of(dec!(30), dec!(0)), dec!(0));
        assert_eq!(percentage_of(dec!(30), dec!(120)), dec!(25));
    }
}
