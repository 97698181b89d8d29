//! Money

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};

/// Rounds an amount to two decimal places.
///
/// Interior pricing keeps full precision; amounts only pass through here at
/// the display and persistence boundaries.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount as Brazilian reais.
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    Money::from_decimal(round_to_cents(amount), iso::BRL).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to_cents(Decimal::new(12_345, 3)), Decimal::new(1235, 2));
    }

    #[test]
    fn leaves_cent_amounts_untouched() {
        assert_eq!(round_to_cents(Decimal::new(4590, 2)), Decimal::new(4590, 2));
    }

    #[test]
    fn formats_reais() {
        assert_eq!(format_brl(Decimal::new(4590, 2)), "R$45,90");
    }
}
