//! Pricing

use rust_decimal::Decimal;

use crate::catalog::{Product, SelectedOption};

/// Computes the price of a single configured unit of a product.
///
/// Selections are resolved leniently: option or item ids that no longer
/// exist on the product contribute nothing, so lines configured before a
/// catalog edit still price without error.
#[must_use]
pub fn unit_total(product: &Product, selections: &[SelectedOption]) -> Decimal {
    let mut total = product.active_price();

    for selection in selections {
        let Some(option) = product
            .customization_options
            .iter()
            .find(|option| option.uuid == selection.option_uuid)
        else {
            continue;
        };

        for item_uuid in &selection.selected_items {
            if let Some(item) = option.items.iter().find(|item| item.uuid == *item_uuid) {
                total += item.price;
            }
        }
    }

    total
}

/// Computes a line's total price for the given quantity.
///
/// Quantity must be at least one; that is the caller's contract and no
/// clamping happens here. Full precision is kept; rounding only happens at
/// the money formatting boundary.
#[must_use]
pub fn line_total(product: &Product, quantity: u32, selections: &[SelectedOption]) -> Decimal {
    unit_total(product, selections) * Decimal::from(quantity)
}

#[cfg(test)]
mod tests {
    use crate::{
        catalog::{OptionItemUuid, OptionUuid},
        fixtures,
    };

    use super::*;

    #[test]
    fn unconfigured_unit_prices_at_base() {
        let product = fixtures::simple_product(fixtures::restaurant_a());

        assert_eq!(line_total(&product, 1, &[]), Decimal::new(4590, 2));
    }

    #[test]
    fn promotion_price_wins_when_active() {
        let product = fixtures::promo_product(fixtures::restaurant_a());

        assert_eq!(line_total(&product, 1, &[]), Decimal::new(2990, 2));
    }

    #[test]
    fn selected_items_add_their_deltas() {
        let product = fixtures::customizable_product(fixtures::restaurant_a());
        let selections = vec![
            fixtures::select(fixtures::size_option_uuid(), &[fixtures::size_large()]),
            fixtures::select(
                fixtures::extras_option_uuid(),
                &[fixtures::extra_cheddar(), fixtures::extra_bacon()],
            ),
        ];

        // 25.00 + 5.00 + 3.50 + 4.00
        assert_eq!(line_total(&product, 1, &selections), Decimal::new(3750, 2));
    }

    #[test]
    fn line_total_scales_linearly_with_quantity() {
        let product = fixtures::customizable_product(fixtures::restaurant_a());
        let selections = vec![fixtures::select(
            fixtures::size_option_uuid(),
            &[fixtures::size_large()],
        )];

        let unit = line_total(&product, 1, &selections);

        for quantity in 2..=5 {
            assert_eq!(
                line_total(&product, quantity, &selections),
                unit * Decimal::from(quantity),
                "line total should be unit price times quantity"
            );
        }
    }

    #[test]
    fn unknown_option_id_contributes_nothing() {
        let product = fixtures::customizable_product(fixtures::restaurant_a());
        let selections = vec![fixtures::select(
            OptionUuid::new(),
            &[fixtures::extra_bacon()],
        )];

        assert_eq!(
            line_total(&product, 1, &selections),
            line_total(&product, 1, &[])
        );
    }

    #[test]
    fn unknown_item_id_contributes_nothing() {
        let product = fixtures::customizable_product(fixtures::restaurant_a());
        let selections = vec![fixtures::select(
            fixtures::extras_option_uuid(),
            &[OptionItemUuid::new()],
        )];

        assert_eq!(
            line_total(&product, 1, &selections),
            line_total(&product, 1, &[])
        );
    }
}
