//! Cart

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    catalog::{Product, ProductUuid, RestaurantUuid, SelectedOption},
    pricing,
};

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The cart already holds another restaurant's items; nothing was
    /// changed.
    #[error("cart is locked to a different restaurant")]
    DifferentRestaurant {
        /// Restaurant the rejected product belongs to.
        attempted: RestaurantUuid,
    },
}

/// One configured product in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at the time it was configured.
    pub product: Product,
    pub quantity: u32,
    pub selections: Vec<SelectedOption>,
    /// Cached line total, refreshed on every mutation.
    pub total_price: Decimal,
}

impl CartLine {
    fn matches(&self, product_uuid: ProductUuid, selections: &[SelectedOption]) -> bool {
        self.product.uuid == product_uuid && self.selections == selections
    }
}

/// Shopping cart holding configured lines from a single restaurant.
///
/// The restaurant lock is set by the first added line and cleared whenever
/// the cart empties. Aggregates are always folded fresh from the line list;
/// there are no counters to drift.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    restaurant_uuid: Option<RestaurantUuid>,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restaurant the cart is currently locked to, if any.
    #[must_use]
    pub fn restaurant_uuid(&self) -> Option<RestaurantUuid> {
        self.restaurant_uuid
    }

    /// The configured lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether a product from the given restaurant may currently be added.
    #[must_use]
    pub fn can_add_from(&self, restaurant_uuid: RestaurantUuid) -> bool {
        self.lines.is_empty() || self.restaurant_uuid == Some(restaurant_uuid)
    }

    /// Adds a configured product.
    ///
    /// A line with the same product and a structurally identical selection
    /// list is merged: quantity and cached total are summed in place. Any
    /// other configuration appends a new line.
    ///
    /// # Errors
    ///
    /// - [`CartError::DifferentRestaurant`]: the cart is non-empty and
    ///   locked to another restaurant. The cart is left untouched.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        selections: Vec<SelectedOption>,
    ) -> Result<(), CartError> {
        if !self.can_add_from(product.restaurant_uuid) {
            return Err(CartError::DifferentRestaurant {
                attempted: product.restaurant_uuid,
            });
        }

        if self.lines.is_empty() {
            self.restaurant_uuid = Some(product.restaurant_uuid);
        }

        let total_price = pricing::line_total(product, quantity, &selections);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(product.uuid, &selections))
        {
            line.quantity += quantity;
            line.total_price += total_price;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
                selections,
                total_price,
            });
        }

        Ok(())
    }

    /// Removes every line for the given product, customization variants
    /// included. Clears the restaurant lock when the cart empties.
    pub fn remove(&mut self, product_uuid: ProductUuid) {
        self.lines.retain(|line| line.product.uuid != product_uuid);

        if self.lines.is_empty() {
            self.restaurant_uuid = None;
        }
    }

    /// Sets the quantity of the first line matching the given product and
    /// reprices it from its stored snapshot and selections. A zero quantity
    /// behaves as [`Cart::remove`].
    ///
    /// Lines are matched by product only; when several customization
    /// variants of one product exist, only the first is touched.
    pub fn update_quantity(&mut self, product_uuid: ProductUuid, quantity: u32) {
        if quantity == 0 {
            self.remove(product_uuid);
            return;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.uuid == product_uuid)
        {
            line.quantity = quantity;
            line.total_price = pricing::line_total(&line.product, quantity, &line.selections);
        }
    }

    /// Empties the cart and clears the restaurant lock.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.restaurant_uuid = None;
    }

    /// Sum of all line quantities.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of all cached line totals.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(|line| line.total_price).sum()
    }
}
