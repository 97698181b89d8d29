//! Cart store.

use std::sync::Arc;

use carddz::{
    cart::{Cart, CartError},
    catalog::{Product, ProductUuid, RestaurantUuid, SelectedOption},
};
use tracing::warn;

use crate::domain::carts::snapshot::CartSnapshotStore;

/// Callback invoked with the cart after every applied mutation.
pub type CartListener = Box<dyn Fn(&Cart) + Send + Sync>;

/// Owns the live cart, its durable snapshot and change subscriptions.
///
/// There is a single writer: every mutation runs to completion
/// synchronously, is written through to the snapshot store and then pushed
/// to subscribers. Snapshot write failures are logged and do not roll the
/// in-memory mutation back; the next successful write catches the snapshot
/// up.
pub struct CartStore {
    cart: Cart,
    snapshots: Arc<dyn CartSnapshotStore>,
    listeners: Vec<CartListener>,
}

impl CartStore {
    /// Restores the cart from its durable snapshot.
    ///
    /// A missing, unreadable or corrupt snapshot yields an empty cart;
    /// startup never fails on bad saved state.
    #[must_use]
    pub fn restore(snapshots: Arc<dyn CartSnapshotStore>) -> Self {
        let cart = match snapshots.load() {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(cart) => cart,
                Err(error) => {
                    warn!(%error, "discarding corrupt cart snapshot");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!(%error, "failed to read cart snapshot");
                Cart::new()
            }
        };

        Self {
            cart,
            snapshots,
            listeners: Vec::new(),
        }
    }

    /// The live cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Registers a listener for cart changes.
    pub fn subscribe(&mut self, listener: CartListener) {
        self.listeners.push(listener);
    }

    /// Adds a configured product to the cart.
    ///
    /// # Errors
    ///
    /// - [`CartError::DifferentRestaurant`]: the cart is locked to another
    ///   restaurant. Nothing is persisted and no listener fires.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity: u32,
        selections: Vec<SelectedOption>,
    ) -> Result<(), CartError> {
        self.cart.add(product, quantity, selections)?;
        self.publish();

        Ok(())
    }

    /// Removes every line for the given product.
    pub fn remove_from_cart(&mut self, product: ProductUuid) {
        self.cart.remove(product);
        self.publish();
    }

    /// Changes a line's quantity; zero removes the line.
    pub fn update_quantity(&mut self, product: ProductUuid, quantity: u32) {
        self.cart.update_quantity(product, quantity);
        self.publish();
    }

    /// Empties the cart, e.g. after a successful checkout.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.publish();
    }

    /// Whether a product from the given restaurant may currently be added.
    #[must_use]
    pub fn can_add_from(&self, restaurant: RestaurantUuid) -> bool {
        self.cart.can_add_from(restaurant)
    }

    fn publish(&self) {
        match serde_json::to_string(&self.cart) {
            Ok(blob) => {
                if let Err(error) = self.snapshots.save(&blob) {
                    warn!(%error, "failed to write cart snapshot");
                }
            }
            Err(error) => warn!(%error, "failed to serialize cart snapshot"),
        }

        for listener in &self.listeners {
            listener(&self.cart);
        }
    }
}
