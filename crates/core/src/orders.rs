//! Orders

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    cart::{Cart, CartLine},
    catalog::RestaurantUuid,
    uuids::TypedUuid,
};

/// Marker for customer-scoped identifiers. The customer account itself is
/// owned by the auth collaborator.
#[derive(Debug)]
pub struct CustomerRef;

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRef>;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Just submitted, awaiting the restaurant.
    Pending,
    /// Accepted by the restaurant.
    Confirmed,
    /// In the kitchen.
    Preparing,
    /// Left for delivery.
    OutForDelivery,
    /// Handed to the customer.
    Delivered,
    /// Abandoned by either side.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in the usual fulfilment order.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Confirmed,
        Self::Preparing,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// The stored backend value for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Preparing => "preparing",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Errors raised when an order status change is not allowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatusChangeError {
    /// The order is already in the requested status.
    #[error("order is already {0}")]
    AlreadyInStatus(OrderStatus),
}

/// Validates a status change against the current status.
///
/// Any move between two distinct statuses is allowed; re-applying the
/// current status is rejected.
///
/// # Errors
///
/// - [`StatusChangeError::AlreadyInStatus`]: the requested status equals the
///   current one.
pub fn validate_status_change(
    current: OrderStatus,
    next: OrderStatus,
) -> Result<(), StatusChangeError> {
    if current == next {
        return Err(StatusChangeError::AlreadyInStatus(current));
    }

    Ok(())
}

/// Errors raised while assembling an order draft from the cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart holds no lines.
    #[error("cart is empty")]
    EmptyCart,

    /// No contact phone was given.
    #[error("contact phone is required")]
    MissingContact,

    /// The cart has lines but no restaurant lock. Unreachable while the
    /// cart invariant holds.
    #[error("cart has no restaurant")]
    NoRestaurant,
}

/// Order payload assembled from the cart but not yet persisted; the backend
/// assigns id and creation time on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub restaurant_uuid: RestaurantUuid,
    pub customer_uuid: CustomerUuid,
    /// Deep snapshot of the cart lines at submission time.
    pub lines: Vec<CartLine>,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub notes: Option<String>,
    pub delivery_address: Option<String>,
    pub contact_phone: String,
}

/// Assembles an order draft from the cart and the customer's checkout
/// details. The cart itself is never touched; clearing it after a
/// successful submission is the caller's responsibility.
///
/// The draft total is recomputed as the fold over the snapshotted lines,
/// which by the cart's own invariant equals the cart total.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`]: the cart holds no lines.
/// - [`CheckoutError::MissingContact`]: the contact phone is blank.
/// - [`CheckoutError::NoRestaurant`]: the cart has no restaurant lock.
pub fn build_order_draft(
    cart: &Cart,
    customer_uuid: CustomerUuid,
    contact_phone: &str,
    notes: Option<String>,
    delivery_address: Option<String>,
) -> Result<OrderDraft, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    if contact_phone.trim().is_empty() {
        return Err(CheckoutError::MissingContact);
    }

    let restaurant_uuid = cart.restaurant_uuid().ok_or(CheckoutError::NoRestaurant)?;

    let lines = cart.lines().to_vec();
    let total_price = lines.iter().map(|line| line.total_price).sum();

    Ok(OrderDraft {
        restaurant_uuid,
        customer_uuid,
        lines,
        total_price,
        status: OrderStatus::Pending,
        notes,
        delivery_address,
        contact_phone: contact_phone.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{cart::Cart, fixtures};

    use super::*;

    #[test]
    fn statuses_serialize_snake_case() -> TestResult {
        let json = serde_json::to_string(&OrderStatus::OutForDelivery)?;

        assert_eq!(json, "\"out_for_delivery\"");

        Ok(())
    }

    #[test]
    fn as_str_matches_serde_representation() -> TestResult {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status)?;

            assert_eq!(json, format!("\"{status}\""));
        }

        Ok(())
    }

    #[test]
    fn any_move_between_distinct_statuses_is_allowed() {
        for current in OrderStatus::ALL {
            for next in OrderStatus::ALL {
                let result = validate_status_change(current, next);

                if current == next {
                    assert_eq!(
                        result,
                        Err(StatusChangeError::AlreadyInStatus(current)),
                        "re-applying {current} should be rejected"
                    );
                } else {
                    assert_eq!(result, Ok(()), "{current} -> {next} should be allowed");
                }
            }
        }
    }

    #[test]
    fn draft_carries_cart_snapshot_and_pending_status() -> TestResult {
        let product = fixtures::simple_product(fixtures::restaurant_a());
        let mut cart = Cart::new();
        cart.add(&product, 2, Vec::new())?;

        let customer = CustomerUuid::new();
        let draft = build_order_draft(&cart, customer, "11999999999", None, None)?;

        assert_eq!(draft.restaurant_uuid, fixtures::restaurant_a());
        assert_eq!(draft.customer_uuid, customer);
        assert_eq!(draft.lines, cart.lines().to_vec());
        assert_eq!(draft.total_price, Decimal::new(9180, 2));
        assert_eq!(draft.status, OrderStatus::Pending);
        assert_eq!(draft.contact_phone, "11999999999");

        Ok(())
    }

    #[test]
    fn draft_total_matches_cart_total() -> TestResult {
        let product = fixtures::customizable_product(fixtures::restaurant_a());
        let mut cart = Cart::new();
        cart.add(
            &product,
            3,
            vec![fixtures::select(
                fixtures::size_option_uuid(),
                &[fixtures::size_large()],
            )],
        )?;

        let draft = build_order_draft(&cart, CustomerUuid::new(), "11999999999", None, None)?;

        assert_eq!(draft.total_price, cart.total_price());

        Ok(())
    }

    #[test]
    fn empty_cart_cannot_check_out() {
        let cart = Cart::new();

        let result = build_order_draft(&cart, CustomerUuid::new(), "11999999999", None, None);

        assert_eq!(result, Err(CheckoutError::EmptyCart));
    }

    #[test]
    fn blank_contact_phone_cannot_check_out() -> TestResult {
        let product = fixtures::simple_product(fixtures::restaurant_a());
        let mut cart = Cart::new();
        cart.add(&product, 1, Vec::new())?;

        let result = build_order_draft(&cart, CustomerUuid::new(), "  ", None, None);

        assert_eq!(result, Err(CheckoutError::MissingContact));

        Ok(())
    }

    #[test]
    fn notes_and_address_pass_through() -> TestResult {
        let product = fixtures::simple_product(fixtures::restaurant_a());
        let mut cart = Cart::new();
        cart.add(&product, 1, Vec::new())?;

        let draft = build_order_draft(
            &cart,
            CustomerUuid::new(),
            "11999999999",
            Some("sem cebola".to_string()),
            Some("Rua das Flores, 123".to_string()),
        )?;

        assert_eq!(draft.notes.as_deref(), Some("sem cebola"));
        assert_eq!(
            draft.delivery_address.as_deref(),
            Some("Rua das Flores, 123")
        );

        Ok(())
    }
}
