//! Orders service.

use std::sync::Arc;

use carddz::{
    cart::Cart,
    orders::{self, OrderStatus},
};

use crate::{
    auth::{CurrentUser, UserRole},
    domain::orders::{
        errors::OrdersServiceError,
        models::OrderRecord,
        repository::OrdersRepository,
    },
};

/// Contact and delivery details captured on the checkout form.
#[derive(Debug, Clone, Default)]
pub struct CheckoutDetails {
    pub contact_phone: String,
    pub notes: Option<String>,
    pub delivery_address: Option<String>,
}

/// Order placement and lifecycle rules, layered over the hosted backend's
/// order CRUD.
#[derive(Clone)]
pub struct OrdersService {
    repository: Arc<dyn OrdersRepository>,
}

impl OrdersService {
    #[must_use]
    pub fn new(repository: Arc<dyn OrdersRepository>) -> Self {
        Self { repository }
    }

    /// Assembles an order draft from the cart and submits it.
    ///
    /// The cart itself is never mutated here: on success the caller clears
    /// it, on failure it is left intact so the customer can retry.
    ///
    /// # Errors
    ///
    /// - [`OrdersServiceError::Checkout`]: a checkout precondition failed;
    ///   nothing reached the backend.
    /// - [`OrdersServiceError::Backend`]: the submission itself failed.
    #[tracing::instrument(
        name = "orders.service.checkout",
        skip(self, cart, actor, details),
        fields(line_count = cart.lines().len()),
        err
    )]
    pub async fn checkout(
        &self,
        cart: &Cart,
        actor: &CurrentUser,
        details: CheckoutDetails,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let draft = orders::build_order_draft(
            cart,
            actor.customer_uuid(),
            &details.contact_phone,
            details.notes,
            details.delivery_address,
        )?;

        let order = self.repository.create_order(&draft).await?;

        Ok(order)
    }

    /// Orders the acting customer has placed, newest first.
    pub async fn orders_for_customer(
        &self,
        actor: &CurrentUser,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        self.repository
            .orders_for_customer(actor.customer_uuid())
            .await
            .map_err(Into::into)
    }

    /// Orders received by the acting restaurant, newest first.
    ///
    /// # Errors
    ///
    /// - [`OrdersServiceError::Unauthorized`]: the actor is not a
    ///   restaurant user with a tenant scope.
    pub async fn orders_for_restaurant(
        &self,
        actor: &CurrentUser,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let restaurant = actor
            .restaurant_uuid
            .filter(|_| actor.role == UserRole::Restaurant)
            .ok_or(OrdersServiceError::Unauthorized)?;

        self.repository
            .orders_for_restaurant(restaurant)
            .await
            .map_err(Into::into)
    }

    /// Moves an order to a new status with a single atomic backend update.
    ///
    /// The returned record reflects what was actually persisted; callers
    /// replace their local copy only with this result, so a failed update
    /// leaves their state on the persisted status.
    ///
    /// # Errors
    ///
    /// - [`OrdersServiceError::Unauthorized`]: the actor is not a
    ///   restaurant user scoped to the order's restaurant.
    /// - [`OrdersServiceError::Status`]: the order is already in the
    ///   requested status.
    /// - [`OrdersServiceError::NotFound`] / [`OrdersServiceError::Backend`]:
    ///   the backend update failed.
    #[tracing::instrument(
        name = "orders.service.update_status",
        skip(self, actor, order),
        fields(order_uuid = %order.uuid, from = %order.status, to = %status),
        err
    )]
    pub async fn update_status(
        &self,
        actor: &CurrentUser,
        order: &OrderRecord,
        status: OrderStatus,
    ) -> Result<OrderRecord, OrdersServiceError> {
        if !actor.is_restaurant_for(order.restaurant_uuid) {
            return Err(OrdersServiceError::Unauthorized);
        }

        orders::validate_status_change(order.status, status)?;

        let updated = self
            .repository
            .update_order_status(order.uuid, status)
            .await?;

        Ok(updated)
    }
}
