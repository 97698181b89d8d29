//! Order persistence contract.

use async_trait::async_trait;
use carddz::{
    catalog::RestaurantUuid,
    orders::{CustomerUuid, OrderDraft, OrderStatus},
};
use mockall::automock;

use crate::{
    backend::BackendError,
    domain::orders::models::{OrderRecord, OrderUuid},
};

/// Order CRUD exposed by the hosted backend.
#[automock]
#[async_trait]
pub trait OrdersRepository: Send + Sync {
    /// Persists a draft, assigning id and creation time and defaulting the
    /// status to pending.
    async fn create_order(&self, draft: &OrderDraft) -> Result<OrderRecord, BackendError>;

    /// Orders placed by the customer, newest first.
    async fn orders_for_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, BackendError>;

    /// Orders received by the restaurant, newest first.
    async fn orders_for_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<Vec<OrderRecord>, BackendError>;

    /// Atomically sets the order's status, returning the updated record.
    async fn update_order_status(
        &self,
        order: OrderUuid,
        status: OrderStatus,
    ) -> Result<OrderRecord, BackendError>;
}
