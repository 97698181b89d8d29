//! Order Records

use carddz::{
    cart::CartLine,
    catalog::RestaurantUuid,
    orders::{CustomerUuid, OrderStatus},
    uuids::TypedUuid,
};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Persisted order. Id and creation time are assigned by the backend on
/// submission.
///
/// Lines, total and contact details never change after creation; only the
/// status moves, one atomic update at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub customer_uuid: CustomerUuid,
    pub lines: Vec<CartLine>,
    pub total_price: Decimal,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub notes: Option<String>,
    pub delivery_address: Option<String>,
    pub contact_phone: String,
}
