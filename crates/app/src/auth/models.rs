//! Auth data models.

use carddz::{catalog::RestaurantUuid, orders::CustomerUuid, uuids::TypedUuid};
use serde::{Deserialize, Serialize};

/// Role attached to an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Restaurant,
    Customer,
}

/// User UUID
pub type UserUuid = TypedUuid<CurrentUser>;

/// Authenticated user descriptor supplied by the auth collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Present only for restaurant-role users.
    pub restaurant_uuid: Option<RestaurantUuid>,
}

impl CurrentUser {
    /// Whether this user may act for the given restaurant.
    #[must_use]
    pub fn is_restaurant_for(&self, restaurant: RestaurantUuid) -> bool {
        self.role == UserRole::Restaurant && self.restaurant_uuid == Some(restaurant)
    }

    /// This user's identity as an order-placing customer.
    #[must_use]
    pub fn customer_uuid(&self) -> CustomerUuid {
        CustomerUuid::from_uuid(self.uuid.into_uuid())
    }
}
