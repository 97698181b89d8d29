//! Restaurant Records

use carddz::catalog::RestaurantUuid;
use serde::{Deserialize, Serialize};

use crate::auth::UserUuid;

/// Restaurant Record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub uuid: RestaurantUuid,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub cover_image: String,
    pub address: String,
    pub phone: String,
    pub owner_uuid: UserUuid,
}

/// New Restaurant payload. Images are attached later through the upload
/// collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub owner_uuid: UserUuid,
}

/// Restaurant profile update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub cover_image: String,
    pub address: String,
    pub phone: String,
}
