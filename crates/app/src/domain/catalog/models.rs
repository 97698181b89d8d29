//! Catalog write payloads and menu composition models.

use carddz::catalog::{Category, CategoryUuid, OptionUuid, Product, ProductUuid, RestaurantUuid};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// New Category payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub restaurant_uuid: RestaurantUuid,
}

/// Category Update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: String,
    pub description: String,
}

/// New Product payload. Customization options are managed separately, so a
/// freshly created product starts with none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category_uuid: CategoryUuid,
    pub restaurant_uuid: RestaurantUuid,
    pub is_promotion: bool,
    pub promotion_price: Option<Decimal>,
    pub is_available: bool,
}

/// Product Update payload. Replaces the editable columns wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: String,
    pub category_uuid: CategoryUuid,
    pub is_promotion: bool,
    pub promotion_price: Option<Decimal>,
    pub is_available: bool,
}

/// New customization option payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomizationOption {
    pub name: String,
    pub required: bool,
    pub multi_select: bool,
    pub product_uuid: ProductUuid,
    pub restaurant_uuid: RestaurantUuid,
}

/// Customization option update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationOptionUpdate {
    pub name: String,
    pub required: bool,
    pub multi_select: bool,
}

/// New customization item payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomizationItem {
    pub name: String,
    pub price: Decimal,
    pub option_uuid: OptionUuid,
    pub restaurant_uuid: RestaurantUuid,
}

/// Customization item update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationItemUpdate {
    pub name: String,
    pub price: Decimal,
}

/// One category's slice of the menu, available products only.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuSection {
    pub category: Category,
    pub products: Vec<Product>,
}
