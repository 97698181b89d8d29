//! Catalog persistence contract.

use async_trait::async_trait;
use carddz::catalog::{
    Category, CategoryUuid, CustomizationItem, CustomizationOption, OptionItemUuid, OptionUuid,
    Product, ProductUuid, RestaurantUuid,
};
use mockall::automock;

use crate::{
    backend::BackendError,
    domain::catalog::models::{
        CategoryUpdate, CustomizationItemUpdate, CustomizationOptionUpdate, NewCategory,
        NewCustomizationItem, NewCustomizationOption, NewProduct, ProductUpdate,
    },
};

/// Catalog CRUD exposed by the hosted backend.
///
/// Products come back with their customization options already attached,
/// ordered the way the restaurant arranged them.
#[automock]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Categories of one restaurant, ordered by name.
    async fn list_categories(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<Vec<Category>, BackendError>;

    async fn create_category(&self, category: NewCategory) -> Result<Category, BackendError>;

    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<Category, BackendError>;

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), BackendError>;

    /// Every product of one restaurant, available or not.
    async fn list_products(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<Vec<Product>, BackendError>;

    async fn get_product(&self, product: ProductUuid) -> Result<Product, BackendError>;

    async fn create_product(&self, product: NewProduct) -> Result<Product, BackendError>;

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, BackendError>;

    async fn delete_product(&self, product: ProductUuid) -> Result<(), BackendError>;

    async fn create_option(
        &self,
        option: NewCustomizationOption,
    ) -> Result<CustomizationOption, BackendError>;

    async fn update_option(
        &self,
        option: OptionUuid,
        update: CustomizationOptionUpdate,
    ) -> Result<CustomizationOption, BackendError>;

    async fn delete_option(&self, option: OptionUuid) -> Result<(), BackendError>;

    async fn create_option_item(
        &self,
        item: NewCustomizationItem,
    ) -> Result<CustomizationItem, BackendError>;

    async fn update_option_item(
        &self,
        item: OptionItemUuid,
        update: CustomizationItemUpdate,
    ) -> Result<CustomizationItem, BackendError>;

    async fn delete_option_item(&self, item: OptionItemUuid) -> Result<(), BackendError>;
}
