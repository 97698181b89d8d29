//! Catalog service.

use std::sync::Arc;

use carddz::catalog::{
    Category, CategoryUuid, CustomizationItem, CustomizationOption, OptionItemUuid, OptionUuid,
    Product, ProductUuid, RestaurantUuid,
};
use rustc_hash::FxHashMap;

use crate::domain::catalog::{
    errors::CatalogServiceError,
    models::{
        CategoryUpdate, CustomizationItemUpdate, CustomizationOptionUpdate, MenuSection,
        NewCategory, NewCustomizationItem, NewCustomizationOption, NewProduct, ProductUpdate,
    },
    repository::CatalogRepository,
};

/// Read-side menu composition and the staff catalog management surface,
/// layered over the hosted backend's catalog CRUD.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn CatalogRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }

    /// Products a customer can currently order, optionally narrowed to one
    /// category.
    #[tracing::instrument(
        name = "catalog.service.menu",
        skip(self),
        fields(restaurant_uuid = %restaurant),
        err
    )]
    pub async fn menu(
        &self,
        restaurant: RestaurantUuid,
        category: Option<CategoryUuid>,
    ) -> Result<Vec<Product>, CatalogServiceError> {
        let products = self.repository.list_products(restaurant).await?;

        Ok(products
            .into_iter()
            .filter(|product| product.is_available)
            .filter(|product| category.is_none_or(|category| product.category_uuid == category))
            .collect())
    }

    /// The full menu grouped by category, in the restaurant's category
    /// order. Categories without available products still appear, empty.
    #[tracing::instrument(
        name = "catalog.service.menu_sections",
        skip(self),
        fields(restaurant_uuid = %restaurant),
        err
    )]
    pub async fn menu_sections(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<Vec<MenuSection>, CatalogServiceError> {
        let categories = self.repository.list_categories(restaurant).await?;
        let products = self.repository.list_products(restaurant).await?;

        let mut by_category: FxHashMap<CategoryUuid, Vec<Product>> = FxHashMap::default();
        for product in products.into_iter().filter(|product| product.is_available) {
            by_category
                .entry(product.category_uuid)
                .or_default()
                .push(product);
        }

        Ok(categories
            .into_iter()
            .map(|category| {
                let products = by_category.remove(&category.uuid).unwrap_or_default();
                MenuSection { category, products }
            })
            .collect())
    }

    /// Categories of one restaurant, ordered by name.
    pub async fn categories(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<Vec<Category>, CatalogServiceError> {
        self.repository
            .list_categories(restaurant)
            .await
            .map_err(Into::into)
    }

    pub async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<Product, CatalogServiceError> {
        self.repository.get_product(product).await.map_err(Into::into)
    }

    pub async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CatalogServiceError> {
        self.repository
            .create_category(category)
            .await
            .map_err(Into::into)
    }

    pub async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<Category, CatalogServiceError> {
        self.repository
            .update_category(category, update)
            .await
            .map_err(Into::into)
    }

    pub async fn delete_category(&self, category: CategoryUuid) -> Result<(), CatalogServiceError> {
        self.repository
            .delete_category(category)
            .await
            .map_err(Into::into)
    }

    #[tracing::instrument(
        name = "catalog.service.create_product",
        skip(self, product),
        fields(restaurant_uuid = %product.restaurant_uuid),
        err
    )]
    pub async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<Product, CatalogServiceError> {
        self.repository
            .create_product(product)
            .await
            .map_err(Into::into)
    }

    pub async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, CatalogServiceError> {
        self.repository
            .update_product(product, update)
            .await
            .map_err(Into::into)
    }

    pub async fn delete_product(&self, product: ProductUuid) -> Result<(), CatalogServiceError> {
        self.repository
            .delete_product(product)
            .await
            .map_err(Into::into)
    }

    pub async fn create_option(
        &self,
        option: NewCustomizationOption,
    ) -> Result<CustomizationOption, CatalogServiceError> {
        self.repository
            .create_option(option)
            .await
            .map_err(Into::into)
    }

    pub async fn update_option(
        &self,
        option: OptionUuid,
        update: CustomizationOptionUpdate,
    ) -> Result<CustomizationOption, CatalogServiceError> {
        self.repository
            .update_option(option, update)
            .await
            .map_err(Into::into)
    }

    pub async fn delete_option(&self, option: OptionUuid) -> Result<(), CatalogServiceError> {
        self.repository
            .delete_option(option)
            .await
            .map_err(Into::into)
    }

    pub async fn create_option_item(
        &self,
        item: NewCustomizationItem,
    ) -> Result<CustomizationItem, CatalogServiceError> {
        self.repository
            .create_option_item(item)
            .await
            .map_err(Into::into)
    }

    pub async fn update_option_item(
        &self,
        item: OptionItemUuid,
        update: CustomizationItemUpdate,
    ) -> Result<CustomizationItem, CatalogServiceError> {
        self.repository
            .update_option_item(item, update)
            .await
            .map_err(Into::into)
    }

    pub async fn delete_option_item(&self, item: OptionItemUuid) -> Result<(), CatalogServiceError> {
        self.repository
            .delete_option_item(item)
            .await
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use carddz::fixtures;
    use testresult::TestResult;

    use crate::{backend::BackendError, domain::catalog::repository::MockCatalogRepository};

    use super::*;

    fn service(repository: MockCatalogRepository) -> CatalogService {
        CatalogService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn menu_hides_unavailable_products() -> TestResult {
        let restaurant = fixtures::restaurant_a();
        let mut sold_out = fixtures::promo_product(restaurant);
        sold_out.is_available = false;
        let burger = fixtures::simple_product(restaurant);

        let listed = vec![burger.clone(), sold_out];
        let mut repository = MockCatalogRepository::new();
        repository
            .expect_list_products()
            .returning(move |_| Ok(listed.clone()));

        let menu = service(repository).menu(restaurant, None).await?;

        assert_eq!(menu, vec![burger]);

        Ok(())
    }

    #[tokio::test]
    async fn menu_narrows_to_the_requested_category() -> TestResult {
        let restaurant = fixtures::restaurant_a();
        let burger = fixtures::simple_product(restaurant);
        let mut soda = fixtures::simple_product(restaurant);
        soda.name = "Guaraná".to_string();
        soda.category_uuid = fixtures::drinks_category(restaurant).uuid;

        let listed = vec![burger, soda.clone()];
        let mut repository = MockCatalogRepository::new();
        repository
            .expect_list_products()
            .returning(move |_| Ok(listed.clone()));

        let menu = service(repository)
            .menu(restaurant, Some(fixtures::drinks_category(restaurant).uuid))
            .await?;

        assert_eq!(menu, vec![soda]);

        Ok(())
    }

    #[tokio::test]
    async fn menu_sections_group_by_category_in_category_order() -> TestResult {
        let restaurant = fixtures::restaurant_a();
        let burger = fixtures::simple_product(restaurant);
        let mut soda = fixtures::simple_product(restaurant);
        soda.name = "Guaraná".to_string();
        soda.category_uuid = fixtures::drinks_category(restaurant).uuid;

        let categories = vec![
            fixtures::drinks_category(restaurant),
            fixtures::snacks_category(restaurant),
        ];
        let listed = vec![burger.clone(), soda.clone()];

        let mut repository = MockCatalogRepository::new();
        repository
            .expect_list_categories()
            .returning(move |_| Ok(categories.clone()));
        repository
            .expect_list_products()
            .returning(move |_| Ok(listed.clone()));

        let sections = service(repository).menu_sections(restaurant).await?;

        let summary: Vec<(String, usize)> = sections
            .iter()
            .map(|section| (section.category.name.clone(), section.products.len()))
            .collect();

        assert_eq!(
            summary,
            vec![("Bebidas".to_string(), 1), ("Lanches".to_string(), 1)]
        );

        Ok(())
    }

    #[tokio::test]
    async fn backend_not_found_maps_to_not_found() {
        let mut repository = MockCatalogRepository::new();
        repository
            .expect_get_product()
            .returning(|_| Err(BackendError::NotFound));

        let result = service(repository)
            .get_product(carddz::catalog::ProductUuid::new())
            .await;

        assert!(
            matches!(result, Err(CatalogServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
