//! Restaurants service.

use std::sync::Arc;

use carddz::catalog::RestaurantUuid;

use crate::{
    auth::{CurrentUser, UserRole},
    domain::restaurants::{
        errors::RestaurantsServiceError,
        models::{NewRestaurant, Restaurant, RestaurantUpdate},
        repository::RestaurantsRepository,
    },
};

/// Restaurant directory reads plus the administrative management surface.
#[derive(Clone)]
pub struct RestaurantsService {
    repository: Arc<dyn RestaurantsRepository>,
}

impl RestaurantsService {
    #[must_use]
    pub fn new(repository: Arc<dyn RestaurantsRepository>) -> Self {
        Self { repository }
    }

    /// The public restaurant directory.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, RestaurantsServiceError> {
        self.repository.list_restaurants().await.map_err(Into::into)
    }

    /// A single restaurant's public profile.
    pub async fn get_restaurant(
        &self,
        restaurant: RestaurantUuid,
    ) -> Result<Restaurant, RestaurantsServiceError> {
        self.repository
            .get_restaurant(restaurant)
            .await
            .map_err(Into::into)
    }

    /// Registers a new restaurant. Administrators only.
    ///
    /// # Errors
    ///
    /// - [`RestaurantsServiceError::Unauthorized`]: the actor is not an
    ///   administrator.
    #[tracing::instrument(name = "restaurants.service.create", skip(self, actor, restaurant), err)]
    pub async fn create_restaurant(
        &self,
        actor: &CurrentUser,
        restaurant: NewRestaurant,
    ) -> Result<Restaurant, RestaurantsServiceError> {
        if actor.role != UserRole::Admin {
            return Err(RestaurantsServiceError::Unauthorized);
        }

        self.repository
            .create_restaurant(restaurant)
            .await
            .map_err(Into::into)
    }

    /// Updates a restaurant's profile. Allowed for administrators and for
    /// the restaurant's own staff account.
    ///
    /// # Errors
    ///
    /// - [`RestaurantsServiceError::Unauthorized`]: the actor is neither an
    ///   administrator nor scoped to this restaurant.
    #[tracing::instrument(
        name = "restaurants.service.update",
        skip(self, actor, update),
        fields(restaurant_uuid = %restaurant),
        err
    )]
    pub async fn update_restaurant(
        &self,
        actor: &CurrentUser,
        restaurant: RestaurantUuid,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantsServiceError> {
        if actor.role != UserRole::Admin && !actor.is_restaurant_for(restaurant) {
            return Err(RestaurantsServiceError::Unauthorized);
        }

        self.repository
            .update_restaurant(restaurant, update)
            .await
            .map_err(Into::into)
    }
}
