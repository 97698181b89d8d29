//! App Context

use std::sync::Arc;

use crate::{
    auth::AuthService,
    domain::{
        carts::{CartStore, snapshot::CartSnapshotStore},
        catalog::{CatalogService, repository::CatalogRepository},
        orders::{OrdersService, repository::OrdersRepository},
        restaurants::{RestaurantsService, repository::RestaurantsRepository},
    },
};

/// Application-wide service wiring.
///
/// Collaborator handles are injected once here and passed down explicitly;
/// nothing reaches for a global.
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub catalog: CatalogService,
    pub orders: OrdersService,
    pub restaurants: RestaurantsService,
    /// The session's cart, restored from its durable snapshot.
    pub cart: CartStore,
}

impl AppContext {
    /// Wires the application services over the given collaborators.
    #[must_use]
    pub fn new(
        auth: Arc<dyn AuthService>,
        catalog: Arc<dyn CatalogRepository>,
        orders: Arc<dyn OrdersRepository>,
        restaurants: Arc<dyn RestaurantsRepository>,
        snapshots: Arc<dyn CartSnapshotStore>,
    ) -> Self {
        Self {
            auth,
            catalog: CatalogService::new(catalog),
            orders: OrdersService::new(orders),
            restaurants: RestaurantsService::new(restaurants),
            cart: CartStore::restore(snapshots),
        }
    }
}
