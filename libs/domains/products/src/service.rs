//! Product Service - Business logic layer

use chrono::Utc;
use domain_clients::ClientRepository;
use domain_stores::StoreRepository;
use futures::{
    FutureExt, TryFutureExt,
    future::{BoxFuture, join_all, try_join},
};
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::hooks;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Holds the client and store repositories so a delete can remove the
/// product from wishlists and store catalogs first.
pub struct ProductService<R: ProductRepository, C: ClientRepository, S: StoreRepository> {
    repository: Arc<R>,
    clients: Arc<C>,
    stores: Arc<S>,
}

impl<R, C, S> ProductService<R, C, S>
where
    R: ProductRepository,
    C: ClientRepository,
    S: StoreRepository,
{
    pub fn new(repository: R, clients: C, stores: S) -> Self {
        Self {
            repository: Arc::new(repository),
            clients: Arc::new(clients),
            stores: Arc::new(stores),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let product = hooks::before_create(input, Utc::now())?;
        self.repository.insert(product).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let current = self.get_product(id).await?;
        let patch = hooks::before_update(&current, input, Utc::now())?;

        self.repository
            .update(id, patch)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product after removing it from every wishlist and store.
    ///
    /// All cascade saves are issued together and awaited as a group. The
    /// product is removed only when every one of them succeeded; otherwise
    /// the first failure is returned as it was raised.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<Product> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        self.detach_references(id).await?;

        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        tracing::info!(product_id = %id, "Deleted product");
        Ok(removed)
    }

    async fn detach_references(&self, product_id: Uuid) -> ProductResult<()> {
        let (clients, stores) = try_join(
            self.clients
                .find_by_wishlist_product(product_id)
                .map_err(ProductError::from),
            self.stores
                .find_by_product(product_id)
                .map_err(ProductError::from),
        )
        .await?;

        let mut saves: Vec<BoxFuture<'_, ProductResult<()>>> = Vec::new();

        for mut client in clients {
            if client.detach_wishlist_product(product_id) {
                saves.push(self.clients.save(client).map_err(ProductError::from).boxed());
            }
        }
        for mut store in stores {
            if store.detach_product(product_id) {
                saves.push(self.stores.save(store).map_err(ProductError::from).boxed());
            }
        }

        let total = saves.len();
        join_all(saves)
            .await
            .into_iter()
            .collect::<ProductResult<Vec<()>>>()
            .inspect_err(|e| {
                tracing::error!(product_id = %product_id, error = %e, "Product cascade failed");
            })?;

        tracing::debug!(product_id = %product_id, saved = total, "Detached product references");
        Ok(())
    }
}
