//! Client Service - Business logic layer

use chrono::Utc;
use domain_stores::{StoreError, StoreRepository};
use futures::future::join_all;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::hooks;
use crate::models::{ClientResponse, CreateClient, UpdateClient};
use crate::password::hash_password;
use crate::repository::ClientRepository;

/// Client operations. Holds the store repository for the delete cascade.
pub struct ClientService<R: ClientRepository, S: StoreRepository> {
    repository: Arc<R>,
    stores: Arc<S>,
}

impl<R: ClientRepository, S: StoreRepository> ClientService<R, S> {
    pub fn new(repository: R, stores: S) -> Self {
        Self {
            repository: Arc::new(repository),
            stores: Arc::new(stores),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_clients(&self) -> ClientResult<Vec<ClientResponse>> {
        let clients = self.repository.find_all().await?;
        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_client(&self, id: Uuid) -> ClientResult<ClientResponse> {
        self.repository
            .find_by_id(id)
            .await?
            .map(ClientResponse::from)
            .ok_or(ClientError::NotFound(id))
    }

    #[instrument(skip(self, input), fields(client_email = %input.email))]
    pub async fn create_client(&self, input: CreateClient) -> ClientResult<ClientResponse> {
        input
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let client = hooks::before_create(input, Utc::now(), hash_password)?;
        let client = self.repository.insert(client).await?;
        Ok(client.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update_client(&self, id: Uuid, input: UpdateClient) -> ClientResult<ClientResponse> {
        input
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let patch = hooks::before_update(input, Utc::now(), hash_password)?;
        self.repository
            .update(id, patch)
            .await?
            .map(ClientResponse::from)
            .ok_or(ClientError::NotFound(id))
    }

    /// Delete a client after removing it from every store that lists it.
    ///
    /// The store saves are issued together and all of them settle before the
    /// outcome is decided. If any fails, the client is kept and the first
    /// failure is returned; saves that did succeed are not rolled back.
    #[instrument(skip(self))]
    pub async fn delete_client(&self, id: Uuid) -> ClientResult<ClientResponse> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(ClientError::NotFound(id));
        }

        self.detach_from_stores(id).await?;

        let removed = self
            .repository
            .remove(id)
            .await?
            .ok_or(ClientError::NotFound(id))?;

        tracing::info!(client_id = %id, "Deleted client");
        Ok(removed.into())
    }

    async fn detach_from_stores(&self, client_id: Uuid) -> ClientResult<()> {
        let stores = self.stores.find_by_client(client_id).await?;

        let saves = stores.into_iter().filter_map(|mut store| {
            store
                .detach_client(client_id)
                .then(move || self.stores.save(store))
        });

        let results = join_all(saves).await;
        let saved = results.len();
        results
            .into_iter()
            .collect::<Result<Vec<()>, StoreError>>()
            .inspect_err(|e| {
                tracing::error!(client_id = %client_id, error = %e, "Store cascade failed");
            })?;

        tracing::debug!(client_id = %client_id, stores = saved, "Detached client from stores");
        Ok(())
    }
}
