//! Shared application state.
//!
//! Repositories are built once here and handed to each service; the Mongo
//! repositories are cheap handles over the client's connection pool.

use database::mongodb::{Client, Database};
use domain_clients::MongoClientRepository;
use domain_filters::MongoFilterRepository;
use domain_hm_products::MongoHMProductRepository;
use domain_products::MongoProductRepository;
use domain_stores::MongoStoreRepository;
use tracing::info;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mongo_client: Client,
    pub db: Database,
    pub stores: MongoStoreRepository,
    pub clients: MongoClientRepository,
    pub products: MongoProductRepository,
    pub hm_products: MongoHMProductRepository,
    pub filters: MongoFilterRepository,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client, db: Database) -> Self {
        Self {
            stores: MongoStoreRepository::new(&db),
            clients: MongoClientRepository::new(&db),
            products: MongoProductRepository::new(&db),
            hm_products: MongoHMProductRepository::new(&db),
            filters: MongoFilterRepository::new(&db),
            config,
            mongo_client,
            db,
        }
    }

    /// Unique and lookup indexes for every collection
    pub async fn init_indexes(&self) -> eyre::Result<()> {
        self.stores.init_indexes().await?;
        self.clients.init_indexes().await?;
        self.products.init_indexes().await?;
        self.hm_products.init_indexes().await?;
        self.filters.init_indexes().await?;
        info!("All indexes initialized");
        Ok(())
    }
}
