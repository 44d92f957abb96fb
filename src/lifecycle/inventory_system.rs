use crate::clients::ProductClient;
use crate::model::Product;
use crate::service::ProductService;
use crate::store::{JsonFileStore, StoreError};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Product actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// Owns the running product actor and the file it is persisted to.
///
/// # Lifecycle
///
/// 1. [`initialize`](InventorySystem::initialize) reads the data file, seeds the actor with
///    it and spawns the actor.
/// 2. Requests are served through clients handed out by [`service`](InventorySystem::service).
/// 3. [`shutdown`](InventorySystem::shutdown) closes the actor and writes its final
///    collection back to the data file.
///
/// ```ignore
/// let system = InventorySystem::initialize(JsonFileStore::new("data/product.json"), 32).await?;
/// let app = http::router(system.service());
/// // ... serve until a shutdown signal ...
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    store: JsonFileStore,
    handle: JoinHandle<Vec<Product>>,
}

impl InventorySystem {
    /// Loads the persisted products and starts the product actor.
    ///
    /// A data file that is not a product array is logged and the collection starts empty.
    /// Any I/O failure on the data file is returned.
    pub async fn initialize(store: JsonFileStore, capacity: usize) -> Result<Self, LifecycleError> {
        let products = match store.load().await {
            Ok(products) => products,
            Err(e @ StoreError::Malformed { .. }) => {
                error!(error = %e, "Ignoring unreadable data file, starting with no products");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        let (mut actor, product_client) = crate::product_actor::new(capacity);
        actor.load(products);
        let handle = tokio::spawn(actor.run(()));

        info!(path = %store.path().display(), "Inventory system started");
        Ok(Self {
            product_client,
            store,
            handle,
        })
    }

    /// A service backed by this system's product actor.
    pub fn service(&self) -> ProductService {
        ProductService::new(self.product_client.clone())
    }

    /// Stops the product actor and persists its final collection.
    ///
    /// Every other clone of the client (services, routers) must have been dropped first,
    /// otherwise the actor keeps running and this waits for it.
    ///
    /// Returns the number of products written.
    pub async fn shutdown(self) -> Result<usize, LifecycleError> {
        info!("Shutting down system...");

        // Dropping the last sender closes the channel and ends the actor loop.
        drop(self.product_client);

        let products = self.handle.await.map_err(|e| {
            error!("Actor task failed: {:?}", e);
            e
        })?;
        self.store.save(&products).await?;

        info!(size = products.len(), "System shutdown complete.");
        Ok(products.len())
    }
}
