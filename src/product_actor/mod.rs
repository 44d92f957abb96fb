//! Product repository: the resource actor that exclusively owns the product collection.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::model::{Product, ProductId};
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
///
/// Ids are random v4 UUIDs. The actor is returned unstarted so persisted records can be
/// [`load`](ResourceActor::load)ed before it is spawned.
pub fn new(capacity: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::<Product>::new(capacity, ProductId::generate);
    let client = ProductClient::new(generic_client);

    (actor, client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductCreate, ProductUpdate};
    use actor_framework::ActorClient;

    fn create(name: &str, price: f64) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            quantity: 3.0,
            price,
            description: format!("{name} description"),
            category: "General".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_the_stored_product() {
        let (actor, client) = new(8);
        tokio::spawn(actor.run(()));

        let created = client.create_product(create("Lamp", 19.99)).await.unwrap();
        assert_eq!(created.name, "Lamp");
        assert_eq!(created.price, 19.99);

        let fetched = client.get(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_generated_ids_are_unique() {
        let (actor, client) = new(8);
        tokio::spawn(actor.run(()));

        let a = client.create_product(create("A", 1.0)).await.unwrap();
        let b = client.create_product(create("B", 1.0)).await.unwrap();
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_update_and_delete_of_missing_product_report_not_found() {
        let (actor, client) = new(8);
        tokio::spawn(actor.run(()));
        let missing = ProductId::generate();

        let update = client
            .update_product(missing, ProductUpdate::default())
            .await;
        assert_eq!(update, Err(ProductError::NotFound(missing)));

        let delete = client.delete(missing).await;
        assert_eq!(delete, Err(ProductError::NotFound(missing)));
    }

    #[tokio::test]
    async fn test_loaded_products_are_served_and_dumped() {
        let (mut actor, client) = new(8);
        let seeded = Product::new(ProductId::generate(), create("Seeded", 5.0));
        assert_eq!(actor.load(vec![seeded.clone()]), 1);
        let handle = tokio::spawn(actor.run(()));

        assert_eq!(client.list().await.unwrap(), vec![seeded.clone()]);

        drop(client);
        assert_eq!(handle.await.unwrap(), vec![seeded]);
    }
}
