//! # Product Service
//!
//! Request-level operations over the product repository. Reads go through the
//! [`query`](crate::query) pipeline; results are wrapped in the response envelopes the
//! HTTP layer serializes as-is.

use crate::clients::ProductClient;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use crate::query::{self, ProductQuery};
use actor_framework::ActorClient;
use serde::Serialize;
use tracing::{info, instrument};

pub const DELETED_MESSAGE: &str = "Product Deleted Successfully";

/// `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One page of a listing. `page` and `limit` are the values actually applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse {
    pub data: Vec<Product>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteMessage {
    pub message: String,
}

#[derive(Clone)]
pub struct ProductService {
    client: ProductClient,
}

impl ProductService {
    pub fn new(client: ProductClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, query: ProductQuery) -> Result<ListResponse, ProductError> {
        let snapshot = self.client.list().await?;
        let page = query::apply(snapshot, &query);

        Ok(ListResponse {
            data: page.items,
            page: query.page,
            limit: query.limit,
            total: page.total,
        })
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Result<Envelope<Product>, ProductError> {
        self.client
            .get(id)
            .await?
            .map(Envelope::new)
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, params: ProductCreate) -> Result<Envelope<Product>, ProductError> {
        let product = self.client.create_product(params).await?;
        info!(id = %product.id, "Product created");
        Ok(Envelope::new(product))
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Envelope<Product>, ProductError> {
        let product = self.client.update_product(id, update).await?;
        info!(%id, "Product updated");
        Ok(Envelope::new(product))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Envelope<DeleteMessage>, ProductError> {
        self.client.delete(id).await?;
        info!(%id, "Product deleted");
        Ok(Envelope::new(DeleteMessage {
            message: DELETED_MESSAGE.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{SortField, SortOrder};
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;

    fn create(name: &str, quantity: f64, price: f64) -> ProductCreate {
        ProductCreate {
            name: name.to_string(),
            quantity,
            price,
            description: format!("About {name}"),
            category: "Misc".to_string(),
        }
    }

    fn running_service() -> ProductService {
        let (actor, client) = crate::product_actor::new(16);
        tokio::spawn(actor.run(()));
        ProductService::new(client)
    }

    #[tokio::test]
    async fn test_created_product_can_be_fetched() {
        let service = running_service();
        let params = create("Desk", 1.0, 250.0);

        let created = service.create(params.clone()).await.unwrap().data;
        let fetched = service.get(created.id).await.unwrap().data;

        assert_eq!(fetched, Product::new(created.id, params));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_not_found() {
        let service = running_service();
        let id = ProductId::generate();
        assert_eq!(service.get(id).await, Err(ProductError::NotFound(id)));
    }

    #[tokio::test]
    async fn test_partial_update_changes_only_supplied_fields() {
        let service = running_service();
        let created = service.create(create("Chair", 4.0, 80.0)).await.unwrap().data;

        let updated = service
            .update(
                created.id,
                ProductUpdate {
                    name: Some("Armchair".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .data;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Armchair");
        assert_eq!(updated.quantity, created.quantity);
        assert_eq!(updated.price, created.price);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.category, created.category);
        assert_eq!(service.get(created.id).await.unwrap().data, updated);
    }

    #[tokio::test]
    async fn test_update_missing_product_does_not_mutate() {
        let service = running_service();
        let existing = service.create(create("Shelf", 2.0, 40.0)).await.unwrap().data;
        let missing = ProductId::generate();

        let result = service
            .update(
                missing,
                ProductUpdate {
                    price: Some(1.0),
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(result, Err(ProductError::NotFound(missing)));

        let listing = service.list(ProductQuery::default()).await.unwrap();
        assert_eq!(listing.data, vec![existing]);
    }

    #[tokio::test]
    async fn test_delete_removes_product() {
        let service = running_service();
        let created = service.create(create("Rug", 1.0, 60.0)).await.unwrap().data;

        let deleted = service.delete(created.id).await.unwrap();
        assert_eq!(deleted.data.message, DELETED_MESSAGE);
        assert_eq!(
            service.get(created.id).await,
            Err(ProductError::NotFound(created.id))
        );
        assert_eq!(
            service.delete(created.id).await,
            Err(ProductError::NotFound(created.id))
        );
    }

    #[tokio::test]
    async fn test_list_reports_effective_paging_and_filtered_total() {
        let service = running_service();
        for (name, price) in [("Widget A", 30.0), ("Gadget B", 10.0), ("widget C", 20.0)] {
            service.create(create(name, 1.0, price)).await.unwrap();
        }

        let query = ProductQuery::from_raw(
            Some("widget"),
            Some(SortField::Price),
            Some(SortOrder::Asc),
            Some("1"),
            Some("0"),
        );
        let listing = service.list(query).await.unwrap();

        let names: Vec<&str> = listing.data.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["widget C", "Widget A"]);
        assert_eq!(listing.page, 1);
        assert_eq!(listing.limit, 10);
        assert_eq!(listing.total, 2);
    }

    #[tokio::test]
    async fn test_actor_failure_surfaces_as_communication_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_err(FrameworkError::ActorDropped);
        let service = ProductService::new(ProductClient::new(mock.client()));

        let result = service.list(ProductQuery::default()).await;
        assert!(matches!(
            result,
            Err(ProductError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[test]
    fn test_envelopes_serialize_with_data_key() {
        let body = serde_json::to_value(Envelope::new(DeleteMessage {
            message: DELETED_MESSAGE.to_string(),
        }))
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "data": { "message": "Product Deleted Successfully" } })
        );
    }
}
