//! # REST Surface
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/product?search=&page=&limit=&sortBy=&order=` | 200 `{ data, page, limit, total }` |
//! | `GET` | `/product/{id}` | 200 `{ data }` |
//! | `POST` | `/product` | 201 `{ data }` |
//! | `PATCH` | `/product/{id}` | 200 `{ data }` |
//! | `DELETE` | `/product/{id}` | 200 `{ data: { message } }` |
//!
//! Failures are rendered by [`ApiError`]. Any origin may call the API (CORS `*`), so a
//! separately hosted frontend can reach it.

pub mod dto;
pub mod error;
mod handlers;

pub use error::ApiError;

use crate::service::ProductService;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub service: ProductService,
}

pub fn router(service: ProductService) -> Router {
    Router::new()
        .route(
            "/product",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/product/{id}",
            get(handlers::get_product)
                .patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .layer(CorsLayer::permissive())
        .with_state(AppState { service })
}
