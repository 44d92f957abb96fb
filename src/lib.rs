//! # Inventory
//!
//! A product inventory backend: create, read, update, delete, search, sort and paginate
//! product records that live in memory and are persisted to a JSON file.
//!
//! ## Architecture
//!
//! The product collection is owned by a single [`ResourceActor`](actor_framework::ResourceActor)
//! task. Every request reaches it as a message through a cloneable
//! [`ProductClient`](clients::ProductClient), so reads always observe every earlier write and
//! the collection needs no locks.
//!
//! ```text
//! http (axum) ──► service ──► ProductClient ══mpsc══► product actor (EntityStore)
//!                    │
//!                    └──► query (filter → sort → paginate over a snapshot)
//! ```
//!
//! ## Module Tour
//!
//! - [`model`]: the [`Product`](model::Product) record and its create/update payloads.
//! - [`product_actor`]: `ActorEntity` implementation and [`ProductError`](product_actor::ProductError).
//! - [`clients`]: the typed client wrapping `ResourceClient<Product>`.
//! - [`query`]: the stateless list pipeline.
//! - [`service`]: request-level operations and response envelopes.
//! - [`store`]: the JSON data file.
//! - [`http`]: routes, validation and error responses.
//! - [`lifecycle`]: startup load, shutdown flush and tracing setup.
//! - [`config`]: command-line and environment settings.
//!
//! ## Testing
//!
//! See [`actor_framework::mock`] for utilities to test clients without spawning full actors.

pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod query;
pub mod service;
pub mod store;
