//! # Actor Framework
//!
//! Building blocks for owning a keyed collection of entities inside a single Tokio task and
//! reaching it through a cloneable, type-safe client. It is the **Actor Model** applied to a
//! **resource collection**: standard CRUD operations on one kind of resource, executed
//! strictly one at a time by the task that owns the state.
//!
//! ## Why an actor for a collection?
//!
//! A web server handles requests on many threads at once, but the collection must see at
//! most one mutator at a time, and a read must observe every write sent before it. Instead
//! of wrapping a map in a `Mutex` and remembering to take it around every read/modify pair,
//! the map lives inside one task and every operation is a message:
//!
//! - Isolated state (no shared memory, no locks)
//! - Sequential processing eliminates races between requests
//! - Shutdown is explicit: once every client is dropped, the actor returns its final state
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the domain type and how DTOs turn into it
//! 2. **Storage Layer** ([`EntityStore`]) - the ordered map the actor owns
//! 3. **Runtime Layer** ([`ResourceActor`]) - message processing
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Book {
//!     id: u32,
//!     title: String,
//! }
//!
//! #[derive(Debug)] struct BookCreate { title: String }
//! #[derive(Debug)] struct BookUpdate { title: Option<String> }
//! #[derive(Debug, thiserror::Error)] #[error("book error")] struct BookError;
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = u32;
//!     type Create = BookCreate;
//!     type Update = BookUpdate;
//!     type Context = ();
//!     type Error = BookError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: BookCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, title: params.title })
//!     }
//!
//!     async fn on_update(&mut self, update: BookUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(title) = update.title { self.title = title; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let counter = std::sync::atomic::AtomicU32::new(1);
//!     let next_id = move || counter.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
//!
//!     let (actor, client) = ResourceActor::<Book>::new(10, next_id);
//!     let handle = tokio::spawn(actor.run(()));
//!
//!     let book = client.create(BookCreate { title: "Dune".into() }).await.unwrap();
//!     let fetched = client.get(book.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.title, "Dune");
//!
//!     // Dropping the last client stops the actor and yields the final collection.
//!     drop(client);
//!     let books = handle.await.unwrap();
//!     assert_eq!(books.len(), 1);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted expectations, so the
//! code around a client can be tested without spawning an actor. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{IdGenerator, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::EntityStore;
