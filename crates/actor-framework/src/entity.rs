//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must implement to be managed by the
//! generic [`ResourceActor`](crate::ResourceActor). It names the identifier, the create and
//! update DTOs, the injected context and the error type, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`).
//!
//! # Architecture Note
//! The actor loop is written *once* against this trait. A `Product` entity requires a
//! `ProductCreate` payload and you can't accidentally send it anything else: the associated
//! types make the compiler reject it.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! Both default to `Ok(())`. Only [`ActorEntity::on_update`] must be implemented, because
//! merging an update DTO into an entity is always entity-specific.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other actors. The `Context` type is injected
/// into every hook through `run()`, which lets dependencies be bound after construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g. a UUID newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per actor rather than one per message. Clients deal with a single
    /// error type, at the cost of every operation's signature admitting every variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this entity is keyed by.
    ///
    /// Used when a collection is loaded wholesale, where ids come from the records
    /// themselves instead of the actor's generator.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated id and the create payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Merge an update into the entity.
    ///
    /// The actor applies this to a copy and only stores the result when the hook succeeds,
    /// so a failing update leaves the stored entity untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
