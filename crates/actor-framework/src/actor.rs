//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the entity store and
//! processes requests against it one at a time. It is the "Server" side of the Actor Model.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::EntityStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Boxed id generator handed to the actor at construction.
pub type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct owns the state (`store`) and the receiver end of the channel. Messages are
/// processed *sequentially*, so the store needs no `Mutex`: at most one request reads or
/// mutates it at any moment, and every read observes every mutation sent before it.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client`.
/// 2.  **Seed**: optionally [`load`](ResourceActor::load) persisted records.
/// 3.  **Run**: spawn `actor.run(context)`; its output is the final collection.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteUpdate(String);
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = String;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, Self::Error> {
///         Ok(Self { id, text })
///     }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = update.0;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (mut actor, client) = ResourceActor::<Note>::new(10, || 7);
///     actor.load(vec![Note { id: 1, text: "persisted".into() }]);
///     let handle = tokio::spawn(actor.run(()));
///
///     let created = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(created.id, 7);
///
///     drop(client);
///     let remaining = handle.await.unwrap();
///     assert_eq!(remaining.len(), 2);
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: generate an id, build the entity, run `on_create`, store it, reply with it.
/// * **Get**: reply with a clone of the entity, or `None`.
/// * **List**: reply with a snapshot of every entity.
/// * **Update**: clone the entity, run `on_update` on the clone, store it on success.
/// * **Delete**: run `on_delete`, remove the entity, reply with it.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: EntityStore<T>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the MPSC channel. When it is full, client calls wait.
    /// * `next_id` - Produces the id for every `Create`. Ids must not repeat.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: EntityStore::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Replaces the collection with `records` before the actor starts.
    ///
    /// Returns the number of entities now held.
    pub fn load(&mut self, records: Vec<T>) -> usize {
        let size = self.store.load(records);
        info!(entity_type = entity_type::<T>(), size, "Loaded");
        size
    }

    /// Runs the event loop until every client is dropped.
    ///
    /// Returns the final collection, so the caller can persist it knowing that no request
    /// can reach the store any more.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) -> Vec<T> {
        let entity_type = entity_type::<T>();
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            self.handle(msg, &context, entity_type).await;
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
        self.store.dump_all()
    }

    async fn handle(&mut self, msg: ResourceRequest<T>, context: &T::Context, entity_type: &str) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let id = (self.next_id)();

                let mut item = match T::from_create_params(id.clone(), params) {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(entity_type, error = %e, "Create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        return;
                    }
                };
                if let Err(e) = item.on_create(context).await {
                    warn!(entity_type, error = %e, "on_create failed");
                    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                    return;
                }
                self.store.put(id.clone(), item.clone());
                info!(entity_type, %id, size = self.store.len(), "Created");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::Get { id, respond_to } => {
                let item = self.store.get(&id).cloned();
                debug!(entity_type, %id, found = item.is_some(), "Get");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::List { respond_to } => {
                let items = self.store.snapshot_all();
                debug!(entity_type, size = items.len(), "List");
                let _ = respond_to.send(Ok(items));
            }
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            } => {
                debug!(entity_type, %id, ?update, "Update");
                let Some(mut item) = self.store.get(&id).cloned() else {
                    warn!(entity_type, %id, "Not found");
                    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    return;
                };
                if let Err(e) = item.on_update(update, context).await {
                    warn!(entity_type, %id, error = %e, "Update failed");
                    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                    return;
                }
                self.store.put(id.clone(), item.clone());
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::Delete { id, respond_to } => {
                debug!(entity_type, %id, "Delete");
                let Some(item) = self.store.get(&id) else {
                    warn!(entity_type, %id, "Not found");
                    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    return;
                };
                if let Err(e) = item.on_delete(context).await {
                    warn!(entity_type, %id, error = %e, "on_delete failed");
                    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                    return;
                }
                let removed = self.store.remove(&id);
                info!(entity_type, %id, size = self.store.len(), "Deleted");
                let _ = respond_to.send(removed.ok_or(FrameworkError::NotFound(id.to_string())));
            }
        }
    }
}

/// Short type name for log fields ("Product" instead of "inventory::model::product::Product").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
