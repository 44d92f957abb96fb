//! # Generic Messages
//!
//! The requests a `ResourceClient` sends to its `ResourceActor`, each carrying a oneshot
//! sender for the reply.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map onto the operations any keyed resource collection supports:
///
/// - **Create**: Uses [`ActorEntity::Create`] to build a new resource under a fresh id.
/// - **Get**: Fetches the current state of one resource by id.
/// - **List**: Snapshots every resource, in the store's iteration order.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Removes the resource.
///
/// The enum is generic over `T: ActorEntity`, so a `Product` actor only accepts `Product`
/// payloads.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}
