//! Error types for the Product actor.

use crate::model::ProductId;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => match id.parse() {
                Ok(id) => ProductError::NotFound(id),
                Err(_) => ProductError::ActorCommunicationError(format!("Item not found: {id}")),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
