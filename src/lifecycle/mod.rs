//! Runtime orchestration and lifecycle management.
//!
//! - [`InventorySystem`] loads the persisted collection, runs the product actor and
//!   flushes the collection back to disk on shutdown.
//! - [`setup_tracing`] initializes the tracing/logging infrastructure.

mod inventory_system;

pub use actor_framework::tracing::setup_tracing;
pub use inventory_system::*;
