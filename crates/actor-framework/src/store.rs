//! # Entity Store
//!
//! The keyed collection owned by a [`ResourceActor`](crate::ResourceActor).
//!
//! Values iterate in insertion order. Overwriting an existing key keeps its position, and
//! removal closes the gap. Callers should not attach meaning to the order, but keeping it
//! stable makes snapshots (and therefore pagination over them) reproducible between calls.

use crate::entity::ActorEntity;
use std::collections::HashMap;

/// In-memory `id -> entity` map with a stable iteration order.
pub struct EntityStore<T: ActorEntity> {
    items: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Replaces the whole collection, keying each record by [`ActorEntity::id`].
    ///
    /// When two records share an id the later one wins, in the position of the first.
    /// Returns the number of distinct entities held afterwards.
    pub fn load(&mut self, records: Vec<T>) -> usize {
        self.items.clear();
        self.order.clear();
        for record in records {
            self.put(record.id().clone(), record);
        }
        self.len()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.get(id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

    /// Inserts or overwrites the entity at `id`.
    pub fn put(&mut self, id: T::Id, item: T) {
        if self.items.insert(id.clone(), item).is_none() {
            self.order.push(id);
        }
    }

    /// Removes the entity at `id`, returning it if it was present.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let removed = self.items.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    /// Clones every value, in insertion order.
    pub fn snapshot_all(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .cloned()
            .collect()
    }

    /// Consumes the store, yielding every value in insertion order.
    pub fn dump_all(mut self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.items.remove(id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
