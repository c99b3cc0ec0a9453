//! Central storage for card instances
//!
//! Provides id allocation and fast lookup. Instances are created at deck
//! build time and persist for the whole match; they move between zones
//! but are never removed from the store.

use crate::core::{CardId, CardInstance};
use crate::{EngineError, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceStore {
    instances: FxHashMap<CardId, CardInstance>,
    next_id: u32,
}

impl InstanceStore {
    pub fn new() -> Self {
        InstanceStore {
            instances: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Allocate the next unique card id
    pub fn next_id(&mut self) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn insert(&mut self, instance: CardInstance) {
        self.instances.insert(instance.id, instance);
    }

    pub fn get(&self, id: CardId) -> Result<&CardInstance> {
        self.instances
            .get(&id)
            .ok_or(EngineError::CardNotFound(id.as_u32()))
    }

    pub fn get_mut(&mut self, id: CardId) -> Result<&mut CardInstance> {
        self.instances
            .get_mut(&id)
            .ok_or(EngineError::CardNotFound(id.as_u32()))
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.instances.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CardId, &CardInstance)> {
        self.instances.iter()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for InstanceStore {
    fn default() -> Self {
        Self::new()
    }
}
