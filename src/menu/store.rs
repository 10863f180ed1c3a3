//! In-memory menu store and the lookup seam used by order pricing

use super::model::FoodItem;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Read-only price lookup collaborator
///
/// Order total computation depends on this trait rather than on a concrete
/// store, so the collaborator can be swapped or mocked in tests.
pub trait MenuLookup: Send + Sync {
    /// Price of the item with the given id, or None if absent
    fn price_of(&self, item_id: u64) -> Option<f64>;
}

/// In-memory store for menu items
///
/// Entries keep insertion order so `/menu` listings are deterministic.
/// Ids are issued by an atomic counter starting at 1.
#[derive(Clone)]
pub struct MenuStore {
    data: Arc<RwLock<IndexMap<u64, FoodItem>>>,
    next_id: Arc<AtomicU64>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(IndexMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Store a validated item, assigning it the next id
    pub fn add(&self, mut item: FoodItem) -> FoodItem {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        item.id = Some(id);
        self.data.write().unwrap().insert(id, item.clone());
        item
    }

    pub fn get(&self, id: u64) -> Option<FoodItem> {
        self.data.read().unwrap().get(&id).cloned()
    }

    pub fn list(&self) -> Vec<FoodItem> {
        self.data.read().unwrap().values().cloned().collect()
    }

    /// Replace an existing item, keeping its id; None if the id is unknown
    pub fn update(&self, id: u64, mut item: FoodItem) -> Option<FoodItem> {
        let mut data = self.data.write().unwrap();
        if !data.contains_key(&id) {
            return None;
        }
        item.id = Some(id);
        data.insert(id, item.clone());
        Some(item)
    }

    pub fn delete(&self, id: u64) -> Option<FoodItem> {
        self.data.write().unwrap().shift_remove(&id)
    }

    pub fn len(&self) -> usize {
        self.data.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().unwrap().is_empty()
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuLookup for MenuStore {
    fn price_of(&self, item_id: u64) -> Option<f64> {
        self.data.read().unwrap().get(&item_id).map(|item| item.price)
    }
}

/// Plain map lookup, handy as a test double
impl MenuLookup for HashMap<u64, f64> {
    fn price_of(&self, item_id: u64) -> Option<f64> {
        self.get(&item_id).copied()
    }
}
