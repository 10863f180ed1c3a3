//! In-memory store for orders

use super::model::Order;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory store for Order entities
///
/// Ids are issued by an atomic counter starting at 1.
#[derive(Clone)]
pub struct OrderStore {
    data: Arc<RwLock<HashMap<u64, Order>>>,
    next_id: Arc<AtomicU64>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Store a validated order, assigning it the next id
    pub fn add(&self, mut order: Order) -> Order {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        order.id = Some(id);
        self.data.write().unwrap().insert(id, order.clone());
        order
    }

    pub fn get(&self, id: u64) -> Option<Order> {
        self.data.read().unwrap().get(&id).cloned()
    }

    /// All orders sorted by id
    pub fn list(&self) -> Vec<Order> {
        let mut orders: Vec<Order> = self.data.read().unwrap().values().cloned().collect();
        orders.sort_by_key(|o| o.id);
        orders
    }

    /// Replace an existing order; None if the id is unknown
    pub fn update(&self, id: u64, order: Order) -> Option<Order> {
        let mut data = self.data.write().unwrap();
        if !data.contains_key(&id) {
            return None;
        }
        data.insert(id, order.clone());
        Some(order)
    }

    pub fn delete(&self, id: u64) -> Option<Order> {
        self.data.write().unwrap().remove(&id)
    }

    pub fn len(&self) -> usize {
        self.data.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().unwrap().is_empty()
    }
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::model::{CustomerDraft, OrderDraft, OrderItemDraft};
    use std::collections::HashMap as PriceMap;

    fn sample_order() -> Order {
        let menu: PriceMap<u64, f64> = PriceMap::from([(1u64, 9.5)]);
        Order::validate(
            OrderDraft {
                customer: CustomerDraft {
                    name: "Asha Rao".to_string(),
                    email: "asha@example.com".to_string(),
                    phone: "9876543210".to_string(),
                },
                items: vec![OrderItemDraft {
                    item_id: 1,
                    quantity: 2,
                }],
                status: None,
            },
            &menu,
        )
        .expect("valid order")
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = OrderStore::new();
        assert_eq!(store.add(sample_order()).id, Some(1));
        assert_eq!(store.add(sample_order()).id, Some(2));
    }

    #[test]
    fn test_list_is_sorted_by_id() {
        let store = OrderStore::new();
        for _ in 0..5 {
            store.add(sample_order());
        }
        let ids: Vec<_> = store.list().into_iter().map(|o| o.id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_and_delete() {
        let store = OrderStore::new();
        let stored = store.add(sample_order());
        let id = stored.id.unwrap();
        assert!(store.get(id).is_some());
        assert!(store.delete(id).is_some());
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let store = OrderStore::new();
        assert!(store.update(7, sample_order()).is_none());
    }
}
