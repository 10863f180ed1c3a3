//! Orders domain: Customer, OrderItem, and Order entities, store, handlers

pub mod handlers;
pub mod model;
pub mod store;

pub use model::{
    Customer, CustomerDraft, Order, OrderDraft, OrderItem, OrderItemDraft, OrderStatus, OrderView,
};
pub use store::OrderStore;
