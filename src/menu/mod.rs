//! Menu domain: the FoodItem entity, its store, and HTTP handlers

pub mod handlers;
pub mod model;
pub mod store;

pub use model::{FoodCategory, FoodItem, FoodItemDraft, FoodItemView, PriceCategory};
pub use store::{MenuLookup, MenuStore};
