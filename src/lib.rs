//! # Bistro
//!
//! A restaurant ordering API built around validated domain entities, plus a
//! customer segmentation pipeline for analyzing the customer base.
//!
//! ## Ordering core
//!
//! - **Validated entities**: [`menu::FoodItem`], [`orders::Customer`],
//!   [`orders::Order`] are constructed through explicit validation functions
//!   applied in a fixed order; a failing rule short-circuits construction
//!   with an error naming the violated rule. No partially valid entity ever
//!   exists.
//! - **Derived values**: price categories, dietary labels, and order totals
//!   are computed read-only from validated entities.
//! - **Injectable store**: the menu is accessed through the
//!   [`menu::MenuLookup`] trait so the collaborator can be swapped in tests.
//! - **Routing**: entities are exposed under `/menu` and `/orders` via axum.
//!
//! ## Segmentation pipeline
//!
//! Dataset loader → exploratory summarizer → feature selector → K-Means
//! clustering oracle → cluster profiler/visualizer. See [`segmentation`]
//! and the `bistro-segment` binary.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use bistro::prelude::*;
//!
//! let state = AppState::new();
//! let app = router(state);
//! // axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod menu;
pub mod orders;
pub mod segmentation;
pub mod server;

/// Common result type used by the segmentation pipeline and binaries
pub type Result<T> = anyhow::Result<T>;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Errors ===
    pub use crate::core::error::{
        BistroError, BistroResult, EntityError, RequestError, ValidationError,
    };

    // === Entities ===
    pub use crate::menu::{
        FoodCategory, FoodItem, FoodItemDraft, FoodItemView, MenuLookup, MenuStore, PriceCategory,
    };
    pub use crate::orders::{
        Customer, CustomerDraft, Order, OrderDraft, OrderItem, OrderStatus, OrderStore, OrderView,
    };

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
}
