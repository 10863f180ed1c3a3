//! Order, customer, and order-item entities with validation and pricing

use crate::core::error::{BistroResult, ValidationError};
use crate::core::validation::{filters, validators};
use crate::menu::MenuLookup;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Closed set of order statuses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Wire-form names accepted for the status field
    pub const ALLOWED: [&'static str; 5] =
        ["pending", "preparing", "ready", "delivered", "cancelled"];

    /// Parse a wire-form status name, reporting the allowed values on failure
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(ValidationError::field(
                "status",
                format!("must be one of {:?} (value: {})", OrderStatus::ALLOWED, other),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw payload for a customer
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// A validated customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Customer {
    /// Validate raw fields and construct the customer
    pub fn validate(draft: CustomerDraft) -> BistroResult<Self> {
        let name = filters::trim(&draft.name);
        validators::string_length("name", &name, 3, 100)?;

        let phone = filters::trim(&draft.phone);
        validators::exact_digits("phone", &phone, 10)?;

        Ok(Customer {
            name,
            email: draft.email,
            phone,
        })
    }
}

/// Raw payload for one order line
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemDraft {
    pub item_id: u64,
    pub quantity: i64,
}

/// A validated order line referencing a menu item by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub item_id: u64,
    pub quantity: u32,
}

impl OrderItem {
    /// Validate raw fields and construct the line
    pub fn validate(draft: OrderItemDraft) -> BistroResult<Self> {
        validators::range_i64("quantity", draft.quantity, 1, i64::from(u32::MAX))?;
        Ok(OrderItem {
            item_id: draft.item_id,
            quantity: draft.quantity as u32,
        })
    }
}

/// Raw payload for creating an order
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDraft {
    pub customer: CustomerDraft,
    pub items: Vec<OrderItemDraft>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated order
///
/// Constructed only through [`Order::validate`]; the item list is never
/// empty and the customer always satisfies its constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the order store; None until the order is stored
    pub id: Option<u64>,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Validate raw fields and construct the order
    ///
    /// The menu lookup is consulted so that references to unknown item ids
    /// are reported at construction time; they do not fail validation, but
    /// such lines contribute zero to the order total.
    pub fn validate(draft: OrderDraft, menu: &impl MenuLookup) -> BistroResult<Self> {
        let customer = Customer::validate(draft.customer)?;

        if draft.items.is_empty() {
            return Err(ValidationError::cross_field(
                "empty_order",
                "order must contain at least one item",
            )
            .into());
        }

        let items = draft
            .items
            .into_iter()
            .map(OrderItem::validate)
            .collect::<BistroResult<Vec<_>>>()?;

        let status = match draft.status {
            Some(raw) => OrderStatus::parse(&filters::lowercase(&filters::trim(&raw)))?,
            None => OrderStatus::Pending,
        };

        for item in &items {
            if menu.price_of(item.item_id).is_none() {
                warn!(
                    item_id = item.item_id,
                    "order references an unknown menu item; it will not contribute to the total"
                );
            }
        }

        let now = Utc::now();
        Ok(Order {
            id: None,
            customer,
            items,
            status,
            created_at: now,
            updated_at: now,
        })
    }

    /// Total price of the order: Σ price × quantity, rounded to 2 decimals
    ///
    /// Lines whose item id is absent from the menu contribute zero.
    pub fn total_price(&self, menu: &impl MenuLookup) -> f64 {
        let mut total = 0.0;
        for item in &self.items {
            match menu.price_of(item.item_id) {
                Some(price) => total += price * f64::from(item.quantity),
                None => {
                    warn!(
                        item_id = item.item_id,
                        "menu item missing during total computation; contributing zero"
                    );
                }
            }
        }
        filters::round_decimals(total, 2)
    }

    /// Refresh the update timestamp after a mutation
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Response shape embedding the computed total alongside the order
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub total_price: f64,
}

impl OrderView {
    pub fn from_order(order: Order, menu: &impl MenuLookup) -> Self {
        let total_price = order.total_price(menu);
        Self { order, total_price }
    }
}
