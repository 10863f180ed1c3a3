//! Order HTTP handlers

use super::model::{Order, OrderDraft, OrderStatus, OrderView};
use crate::core::error::{BistroError, EntityError, RequestError};
use crate::core::validation::filters;
use crate::server::AppState;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, patch},
};
use serde::Deserialize;
use serde_json::{Value, json};

/// Body for a status transition
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Routes mounted under `/orders`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order).delete(delete_order))
        .route("/{id}/status", patch(update_status))
}

fn parse_id(id: &str) -> Result<u64, BistroError> {
    id.parse::<u64>().map_err(|_| {
        RequestError::InvalidEntityId { id: id.to_string() }.into()
    })
}

pub async fn list_orders(State(state): State<AppState>) -> Json<Value> {
    let orders: Vec<OrderView> = state
        .orders
        .list()
        .into_iter()
        .map(|order| OrderView::from_order(order, &state.menu))
        .collect();
    Json(json!({
        "orders": orders,
        "count": orders.len()
    }))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<OrderView>), BistroError> {
    let draft: OrderDraft = serde_json::from_value(payload)?;
    let order = Order::validate(draft, &state.menu)?;
    let order = state.orders.add(order);
    Ok((
        StatusCode::CREATED,
        Json(OrderView::from_order(order, &state.menu)),
    ))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>, BistroError> {
    let id = parse_id(&id)?;
    state
        .orders
        .get(id)
        .map(|order| Json(OrderView::from_order(order, &state.menu)))
        .ok_or_else(|| EntityError::not_found("order", id).into())
}

pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<OrderView>, BistroError> {
    let id = parse_id(&id)?;
    let update: StatusUpdate = serde_json::from_value(payload)?;
    let status = OrderStatus::parse(&filters::lowercase(&filters::trim(&update.status)))?;

    let mut order = state
        .orders
        .get(id)
        .ok_or_else(|| BistroError::from(EntityError::not_found("order", id)))?;
    order.status = status;
    order.touch();

    state
        .orders
        .update(id, order)
        .map(|order| Json(OrderView::from_order(order, &state.menu)))
        .ok_or_else(|| EntityError::not_found("order", id).into())
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, BistroError> {
    let id = parse_id(&id)?;
    state
        .orders
        .delete(id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| EntityError::not_found("order", id).into())
}
