//! Menu HTTP handlers

use super::model::{FoodItem, FoodItemDraft, FoodItemView};
use crate::core::error::{BistroError, EntityError, RequestError};
use crate::server::AppState;
use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde_json::{Value, json};

/// Routes mounted under `/menu`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}

fn parse_id(id: &str) -> Result<u64, BistroError> {
    id.parse::<u64>().map_err(|_| {
        RequestError::InvalidEntityId { id: id.to_string() }.into()
    })
}

pub async fn list_items(State(state): State<AppState>) -> Json<Value> {
    let items: Vec<FoodItemView> = state.menu.list().into_iter().map(FoodItemView::from).collect();
    Json(json!({
        "items": items,
        "count": items.len()
    }))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<FoodItemView>), BistroError> {
    let draft: FoodItemDraft = serde_json::from_value(payload)?;
    let item = FoodItem::validate(draft)?;
    let item = state.menu.add(item);
    Ok((StatusCode::CREATED, Json(item.into())))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FoodItemView>, BistroError> {
    let id = parse_id(&id)?;
    state
        .menu
        .get(id)
        .map(|item| Json(item.into()))
        .ok_or_else(|| EntityError::not_found("food_item", id).into())
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<FoodItemView>, BistroError> {
    let id = parse_id(&id)?;
    let draft: FoodItemDraft = serde_json::from_value(payload)?;
    let item = FoodItem::validate(draft)?;
    state
        .menu
        .update(id, item)
        .map(|item| Json(item.into()))
        .ok_or_else(|| EntityError::not_found("food_item", id).into())
}

pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, BistroError> {
    let id = parse_id(&id)?;
    state
        .menu
        .delete(id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| EntityError::not_found("food_item", id).into())
}
