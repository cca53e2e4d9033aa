//! Clothing item endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::info;
use wardrobe_common::db::items;
use wardrobe_common::{ClothingItem, NewClothingItem};

use super::{ApiError, UserId};
use crate::AppState;

/// Acknowledgement for writes that return no item
#[derive(Debug, Serialize)]
pub struct ItemAck {
    pub id: i64,
    pub message: String,
}

/// GET /api/items
pub async fn list_items(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<Vec<ClothingItem>>, ApiError> {
    let items = items::list_items(&state.db, user_id).await?;
    Ok(Json(items))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(item): Json<NewClothingItem>,
) -> Result<Json<ItemAck>, ApiError> {
    let id = items::insert_item(&state.db, user_id, item).await?;
    info!(user_id, id, "Clothing item added");

    Ok(Json(ItemAck {
        id,
        message: "Item added successfully".to_string(),
    }))
}

/// GET /api/items/:id
pub async fn get_item(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i64>,
) -> Result<Json<ClothingItem>, ApiError> {
    let item = items::get_item(&state.db, user_id, id).await?;
    Ok(Json(item))
}

/// PUT /api/items/:id
pub async fn update_item(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i64>,
    Json(item): Json<NewClothingItem>,
) -> Result<Json<ClothingItem>, ApiError> {
    let item = items::update_item(&state.db, user_id, id, item).await?;
    info!(user_id, id, "Clothing item updated");
    Ok(Json(item))
}

/// DELETE /api/items/:id
pub async fn delete_item(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i64>,
) -> Result<Json<ItemAck>, ApiError> {
    items::delete_item(&state.db, user_id, id).await?;
    info!(user_id, id, "Clothing item deleted");

    Ok(Json(ItemAck {
        id,
        message: "Item deleted successfully".to_string(),
    }))
}

/// POST /api/items/:id/wear
///
/// Counts one wear now; feeds the most-worn and unused analytics.
pub async fn record_wear(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<i64>,
) -> Result<Json<ClothingItem>, ApiError> {
    let item = items::record_wear(&state.db, user_id, id, Utc::now()).await?;
    Ok(Json(item))
}
