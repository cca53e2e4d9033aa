//! Wardrobe analytics endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use super::{ApiError, UserId};
use crate::services::analytics::{self, WardrobeReport, DEFAULT_MOST_WORN_LIMIT, DEFAULT_UNUSED_DAYS};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default = "default_most_worn_limit")]
    pub most_worn_limit: i64,
    #[serde(default = "default_unused_days")]
    pub unused_days: i64,
}

fn default_most_worn_limit() -> i64 {
    DEFAULT_MOST_WORN_LIMIT
}

fn default_unused_days() -> i64 {
    DEFAULT_UNUSED_DAYS
}

/// GET /api/analytics/wardrobe
pub async fn wardrobe_analytics(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<WardrobeReport>, ApiError> {
    if query.most_worn_limit < 1 {
        return Err(ApiError::bad_request("most_worn_limit must be at least 1"));
    }
    if query.unused_days < 0 {
        return Err(ApiError::bad_request("unused_days must not be negative"));
    }

    let report = analytics::build_report(
        &state.db,
        user_id,
        query.most_worn_limit,
        query.unused_days,
        Utc::now(),
    )
    .await?;

    Ok(Json(report))
}
