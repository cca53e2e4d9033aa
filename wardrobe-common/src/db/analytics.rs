//! Wardrobe usage and composition queries

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use super::{decode_timestamp, encode_timestamp};
use crate::Result;

/// An item ranked by how often it was worn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WornItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub times_worn: i64,
    pub image_url: Option<String>,
}

/// An item not worn since a cutoff, or never worn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnusedItem {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub last_worn: Option<DateTime<Utc>>,
    pub image_url: Option<String>,
}

/// Most worn items first; ties keep insertion order
pub async fn most_worn(pool: &SqlitePool, user_id: i64, limit: i64) -> Result<Vec<WornItem>> {
    let rows = sqlx::query_as::<_, (i64, String, String, i64, Option<String>)>(
        r#"
        SELECT id, name, category, times_worn, image_url
        FROM clothing_items
        WHERE user_id = ?
        ORDER BY times_worn DESC, id ASC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, category, times_worn, image_url)| WornItem {
            id,
            name,
            category,
            times_worn,
            image_url,
        })
        .collect())
}

/// Items last worn before `cutoff` or never worn
pub async fn unused_items(
    pool: &SqlitePool,
    user_id: i64,
    cutoff: DateTime<Utc>,
) -> Result<Vec<UnusedItem>> {
    let rows = sqlx::query_as::<_, (i64, String, String, Option<String>, Option<String>)>(
        r#"
        SELECT id, name, category, last_worn, image_url
        FROM clothing_items
        WHERE user_id = ? AND (last_worn IS NULL OR last_worn < ?)
        ORDER BY id ASC
        "#,
    )
    .bind(user_id)
    .bind(encode_timestamp(cutoff))
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|(id, name, category, last_worn, image_url)| {
            Ok(UnusedItem {
                id,
                name,
                category,
                last_worn: last_worn.as_deref().map(decode_timestamp).transpose()?,
                image_url,
            })
        })
        .collect()
}

/// Item count per primary color; items without a color are skipped
pub async fn color_distribution(pool: &SqlitePool, user_id: i64) -> Result<BTreeMap<String, i64>> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT color_primary, COUNT(*)
        FROM clothing_items
        WHERE user_id = ? AND color_primary IS NOT NULL AND color_primary != ''
        GROUP BY color_primary
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}

/// Item count per category
pub async fn category_breakdown(pool: &SqlitePool, user_id: i64) -> Result<BTreeMap<String, i64>> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        "SELECT category, COUNT(*) FROM clothing_items WHERE user_id = ? GROUP BY category",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}
