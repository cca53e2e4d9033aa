//! Clothing item queries
//!
//! Every query is scoped to one user; an item owned by someone else is
//! reported as not found.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::{decode_timestamp, encode_timestamp};
use crate::models::{ClothingItem, NewClothingItem};
use crate::{Error, Result};

const ITEM_COLUMNS: &str = "id, user_id, name, category, subcategory, color_primary, \
     color_secondary, pattern, style, season, image_url, brand, times_worn, last_worn, created_at";

fn item_from_row(row: &SqliteRow) -> Result<ClothingItem> {
    let season: String = row.try_get("season")?;
    let last_worn: Option<String> = row.try_get("last_worn")?;
    let created_at: String = row.try_get("created_at")?;

    Ok(ClothingItem {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        subcategory: row.try_get("subcategory")?,
        color_primary: row.try_get("color_primary")?,
        color_secondary: row.try_get("color_secondary")?,
        pattern: row.try_get("pattern")?,
        style: row.try_get("style")?,
        season: serde_json::from_str(&season)?,
        image_url: row.try_get("image_url")?,
        brand: row.try_get("brand")?,
        times_worn: row.try_get("times_worn")?,
        last_worn: last_worn.as_deref().map(decode_timestamp).transpose()?,
        created_at: decode_timestamp(&created_at)?,
    })
}

fn not_found(id: i64) -> Error {
    Error::NotFound(format!("clothing item {}", id))
}

/// All of a user's items, newest first
pub async fn list_items(pool: &SqlitePool, user_id: i64) -> Result<Vec<ClothingItem>> {
    let sql = format!(
        "SELECT {} FROM clothing_items WHERE user_id = ? ORDER BY created_at DESC, id DESC",
        ITEM_COLUMNS
    );
    let rows = sqlx::query(&sql).bind(user_id).fetch_all(pool).await?;

    rows.iter().map(item_from_row).collect()
}

pub async fn get_item(pool: &SqlitePool, user_id: i64, id: i64) -> Result<ClothingItem> {
    let sql = format!(
        "SELECT {} FROM clothing_items WHERE id = ? AND user_id = ?",
        ITEM_COLUMNS
    );
    let row = sqlx::query(&sql)
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(id))?;

    item_from_row(&row)
}

/// Validate and store a new item, returning its id
pub async fn insert_item(pool: &SqlitePool, user_id: i64, item: NewClothingItem) -> Result<i64> {
    let item = item.validate()?;
    let season = serde_json::to_string(&item.season)?;

    let result = sqlx::query(
        r#"
        INSERT INTO clothing_items
            (user_id, name, category, subcategory, color_primary, color_secondary,
             pattern, style, season, image_url, brand, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(&item.name)
    .bind(&item.category)
    .bind(&item.subcategory)
    .bind(&item.color_primary)
    .bind(&item.color_secondary)
    .bind(&item.pattern)
    .bind(&item.style)
    .bind(&season)
    .bind(&item.image_url)
    .bind(&item.brand)
    .bind(encode_timestamp(Utc::now()))
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    debug!(user_id, id, category = %item.category, "Inserted clothing item");
    Ok(id)
}

/// Replace an item's descriptive fields. Usage counters are kept.
pub async fn update_item(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    item: NewClothingItem,
) -> Result<ClothingItem> {
    let item = item.validate()?;
    let season = serde_json::to_string(&item.season)?;

    let result = sqlx::query(
        r#"
        UPDATE clothing_items
        SET name = ?, category = ?, subcategory = ?, color_primary = ?, color_secondary = ?,
            pattern = ?, style = ?, season = ?, image_url = ?, brand = ?
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(&item.name)
    .bind(&item.category)
    .bind(&item.subcategory)
    .bind(&item.color_primary)
    .bind(&item.color_secondary)
    .bind(&item.pattern)
    .bind(&item.style)
    .bind(&season)
    .bind(&item.image_url)
    .bind(&item.brand)
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    get_item(pool, user_id, id).await
}

pub async fn delete_item(pool: &SqlitePool, user_id: i64, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM clothing_items WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    debug!(user_id, id, "Deleted clothing item");
    Ok(())
}

/// Count one wear of an item at `at`
pub async fn record_wear(
    pool: &SqlitePool,
    user_id: i64,
    id: i64,
    at: DateTime<Utc>,
) -> Result<ClothingItem> {
    let result = sqlx::query(
        "UPDATE clothing_items SET times_worn = times_worn + 1, last_worn = ? \
         WHERE id = ? AND user_id = ?",
    )
    .bind(encode_timestamp(at))
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    get_item(pool, user_id, id).await
}
