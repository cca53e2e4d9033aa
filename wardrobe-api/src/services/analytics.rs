//! Wardrobe analytics report
//!
//! Combines usage and composition queries with simple gap heuristics.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;
use tracing::debug;
use wardrobe_common::db::analytics::{self, UnusedItem, WornItem};
use wardrobe_common::{Error, Result};

pub const DEFAULT_MOST_WORN_LIMIT: i64 = 10;
pub const DEFAULT_UNUSED_DAYS: i64 = 30;

/// Something the wardrobe is short of; higher priority matters more
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WardrobeGap {
    pub reason: String,
    pub priority: u8,
}

impl WardrobeGap {
    fn new(reason: &str, priority: u8) -> Self {
        Self {
            reason: reason.to_string(),
            priority,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WardrobeReport {
    pub most_worn: Vec<WornItem>,
    pub unused_items: Vec<UnusedItem>,
    pub color_distribution: BTreeMap<String, i64>,
    pub category_breakdown: BTreeMap<String, i64>,
    pub gaps: Vec<WardrobeGap>,
}

/// Start of the unused window, or `InvalidInput` when it falls outside the
/// representable date range
pub fn unused_cutoff(now: DateTime<Utc>, unused_days: i64) -> Result<DateTime<Utc>> {
    Duration::try_days(unused_days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| Error::InvalidInput(format!("unused_days {} is out of range", unused_days)))
}

/// Gaps implied by a category breakdown
pub fn identify_gaps(categories: &BTreeMap<String, i64>) -> Vec<WardrobeGap> {
    let count = |category: &str| categories.get(category).copied().unwrap_or(0);
    let mut gaps = Vec::new();

    if count("shoes") < 2 {
        gaps.push(WardrobeGap::new("Missing shoe variety", 5));
    }
    if count("jacket") < 1 {
        gaps.push(WardrobeGap::new("Missing outerwear", 4));
    }
    if count("shirt") < 3 && count("t-shirt") < 3 {
        gaps.push(WardrobeGap::new("Low on tops", 3));
    }

    gaps
}

pub async fn build_report(
    pool: &SqlitePool,
    user_id: i64,
    most_worn_limit: i64,
    unused_days: i64,
    now: DateTime<Utc>,
) -> Result<WardrobeReport> {
    let cutoff = unused_cutoff(now, unused_days)?;

    let most_worn = analytics::most_worn(pool, user_id, most_worn_limit).await?;
    let unused_items = analytics::unused_items(pool, user_id, cutoff).await?;
    let color_distribution = analytics::color_distribution(pool, user_id).await?;
    let category_breakdown = analytics::category_breakdown(pool, user_id).await?;
    let gaps = identify_gaps(&category_breakdown);

    debug!(
        user_id,
        unused = unused_items.len(),
        gaps = gaps.len(),
        "Built wardrobe report"
    );

    Ok(WardrobeReport {
        most_worn,
        unused_items,
        color_distribution,
        category_breakdown,
        gaps,
    })
}
