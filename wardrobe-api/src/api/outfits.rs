//! Outfit generation endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use wardrobe_common::db::items;
use wardrobe_common::outfit::{self, Outfit, OutfitRequest, DEFAULT_OCCASION, DEFAULT_OUTFIT_LIMIT};
use wardrobe_common::{ClothingItem, WeatherReading};

use super::{ApiError, UserId};
use crate::AppState;

/// Upper bound on outfits per request
pub const MAX_OUTFIT_LIMIT: usize = 20;

/// Body of POST /api/outfits/generate. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    pub occasion: Option<String>,
    /// Kept loose: anything but an object with a numeric temperature
    /// disables weather filtering
    pub weather: Option<serde_json::Value>,
    pub limit: Option<usize>,
}

impl GenerateRequest {
    pub fn into_outfit_request(self) -> OutfitRequest {
        let occasion = self
            .occasion
            .filter(|o| !o.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OCCASION.to_string());
        let limit = self
            .limit
            .unwrap_or(DEFAULT_OUTFIT_LIMIT)
            .min(MAX_OUTFIT_LIMIT);

        OutfitRequest {
            occasion,
            weather: self.weather.as_ref().and_then(WeatherReading::from_json),
            limit,
        }
    }
}

fn run_generation(items: &[ClothingItem], request: &OutfitRequest) -> Vec<Outfit> {
    let mut rng = rand::thread_rng();
    outfit::generate(items, request, &mut rng)
}

/// POST /api/outfits/generate
pub async fn generate_outfits(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(body): Json<GenerateRequest>,
) -> Result<Json<Vec<Outfit>>, ApiError> {
    let request = body.into_outfit_request();
    let wardrobe = items::list_items(&state.db, user_id).await?;

    let outfits = run_generation(&wardrobe, &request);
    info!(
        user_id,
        occasion = %request.occasion,
        temperature = ?request.weather.as_ref().map(|w| w.temperature),
        wardrobe_size = wardrobe.len(),
        outfits = outfits.len(),
        "Generated outfits"
    );

    Ok(Json(outfits))
}
