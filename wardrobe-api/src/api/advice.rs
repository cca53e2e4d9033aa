//! Weather advice endpoint

use axum::Json;
use wardrobe_common::advice::{self, WeatherAdvice};
use wardrobe_common::WeatherReading;

/// POST /api/weather/advice
///
/// Advice for a reading the caller already has; no weather service is
/// contacted.
pub async fn weather_advice(Json(reading): Json<WeatherReading>) -> Json<WeatherAdvice> {
    Json(advice::weather_advice(&reading))
}
