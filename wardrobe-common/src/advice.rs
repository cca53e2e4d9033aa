//! Dressing advice derived from a weather reading

use serde::Serialize;

use crate::models::WeatherReading;

/// Human-readable advice plus item types worth reaching for
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeatherAdvice {
    pub temperature_advice: String,
    pub weather_advice: String,
    pub suggested_items: Vec<String>,
}

impl WeatherAdvice {
    fn suggest(&mut self, items: &[&str]) {
        self.suggested_items.extend(items.iter().map(|s| s.to_string()));
    }
}

pub fn weather_advice(reading: &WeatherReading) -> WeatherAdvice {
    let mut advice = WeatherAdvice::default();

    if reading.temperature > 25.0 {
        advice.temperature_advice = "It's hot! Wear lightweight, breathable fabrics.".to_string();
        advice.suggest(&["t-shirt", "shorts", "sundress", "sandals"]);
    } else if reading.temperature < 10.0 {
        advice.temperature_advice = "It's cold! Layer up with warm clothing.".to_string();
        advice.suggest(&["sweater", "jacket", "boots", "scarf"]);
    } else {
        advice.temperature_advice = "Mild weather - comfortable for most outfits.".to_string();
        advice.suggest(&["jeans", "long-sleeve shirt", "light jacket"]);
    }

    let condition = reading.condition.to_lowercase();
    if condition.contains("rain") {
        advice.weather_advice = "Rain expected - bring waterproof items.".to_string();
        advice.suggest(&["raincoat", "umbrella", "waterproof boots"]);
    } else if condition.contains("snow") {
        advice.weather_advice = "Snow expected - wear warm, waterproof items.".to_string();
        advice.suggest(&["winter coat", "snow boots", "hat", "gloves"]);
    } else if condition.contains("clear") {
        advice.weather_advice = "Clear skies - perfect for any outfit!".to_string();
    }

    advice
}
