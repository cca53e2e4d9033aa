//! Outfit generation
//!
//! Partitions a wardrobe into slots, picks one item per slot biased by
//! occasion and temperature, and filters the assembled outfits through a
//! small set of fashion rules.

pub mod rules;
pub mod selector;
pub mod slots;

use serde::{Deserialize, Serialize};

use crate::models::{ClothingItem, WeatherReading};

pub use rules::{check_outfit, is_valid_outfit, OutfitRejection};
pub use selector::{generate, select_item, OutfitAccumulator, Offer};
pub use slots::{Slot, WardrobeSlots};

/// Number of outfits generated when the caller does not ask for a count
pub const DEFAULT_OUTFIT_LIMIT: usize = 5;

/// Occasion used when the caller does not name one
pub const DEFAULT_OCCASION: &str = "casual";

/// Fixed suitability score attached to every outfit
pub const WEATHER_SUITABILITY: f64 = 1.0;

/// Inputs for one generation run
#[derive(Debug, Clone)]
pub struct OutfitRequest {
    pub occasion: String,
    pub weather: Option<WeatherReading>,
    pub limit: usize,
}

impl OutfitRequest {
    pub fn new(occasion: impl Into<String>) -> Self {
        Self {
            occasion: occasion.into(),
            weather: None,
            limit: DEFAULT_OUTFIT_LIMIT,
        }
    }

    pub fn with_weather(mut self, weather: WeatherReading) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for OutfitRequest {
    fn default() -> Self {
        Self::new(DEFAULT_OCCASION)
    }
}

/// A candidate outfit: at most one item per slot, in slot order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub items: Vec<ClothingItem>,
    pub occasion: String,
    pub weather_suitability: f64,
}

impl Outfit {
    pub fn new(occasion: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            occasion: occasion.into(),
            weather_suitability: WEATHER_SUITABILITY,
        }
    }
}
