//! Wardrobe data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Pattern label for plain garments
pub const PATTERN_SOLID: &str = "solid";
/// Pattern label for printed, striped or otherwise busy garments
pub const PATTERN_PATTERNED: &str = "patterned";
/// Season tag meaning "wearable in any season"
pub const SEASON_ALL: &str = "all";

fn default_pattern() -> String {
    PATTERN_SOLID.to_string()
}

fn default_season() -> Vec<String> {
    vec![SEASON_ALL.to_string()]
}

/// A stored clothing item owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    /// Free-form category such as "shirt", "jeans" or "jacket"
    pub category: String,
    pub subcategory: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Style label, matched against the requested occasion
    pub style: String,
    #[serde(default = "default_season")]
    pub season: Vec<String>,
    pub image_url: Option<String>,
    pub brand: Option<String>,
    #[serde(default)]
    pub times_worn: i64,
    pub last_worn: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
}

impl ClothingItem {
    /// Whether the item carries the `patterned` pattern label
    pub fn is_patterned(&self) -> bool {
        self.pattern == PATTERN_PATTERNED
    }

    /// Whether the item is tagged for the given season.
    ///
    /// An untagged item counts as `["all"]`.
    pub fn has_season(&self, season: &str) -> bool {
        if self.season.is_empty() {
            return season == SEASON_ALL;
        }
        self.season.iter().any(|s| s == season)
    }
}

impl Default for ClothingItem {
    fn default() -> Self {
        Self {
            id: 0,
            user_id: 0,
            name: String::new(),
            category: String::new(),
            subcategory: None,
            color_primary: None,
            color_secondary: None,
            pattern: default_pattern(),
            style: String::new(),
            season: default_season(),
            image_url: None,
            brand: None,
            times_worn: 0,
            last_worn: None,
            created_at: DateTime::<Utc>::default(),
        }
    }
}

/// Payload for creating or replacing a clothing item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClothingItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub color_primary: Option<String>,
    #[serde(default)]
    pub color_secondary: Option<String>,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    pub style: String,
    #[serde(default = "default_season")]
    pub season: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl NewClothingItem {
    /// Reject blank required fields and normalise the optional ones
    pub fn validate(mut self) -> Result<Self> {
        for (field, value) in [
            ("name", &self.name),
            ("category", &self.category),
            ("style", &self.style),
        ] {
            if value.trim().is_empty() {
                return Err(Error::InvalidInput(format!("{} must not be empty", field)));
            }
        }

        if self.pattern.trim().is_empty() {
            self.pattern = default_pattern();
        }
        self.season.retain(|s| !s.trim().is_empty());
        if self.season.is_empty() {
            self.season = default_season();
        }

        Ok(self)
    }
}

/// Current weather supplied with an outfit request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in °C
    #[serde(alias = "temp")]
    pub temperature: f64,
    #[serde(default)]
    pub condition: String,
}

impl WeatherReading {
    pub fn new(temperature: f64, condition: impl Into<String>) -> Self {
        Self {
            temperature,
            condition: condition.into(),
        }
    }

    /// Read a weather object leniently.
    ///
    /// Returns `None` unless `value` is an object carrying a numeric
    /// `temperature` (or `temp`). A non-string condition is ignored.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let temperature = object
            .get("temperature")
            .or_else(|| object.get("temp"))
            .and_then(serde_json::Value::as_f64)?;
        let condition = object
            .get("condition")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default();

        Some(Self::new(temperature, condition))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_defaults_when_fields_missing() {
        let item: ClothingItem = serde_json::from_value(json!({
            "id": 3,
            "user_id": 1,
            "name": "Oxford",
            "category": "shirt",
            "subcategory": null,
            "color_primary": "white",
            "color_secondary": null,
            "style": "formal",
            "image_url": null,
            "brand": null,
            "last_worn": null
        }))
        .unwrap();

        assert_eq!(item.pattern, PATTERN_SOLID);
        assert_eq!(item.season, vec!["all".to_string()]);
        assert_eq!(item.times_worn, 0);
    }

    #[test]
    fn test_empty_season_reads_as_all() {
        let item = ClothingItem {
            season: Vec::new(),
            ..Default::default()
        };
        assert!(item.has_season(SEASON_ALL));
        assert!(!item.has_season("summer"));
    }

    #[test]
    fn test_validate_rejects_blank_style() {
        let new_item = NewClothingItem {
            name: "Tee".to_string(),
            category: "t-shirt".to_string(),
            subcategory: None,
            color_primary: None,
            color_secondary: None,
            pattern: PATTERN_SOLID.to_string(),
            style: "  ".to_string(),
            season: Vec::new(),
            image_url: None,
            brand: None,
        };

        let err = new_item.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(msg) if msg.contains("style")));
    }

    #[test]
    fn test_validate_fills_defaults() {
        let new_item = NewClothingItem {
            name: "Tee".to_string(),
            category: "t-shirt".to_string(),
            subcategory: None,
            color_primary: Some("navy".to_string()),
            color_secondary: None,
            pattern: String::new(),
            style: "casual".to_string(),
            season: vec![" ".to_string()],
            image_url: None,
            brand: None,
        };

        let new_item = new_item.validate().unwrap();
        assert_eq!(new_item.pattern, PATTERN_SOLID);
        assert_eq!(new_item.season, vec!["all".to_string()]);
    }

    #[test]
    fn test_weather_from_json_accepts_temp_alias() {
        let reading = WeatherReading::from_json(&json!({ "temp": 12 })).unwrap();
        assert_eq!(reading.temperature, 12.0);
        assert_eq!(reading.condition, "");

        let reading =
            WeatherReading::from_json(&json!({ "temperature": 30.5, "condition": "Clear" }))
                .unwrap();
        assert_eq!(reading, WeatherReading::new(30.5, "Clear"));
    }

    #[test]
    fn test_weather_from_json_malformed_is_none() {
        assert!(WeatherReading::from_json(&json!({})).is_none());
        assert!(WeatherReading::from_json(&json!({ "temp": "cold" })).is_none());
        assert!(WeatherReading::from_json(&json!(null)).is_none());
        assert!(WeatherReading::from_json(&json!([18])).is_none());
    }
}
