//! # Wardrobe Common Library
//!
//! Shared code for the wardrobe service including:
//! - Clothing item and weather models
//! - Outfit selection and fashion rules
//! - Weather-based dressing advice
//! - SQLite storage for wardrobe items and usage analytics
//! - Configuration loading

pub mod advice;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod outfit;

pub use error::{Error, Result};
pub use models::{ClothingItem, NewClothingItem, WeatherReading};
pub use outfit::{generate, Outfit, OutfitRequest};
