//! HTTP API handlers for wardrobe-api

pub mod advice;
pub mod analytics;
pub mod error;
pub mod health;
pub mod items;
pub mod outfits;
pub mod user;

pub use advice::weather_advice;
pub use analytics::wardrobe_analytics;
pub use error::ApiError;
pub use health::health_routes;
pub use items::{create_item, delete_item, get_item, list_items, record_wear, update_item};
pub use outfits::generate_outfits;
pub use user::{UserId, USER_ID_HEADER};
