//! wardrobe-api library - HTTP service over the wardrobe store
//!
//! Item CRUD, outfit generation, wardrobe analytics and weather advice.

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use wardrobe_common::config::ServerConfig;

pub mod api;
pub mod services;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// User assumed when a request names none
    pub default_user_id: i64,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, default_user_id: i64) -> Self {
        Self { db, default_user_id }
    }

    pub fn from_config(db: SqlitePool, config: &ServerConfig) -> Self {
        Self::new(db, config.default_user_id)
    }
}

/// Build application router with permissive CORS
pub fn build_router(state: AppState) -> Router {
    build_router_with_cors(state, cors_layer(&[]))
}

/// Build application router with the given CORS policy
pub fn build_router_with_cors(state: AppState, cors: CorsLayer) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/api/items", get(api::list_items).post(api::create_item))
        .route(
            "/api/items/:id",
            get(api::get_item).put(api::update_item).delete(api::delete_item),
        )
        .route("/api/items/:id/wear", post(api::record_wear))
        .route("/api/outfits/generate", post(api::generate_outfits))
        .route("/api/analytics/wardrobe", get(api::wardrobe_analytics))
        .route("/api/weather/advice", post(api::weather_advice));

    Router::new()
        .merge(api)
        .merge(api::health_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for a list of allowed origins.
///
/// An empty list or `*` allows any origin without credentials; otherwise
/// only the listed origins are allowed, with credentials.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(api::USER_ID_HEADER)])
        .allow_credentials(true)
}
