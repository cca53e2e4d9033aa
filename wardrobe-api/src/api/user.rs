//! Caller identification
//!
//! There are no sessions: a request may name its user with the
//! `X-User-Id` header, otherwise the configured default user applies.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use super::ApiError;
use crate::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// The user a request acts for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(UserId(state.default_user_id));
        };

        value
            .to_str()
            .ok()
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(UserId)
            .ok_or_else(|| ApiError::bad_request(format!("{} must be an integer", USER_ID_HEADER)))
    }
}
