//! SQLite storage for wardrobe items
//!
//! Handlers borrow a pooled connection per call; nothing here holds a
//! connection beyond a single query.

pub mod analytics;
pub mod init;
pub mod items;

pub use init::init_database;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Error, Result};

/// Fixed-width UTC text so stored timestamps sort lexically
pub(crate) fn encode_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn decode_timestamp(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| Error::Internal(format!("Corrupt timestamp '{}': {}", text, e)))
}
