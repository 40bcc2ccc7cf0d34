// src/catalog/loader.rs
use crate::catalog::models::Listing;
use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde_json::Value;
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// One failure diagnostic per way a load can go wrong. A failed load is
/// terminal for that attempt; callers surface the message and render an
/// empty result set.
#[derive(Debug)]
pub enum CatalogError {
    Transport(String),
    Status(u16),
    Json(String),
    NotAnArray,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Transport(msg) => write!(f, "Could not reach the listing catalog: {msg}"),
            CatalogError::Status(code) => write!(f, "Catalog request failed (HTTP {code})"),
            CatalogError::Json(msg) => write!(f, "Catalog payload is not valid JSON: {msg}"),
            CatalogError::NotAnArray => {
                write!(f, "Catalog payload must be a JSON array of listings")
            }
        }
    }
}

impl Error for CatalogError {}

#[derive(Clone)]
pub struct CatalogLoader {
    client: Client,
    url: String,
}

impl CatalogLoader {
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch and decode the catalog. One fetch per call, no retries, and
    /// no-cache request headers so every page view sees fresh data.
    pub fn load(&self) -> Result<Vec<Listing>, CatalogError> {
        let resp = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache")
            .header(PRAGMA, "no-cache")
            .send()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let payload: Value = resp.json().map_err(|e| CatalogError::Json(e.to_string()))?;

        decode_catalog(payload)
    }
}

/// The top-level payload must be an array; anything else is a contract
/// violation. Records that are not objects are dropped, and malformed
/// fields inside a record degrade via the lenient listing decoder.
pub fn decode_catalog(payload: Value) -> Result<Vec<Listing>, CatalogError> {
    let Value::Array(records) = payload else {
        return Err(CatalogError::NotAnArray);
    };

    Ok(records
        .into_iter()
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect())
}
