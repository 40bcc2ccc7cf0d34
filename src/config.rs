// src/config.rs
use std::env;
use std::net::SocketAddr;

/// Where the listing catalog lives when nothing else is configured.
/// The catalog is a plain JSON array served as a static file.
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:8000/data/listings.json";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub catalog_url: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    /// - `APETMENTS_ADDR`: listen address, e.g. "0.0.0.0:3000"
    /// - `APETMENTS_CATALOG_URL`: URL of the listings JSON document
    pub fn from_env() -> Self {
        let addr = env::var("APETMENTS_ADDR")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(|| DEFAULT_ADDR.parse().unwrap());

        let catalog_url =
            env::var("APETMENTS_CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

        Self { addr, catalog_url }
    }
}
