//! Application configuration loaded from an itinerary file and environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Itinerary File
//!
//! A JSON file (default `default.json`, override with `-c`) holding the routing
//! provider API key and the itineraries shown on the board:
//!
//! ```json
//! {
//!   "APIKey": "your-maps-api-key",
//!   "Travels": [
//!     { "Work":    { "Start": "Madrid", "End": "Toledo", "By": "transit" } },
//!     { "Weekend": { "Start": "Madrid", "End": "Segovia" } }
//!   ]
//! }
//! ```
//!
//! A missing `Start`/`End` falls back to `Madrid`/`Barcelona`, a missing `By` to
//! driving. Unknown itinerary fields are rejected with an error naming the field.
//!
//! ## Environment Variables
//!
//! - `MAPS_API_KEY` - Overrides `APIKey` from the file
//! - `LISTEN` - Bind address (default: `0.0.0.0:8025`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CACHE_ENABLED` - `false`/`0` disables the record cache (default: enabled)
//! - `CACHE_CAPACITY` - Cached records (default: 5, max: 10000)
//! - `CACHE_TTL_SECONDS` - Record lifetime (default: 600)
//! - `MAX_CONCURRENT_LOOKUPS` - Per-batch cap on provider calls (default: batch size)
//! - `MAPS_BASE_URL` - Routing provider base URL (default: `https://maps.googleapis.com`)
//! - `PROVIDER_TIMEOUT_SECONDS` - Provider request timeout (default: 30)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use url::Url;

use crate::domain::entities::{Itinerary, translate_mode};

const DEFAULT_START: &str = "Madrid";
const DEFAULT_END: &str = "Barcelona";

/// Contents of the itinerary file.
#[derive(Debug, Default, Deserialize)]
pub struct ItineraryFile {
    #[serde(rename = "APIKey", alias = "api_key", default)]
    pub api_key: String,
    #[serde(rename = "Travels", alias = "travels", default)]
    pub travels: Vec<HashMap<String, TravelEntry>>,
}

/// One itinerary as written in the file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TravelEntry {
    #[serde(rename = "Start", default = "default_start")]
    pub start: String,
    #[serde(rename = "End", default = "default_end")]
    pub end: String,
    #[serde(rename = "By", default)]
    pub by: String,
}

fn default_start() -> String {
    DEFAULT_START.to_string()
}

fn default_end() -> String {
    DEFAULT_END.to_string()
}

impl ItineraryFile {
    /// Parses the itinerary file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an itinerary has an unknown field.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid itinerary file")
    }

    /// Reads and parses the itinerary file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read itinerary file {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Flattens the `Travels` list into a name → itinerary map.
    ///
    /// When a name appears more than once, the last occurrence wins.
    pub fn itineraries(&self) -> HashMap<String, Itinerary> {
        self.travels
            .iter()
            .flat_map(|group| group.iter())
            .map(|(name, entry)| {
                (
                    name.clone(),
                    Itinerary::new(
                        entry.start.clone(),
                        entry.end.clone(),
                        translate_mode(&entry.by),
                    ),
                )
            })
            .collect()
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub config_file: PathBuf,
    /// Routing provider credential.
    pub api_key: String,
    /// Itineraries seeded into the board at startup.
    pub itineraries: HashMap<String, Itinerary>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub cache_enabled: bool,
    pub cache_capacity: usize,
    pub cache_ttl_seconds: u64,
    /// Upper bound on simultaneous provider calls within one batch.
    /// `None` lets every itinerary of a batch run in parallel.
    pub max_concurrent_lookups: Option<usize>,
    pub maps_base_url: String,
    pub provider_timeout_seconds: u64,
}

impl Config {
    /// Builds the configuration from a parsed itinerary file and the environment.
    pub fn from_file_and_env(config_file: PathBuf, file: ItineraryFile) -> Self {
        let itineraries = file.itineraries();

        let api_key = env::var("MAPS_API_KEY").unwrap_or(file.api_key);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8025".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        let cache_capacity = env::var("CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(600);

        let max_concurrent_lookups = env::var("MAX_CONCURRENT_LOOKUPS")
            .ok()
            .and_then(|v| v.parse().ok());

        let maps_base_url = env::var("MAPS_BASE_URL")
            .unwrap_or_else(|_| "https://maps.googleapis.com".to_string());

        let provider_timeout_seconds = env::var("PROVIDER_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            config_file,
            api_key,
            itineraries,
            listen_addr,
            log_level,
            log_format,
            cache_enabled,
            cache_capacity,
            cache_ttl_seconds,
            max_concurrent_lookups,
            maps_base_url,
            provider_timeout_seconds,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `cache_capacity` is outside 1..=10000 or `cache_ttl_seconds` is 0
    /// - `max_concurrent_lookups` is 0
    /// - `maps_base_url` is not an http(s) URL
    /// - `provider_timeout_seconds` is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.cache_capacity == 0 || self.cache_capacity > 10_000 {
            anyhow::bail!(
                "CACHE_CAPACITY must be between 1 and 10000, got {}",
                self.cache_capacity
            );
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        if self.max_concurrent_lookups == Some(0) {
            anyhow::bail!("MAX_CONCURRENT_LOOKUPS must be at least 1");
        }

        self.maps_base_url()?;

        if self.provider_timeout_seconds == 0 {
            anyhow::bail!("PROVIDER_TIMEOUT_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Parses the routing provider base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed or not http(s).
    pub fn maps_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.maps_base_url)
            .with_context(|| format!("MAPS_BASE_URL is not a valid URL: '{}'", self.maps_base_url))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "MAPS_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.maps_base_url
            );
        }

        Ok(url)
    }

    /// Prints configuration summary (without the API key).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded from {}:", self.config_file.display());
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Itineraries: {}", self.itineraries.len());
        tracing::info!("  API key: {}", mask_secret(&self.api_key));
        tracing::info!("  Routing provider: {}", self.maps_base_url);

        if self.cache_enabled {
            tracing::info!(
                "  Cache: {} entries, TTL {}s (enabled)",
                self.cache_capacity,
                self.cache_ttl_seconds
            );
        } else {
            tracing::info!("  Cache: disabled");
        }

        match self.max_concurrent_lookups {
            Some(limit) => tracing::info!("  Concurrent lookups per batch: {}", limit),
            None => tracing::info!("  Concurrent lookups per batch: unbounded"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.api_key.trim().is_empty() {
            tracing::warn!("No API key configured; every provider lookup will fail");
        }
    }
}

/// Masks a secret for logging, keeping only its first four characters.
fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }

    let visible: String = secret.chars().take(4).collect();
    if visible.len() == secret.len() {
        "***".to_string()
    } else {
        format!("{visible}***")
    }
}

/// Loads and validates configuration from the itinerary file and environment.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load(config_file: &Path) -> Result<Config> {
    let file = ItineraryFile::load(config_file)?;
    let config = Config::from_file_and_env(config_file.to_path_buf(), file);
    config.validate()?;
    Ok(config)
}
