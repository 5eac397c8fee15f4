use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the Open Library catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the search API (default: "https://openlibrary.org").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL used to derive cover image URLs
    /// (default: "https://covers.openlibrary.org").
    #[serde(default = "default_covers_base_url")]
    pub covers_base_url: String,
    /// Maximum number of results per search (default: 20).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Connection timeout in seconds (default: 5).
    ///
    /// Applies only to establishing the connection; in-flight requests
    /// are never cut short.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings for the terminal UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Trailing debounce window for search submissions in ms (default: 500).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// How long a toast stays on screen in ms (default: 3000).
    #[serde(default = "default_toast_ttl_ms")]
    pub toast_ttl_ms: u64,
    /// UI tick interval in ms, drives the spinner and toast expiry
    /// (default: 250).
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_base_url() -> String {
    "https://openlibrary.org".to_string()
}

fn default_covers_base_url() -> String {
    "https://covers.openlibrary.org".to_string()
}

fn default_limit() -> u32 {
    20
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_toast_ttl_ms() -> u64 {
    3000
}

fn default_tick_ms() -> u64 {
    250
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            covers_base_url: default_covers_base_url(),
            limit: default_limit(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            toast_ttl_ms: default_toast_ttl_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            ui: UiConfig::default(),
        }
    }
}
