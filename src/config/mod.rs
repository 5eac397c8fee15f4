//! TOML configuration with serde-default fields.
//!
//! Every field has a default, so a missing config file (or any subset of
//! keys) yields a working setup pointed at the public Open Library API.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, Config, UiConfig};
