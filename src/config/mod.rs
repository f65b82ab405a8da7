//! Application configuration: TOML file with defaults for every field.

mod loader;
mod types;

pub use loader::{default_config_path, ConfigError};
pub use types::{CatalogConfig, Config, UiConfig};
