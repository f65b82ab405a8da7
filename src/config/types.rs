use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick cadence in milliseconds (default: 250). Drives the loading
    /// spinner; input and state changes redraw immediately regardless.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Destination selected at startup: "home" or "about".
    #[serde(default = "default_initial_tab")]
    pub initial_tab: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            initial_tab: default_initial_tab(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional TOML catalog file; the bundled sample is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_initial_tab() -> String {
    "home".to_string()
}
