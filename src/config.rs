use serde::Deserialize;
use std::sync::OnceLock;

/// Runtime configuration for the atlas app.
///
/// The photo API key is deliberately not compiled in. It comes from
/// `atlas.toml` next to the binary or the `PEXELS_API_KEY` environment
/// variable (the env var wins). Without a key the photo pane shows an
/// inline error; everything else keeps working.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub pexels_api_key: String,
    #[serde(default = "default_countries_url")]
    pub countries_url: String,
    #[serde(default = "default_worldbank_url")]
    pub worldbank_url: String,
    #[serde(default = "default_pexels_url")]
    pub pexels_url: String,
}

fn default_countries_url() -> String {
    "https://raw.githubusercontent.com/datasets/geo-countries/master/data/countries.geojson"
        .to_string()
}

fn default_worldbank_url() -> String {
    "https://api.worldbank.org/v2".to_string()
}

fn default_pexels_url() -> String {
    "https://api.pexels.com/v1".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            pexels_api_key: String::new(),
            countries_url: default_countries_url(),
            worldbank_url: default_worldbank_url(),
            pexels_url: default_pexels_url(),
        }
    }
}

impl AppConfig {
    /// Parses a TOML configuration string. Unknown keys are ignored,
    /// missing keys fall back to the defaults above.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Loads configuration from `atlas.toml` (if present) and applies
    /// environment overrides. Never fails: a broken file is logged and
    /// replaced by the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    fn load() -> Self {
        let mut config = match std::fs::read_to_string("atlas.toml") {
            Ok(raw) => match AppConfig::from_toml_str(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::error!("Invalid atlas.toml, using defaults: {}", e);
                    AppConfig::default()
                }
            },
            Err(_) => AppConfig::default(),
        };

        if let Ok(key) = std::env::var("PEXELS_API_KEY") {
            config.pexels_api_key = key;
        }

        config
    }

    // No filesystem or process environment on wasm. Keys must be served
    // by the hosting backend; the defaults keep the map itself working.
    #[cfg(target_arch = "wasm32")]
    fn load() -> Self {
        AppConfig::default()
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Global configuration, loaded on first access.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::load)
}
