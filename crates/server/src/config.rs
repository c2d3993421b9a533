use shared_types::{AppConfig, FeatureFlags};
use std::sync::OnceLock;

static FLAGS: OnceLock<FeatureFlags> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Read `config.toml`, parse feature flags, and store them in the global
/// `OnceLock`. Only the first call has effect.
///
/// If the file is missing or unparseable, all flags default to `false`.
pub fn load_feature_flags() {
    FLAGS.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            let flags = parse_feature_flags(&contents);
            tracing::info!(?flags, "Feature flags loaded from {CONFIG_PATH}");
            flags
        }
        Err(e) => {
            tracing::warn!(error = %e, "{CONFIG_PATH} not found, all feature flags off");
            FeatureFlags::default()
        }
    });
}

/// Parse the `[features]` table of a config file. Malformed input disables
/// every flag.
pub fn parse_feature_flags(contents: &str) -> FeatureFlags {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config.features,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse {CONFIG_PATH}, all feature flags off");
            FeatureFlags::default()
        }
    }
}

/// Get the loaded feature flags. Returns all-false defaults if
/// `load_feature_flags()` hasn't been called yet.
pub fn feature_flags() -> &'static FeatureFlags {
    static DEFAULT: FeatureFlags = FeatureFlags { telemetry: false };
    FLAGS.get().unwrap_or(&DEFAULT)
}

/// Process settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Socket address the HTTP server listens on.
    pub bind_addr: String,
}

impl Settings {
    /// Load `.env` if present, then read `API_BASE_URL` and `BIND_ADDR`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self::from_values(
            std::env::var("API_BASE_URL").ok(),
            std::env::var("BIND_ADDR").ok(),
        )
    }

    fn from_values(api_base_url: Option<String>, bind_addr: Option<String>) -> Self {
        let api_base_url = api_base_url
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let bind_addr = bind_addr
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Self {
            api_base_url,
            bind_addr,
        }
    }
}
