use log::LevelFilter;
use std::str::FromStr;

/// Base URL used when no override was supplied at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Client configuration.
///
/// A wasm bundle has no process environment at runtime, so overrides are
/// baked in at build time through `EXPENSE_API_BASE_URL` and
/// `EXPENSE_LOG_LEVEL`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("EXPENSE_API_BASE_URL"),
            option_env!("EXPENSE_LOG_LEVEL"),
        )
    }

    fn from_values(base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base_url,
            log_level,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
