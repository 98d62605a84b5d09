use once_cell::sync::OnceCell;

use crate::domain::{
    chart::DEFAULT_CHART_HEIGHT,
    logging::LogLevel,
    state::ResponsePolicy,
};
use crate::infrastructure::http::DEFAULT_PREDICT_ENDPOINT;

pub const DEFAULT_CHART_WIDTH: u32 = 860;

/// Widget configuration, fixed once the widget is mounted
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: String,
    pub chart_width: u32,
    pub chart_height: u32,
    pub response_policy: ResponsePolicy,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PREDICT_ENDPOINT.to_string(),
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            response_policy: ResponsePolicy::default(),
            log_level: if cfg!(debug_assertions) { LogLevel::Debug } else { LogLevel::Info },
        }
    }
}

impl AppConfig {
    /// Apply `endpoint`, `policy` and `log` overrides from a page query
    /// string (`?endpoint=...&policy=last-resolved-wins&log=warn`).
    ///
    /// Values must already be URI-decoded by the caller; unknown keys and
    /// unparseable values are ignored.
    pub fn with_query_overrides<'a>(mut self, pairs: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        for (key, value) in pairs {
            match key {
                "endpoint" if !value.is_empty() => self.endpoint = value,
                "policy" => {
                    if let Ok(policy) = value.parse() {
                        self.response_policy = policy;
                    }
                }
                "log" => {
                    if let Ok(level) = value.parse() {
                        self.log_level = level;
                    }
                }
                _ => {}
            }
        }
        self
    }
}

/// Split `?a=b&c=d` into raw `(key, value)` pairs.
pub fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Fix the configuration. Returns `false` if it was already set.
pub fn init_config(config: AppConfig) -> bool {
    CONFIG.set(config).is_ok()
}

pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(query: &str) -> AppConfig {
        AppConfig::default().with_query_overrides(query_pairs(query).map(|(k, v)| (k, v.to_string())))
    }

    #[test]
    fn defaults_point_at_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:5000/api/predict");
        assert_eq!(config.chart_height, 600);
        assert_eq!(config.response_policy, ResponsePolicy::LatestRequestWins);
    }

    #[test]
    fn query_overrides_known_keys_only() {
        let config = overrides("?endpoint=http://host/api&policy=last-resolved-wins&log=error&theme=dark");
        assert_eq!(config.endpoint, "http://host/api");
        assert_eq!(config.response_policy, ResponsePolicy::LastResolvedWins);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn bad_values_keep_defaults() {
        let config = overrides("policy=whatever&endpoint=&log");
        assert_eq!(config, AppConfig::default());
    }
}
