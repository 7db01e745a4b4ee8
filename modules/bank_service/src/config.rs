//! Configuration for bank service module

use serde::{Deserialize, Serialize};

/// Bank service configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How the self-query endpoints reach the listing
    #[serde(default)]
    pub self_query: SelfQueryConfig,
}

/// Self-query endpoint configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SelfQueryConfig {
    #[serde(default)]
    pub mode: SelfQueryMode,

    /// Base URL (scheme, host, port) of the service to call in `http` mode
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Transport used by the self-query endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelfQueryMode {
    /// Direct call into the domain service
    #[default]
    Native,
    /// GET on the listing endpoint of `base_url`
    Http,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_native() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.self_query.mode, SelfQueryMode::Native);
        assert!(cfg.self_query.base_url.is_none());
    }

    #[test]
    fn test_http_mode_parses() {
        let cfg: Config = serde_json::from_value(serde_json::json!({
            "self_query": { "mode": "http", "base_url": "http://127.0.0.1:8080" }
        }))
        .unwrap();
        assert_eq!(cfg.self_query.mode, SelfQueryMode::Http);
        assert_eq!(cfg.self_query.base_url.as_deref(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<Config, _> = serde_json::from_str(r#"{"retention": 3}"#);
        assert!(result.is_err());
    }
}
