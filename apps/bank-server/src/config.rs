//! Layered server configuration: defaults, optional YAML file, environment

use anyhow::Context;
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Environment variable prefix; nested keys use `__` (e.g. `BANK_SERVER_DATABASE__URL`)
pub const ENV_PREFIX: &str = "BANK_SERVER_";

/// `BANK_SERVER_CONFIG` names the file itself and is read by the CLI
const ENV_IGNORED: &[&str] = &["config"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub bank_service: bank_service::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://bank.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl AppConfig {
    /// Figment with every provider layered, lowest priority first
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).ignore(ENV_IGNORED).split("__"))
    }

    pub fn from_figment(figment: Figment) -> anyhow::Result<Self> {
        let mut config: AppConfig = figment.extract().context("invalid configuration")?;
        config.fill_derived();
        Ok(config)
    }

    /// Load configuration from an optional YAML file and the environment
    ///
    /// `bind` comes from the command line and wins over every other layer.
    pub fn load(path: Option<&Path>, bind: Option<SocketAddr>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            anyhow::ensure!(path.exists(), "config file {} not found", path.display());
        }
        let mut figment = Self::figment(path);
        if let Some(bind) = bind {
            figment = figment.merge(Serialized::default("server.bind", bind));
        }
        Self::from_figment(figment)
    }

    /// In http self-query mode without an explicit base URL, call ourselves
    fn fill_derived(&mut self) {
        let self_query = &mut self.bank_service.self_query;
        if self_query.mode == bank_service::SelfQueryMode::Http && self_query.base_url.is_none() {
            self_query.base_url = Some(format!("http://{}", self.server.bind));
        }
    }
}
