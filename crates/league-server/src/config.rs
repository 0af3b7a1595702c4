//! Server configuration

use league_repository::RepositoryConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where entities are stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RepositoryType {
    /// Process memory, lost on restart
    #[default]
    Memory,
    /// PostgreSQL database
    Postgres {
        /// Connection URL, e.g. "postgresql://localhost/league"
        url: String,
    },
}

impl RepositoryType {
    pub fn to_repository_config(&self) -> RepositoryConfig {
        match self {
            RepositoryType::Memory => RepositoryConfig::memory(),
            RepositoryType::Postgres { url } => RepositoryConfig::database(url.clone()),
        }
    }
}

/// Console and file log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Repository backend
    pub repository: RepositoryType,

    /// Log level for the service crates
    pub log_level: String,

    pub log_format: LogFormat,

    /// Directory for daily log files; console only when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            repository: RepositoryType::default(),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            log_dir: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Sources, later ones winning: `.env`, `config/server.{toml,yaml,json}`,
    /// then `LEAGUE_*` variables (nested keys use `__`, e.g.
    /// `LEAGUE_REPOSITORY__TYPE=postgres`).
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(
                config::Environment::with_prefix("LEAGUE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build();

        match config_result {
            Ok(cfg) => Self::from_config(cfg),
            Err(e) => {
                tracing::info!("No usable config sources ({}), using default configuration", e);
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from a TOML document
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config: {}", e))?;
        Self::from_config(cfg)
    }

    fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        let config: Self = cfg
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.host.trim().is_empty() {
            anyhow::bail!("host must not be empty");
        }
        self.repository
            .to_repository_config()
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid repository config: {}", e))
    }

    /// Address to bind, as "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
