pub mod toml_config;

use crate::domain::ports::UpstreamSettings;
use crate::utils::error::{OpsError, Result};
use crate::utils::validation::{self, Validate};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

pub use toml_config::FileConfig;

pub const DEFAULT_API_URL: &str = "https://backboard.railway.com/graphql/v2";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8001;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "railway-ops")]
#[command(about = "HTTP proxy for Railway GraphQL operations", version)]
pub struct CliConfig {
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "RAILWAY_API_URL")]
    pub api_url: Option<String>,

    #[arg(long, env = "RAILWAY_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Optional TOML file; CLI and environment values take precedence.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl CliConfig {
    /// Merge with the optional config file and apply defaults.
    pub fn resolve(self) -> Result<ServiceConfig> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        self.merge(file)
    }

    pub fn merge(self, file: FileConfig) -> Result<ServiceConfig> {
        let token = self.token.or(file.upstream.token);
        let token = validation::validate_required_field("token", &token)?.clone();

        Ok(ServiceConfig {
            host: self
                .host
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: self.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            api_url: self
                .api_url
                .or(file.upstream.api_url)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token,
            verbose: self.verbose || file.logging.verbose.unwrap_or(false),
            log_format: self.log_format.or(file.logging.format).unwrap_or_default(),
        })
    }
}

/// Fully resolved process configuration, read once at startup.
#[derive(Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub token: String,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("verbose", &self.verbose)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl UpstreamSettings for ServiceConfig {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn token(&self) -> &str {
        &self.token
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_url", &self.api_url)?;
        validation::validate_secret("token", &self.token)?;
        validation::validate_positive_number("port", self.port as usize, 1)?;
        if self.host.trim().is_empty() {
            return Err(OpsError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host.clone(),
                reason: "Listen host cannot be empty".to_string(),
            });
        }

        tracing::info!("✅ Configuration validation passed");
        Ok(())
    }
}
