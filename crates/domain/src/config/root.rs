use super::{ConfigError, LoggingConfig, ServerConfig, UpstreamConfig, UpstreamFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Values given on the command line. `Some` wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub web_port: Option<u16>,
    pub upstream_url: Option<String>,
    pub upstream_format: Option<UpstreamFormat>,
    pub timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from a TOML file (or defaults when no path is given) and apply
    /// CLI overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(url) = overrides.upstream_url {
            self.upstream.url = url;
        }
        if let Some(format) = overrides.upstream_format {
            self.upstream.format = format;
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.upstream.timeout_ms = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Invalid("server.web_port cannot be 0".into()));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "server.bind_address cannot be empty".into(),
            ));
        }
        let url = &self.upstream.url;
        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::Invalid(format!(
                "upstream.url must start with http:// or https:// (got '{}')",
                url
            )));
        }
        if self.upstream.timeout_ms == 0 || self.upstream.timeout_ms > 60_000 {
            return Err(ConfigError::Invalid(format!(
                "upstream.timeout_ms must be between 1 and 60000 (got {})",
                self.upstream.timeout_ms
            )));
        }
        Ok(())
    }
}
