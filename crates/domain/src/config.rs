use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Zone the server is authoritative for
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Bind address and port
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The single zone this responder answers for.
///
/// `nameservers` and `nameserver_ips` are index-aligned: the IP at
/// position `i` is the A-record answer for the nameserver hostname at
/// position `i`. A missing or unparseable IP makes that hostname
/// resolve to NXDOMAIN.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default)]
    pub nameservers: Vec<String>,

    #[serde(default)]
    pub nameserver_ips: Vec<String>,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            nameservers: vec![],
            nameserver_ips: vec![],
        }
    }
}

impl ZoneConfig {
    /// Returns the configured IP string for the nameserver at `index`,
    /// if one is present.
    pub fn nameserver_ip(&self, index: usize) -> Option<&str> {
        self.nameserver_ips.get(index).map(String::as_str)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_domain() -> String {
    "somedomain.com".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dashdns.toml in current directory
    /// 3. /etc/dashdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dashdns.toml").exists() {
            Self::from_file("dashdns.toml")?
        } else if std::path::Path::new("/etc/dashdns/config.toml").exists() {
            Self::from_file("/etc/dashdns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(domain) = overrides.domain {
            self.zone.domain = domain;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.host = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.zone.domain.trim_end_matches('.').is_empty() {
            return Err(ConfigError::Validation(
                "Zone domain cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub domain: Option<String>,
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    FileRead(String, String),

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
