//! dashdns domain layer
pub mod config;
pub mod query;
pub mod response;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ServerConfig, ZoneConfig};
pub use query::ParsedQuery;
pub use response::ResponseKind;
