//! Configuration module for dnsdig
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding and CORS
//! - `upstream`: DNS-over-HTTPS resolver settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use upstream::{UpstreamConfig, UpstreamFormat};
