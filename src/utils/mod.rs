//! Configuration

pub mod config;

pub use config::{ConfigurationManager, OverlayConfig, GlobeConfig, ConfigError, validate_config};
