//! Process-level plumbing shared by binaries: layered configuration and
//! logging initialisation.

pub mod config;
pub mod logging;

pub use config::{AppConfig, AuthConfig, CliArgs, LoggingConfig, Section};
