//! Configuration system for Orrery.
//!
//! Settings persist to disk as a RON file and are layered: file values first,
//! then environment overrides, then command-line overrides via clap.

mod cli;
mod config;
mod env;
mod error;

pub use cli::CliArgs;
pub use config::{
    AudioConfig, ClientConfig, Config, DatabaseConfig, DebugConfig, SceneConfig, ServerConfig,
};
pub use env::{ENV_DATABASE, ENV_PORT, ENV_SERVER_URL};
pub use error::ConfigError;
