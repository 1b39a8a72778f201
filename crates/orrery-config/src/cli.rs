//! Command-line overrides shared by every Orrery subcommand.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Global command-line arguments.
///
/// CLI values override settings loaded from `config.ron` and the environment.
#[derive(Args, Debug, Default, Clone)]
pub struct CliArgs {
    /// Interface the metadata service binds to.
    #[arg(long, global = true)]
    pub bind: Option<String>,

    /// Metadata service port.
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Path to the planet database.
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Base URL of the metadata service used by the client.
    #[arg(long, global = true)]
    pub server_url: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref bind) = args.bind {
            self.server.bind_address = bind.clone();
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }
        if let Some(ref path) = args.database {
            self.database.path = Some(path.clone());
        }
        if let Some(ref url) = args.server_url {
            self.client.server_url = url.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
