//! The `orrery` binary.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use orrery_app::commands::{self, AppError};
use orrery_app::platform::PlatformDirs;
use orrery_config::{CliArgs, Config};
use tracing::{error, warn};

#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Solar system orrery and planet metadata service")]
struct Cli {
    #[command(flatten)]
    overrides: CliArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve planet metadata over HTTP.
    Serve,
    /// Run the animation headlessly and print the final frame as JSON.
    Simulate {
        /// Simulated seconds to run.
        #[arg(long, default_value_t = 10.0)]
        seconds: f64,
    },
    /// Fetch a body's record from the metadata service.
    Info {
        /// Body name, e.g. `earth` or `Saturn`.
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("orrery: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let dirs = PlatformDirs::resolve_with_config(cli.overrides.config.as_deref())?;
    dirs.create_dirs()?;

    // File, then environment, then command line.
    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_env_overrides()?;
    config.apply_cli_overrides(&cli.overrides);

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    match cli.command {
        Command::Serve => commands::serve(&config, &dirs),
        Command::Simulate { seconds } => {
            let seconds = if seconds.is_finite() {
                seconds
            } else {
                warn!("Ignoring non-finite --seconds {seconds}");
                0.0
            };
            let snapshot = commands::simulate(&config, seconds);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
        Command::Info { name } => {
            for line in commands::info(&config, &name)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}
