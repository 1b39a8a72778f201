//! The `serve`, `simulate` and `info` subcommands.

use std::time::Duration;

use tracing::info;

use orrery_client::{ClientError, InfoPanel, PlanetClient};
use orrery_config::{Config, ConfigError};
use orrery_scene::{FrameSnapshot, SolarSystem};
use orrery_server::{MetadataServer, ServerError};
use orrery_store::{DbError, SqlitePlanetRepository, open_db_with_timeout};

use crate::game_loop::{FIXED_DT, GameLoop};
use crate::platform::{PlatformDirs, PlatformError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("database: {0}")]
    Database(#[from] DbError),

    #[error("server: {0}")]
    Server(#[from] ServerError),

    #[error("{name}: {source}")]
    Client {
        name: String,
        #[source]
        source: ClientError,
    },

    #[error("snapshot encoding: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Open (creating and seeding if needed) the database and serve it until the
/// server thread exits.
pub fn serve(config: &Config, dirs: &PlatformDirs) -> Result<(), AppError> {
    let db_path = config.database_path(&dirs.data_dir);
    let conn = open_db_with_timeout(
        &db_path,
        Duration::from_millis(config.database.busy_timeout_ms),
    )?;
    let repo = SqlitePlanetRepository::new(conn);

    let mut server = MetadataServer::new(config.server.bind_address.clone(), config.server.port);
    server.start(repo)?;
    info!(
        "Serving planet metadata from {} on http://{}:{}",
        db_path.display(),
        config.server.bind_address,
        server.actual_port()
    );

    server.join()?;
    Ok(())
}

/// Run the animation headlessly for `seconds` of simulated time.
///
/// Body positions are logged after every simulated second; the final frame is
/// returned.
pub fn simulate(config: &Config, seconds: f64) -> FrameSnapshot {
    let mut system = SolarSystem::new(config.scene.viewport_width, config.scene.viewport_height)
        .with_time_scale(config.scene.time_scale);
    let mut game_loop = GameLoop::new();
    let mut next_report = 1.0;

    let seconds = seconds.max(0.0);
    while game_loop.total_sim_time() + FIXED_DT / 2.0 < seconds {
        game_loop.advance(
            FIXED_DT,
            |dt, sim_time| {
                system.tick(dt);
                if sim_time + dt + 1e-9 >= next_report {
                    log_positions(&system, next_report);
                    next_report += 1.0;
                }
            },
            |_alpha| {},
        );
    }

    info!(
        "Simulated {:.2}s in {} steps",
        game_loop.total_sim_time(),
        game_loop.update_count()
    );
    system.snapshot()
}

fn log_positions(system: &SolarSystem, second: f64) {
    for body in system.snapshot().bodies {
        let [x, y, z] = body.position;
        info!(
            "t={second:.0}s {:<8} pos=({x:8.2}, {y:6.2}, {z:8.2}) spin={:.3}",
            body.kind.display_name(),
            body.spin
        );
    }
}

/// Fetch a body's record and render the info panel text.
pub fn info(config: &Config, name: &str) -> Result<Vec<String>, AppError> {
    let client = PlanetClient::from_config(&config.client);
    let mut panel = InfoPanel::new();
    panel.select(name);

    let result = match client.fetch(name) {
        Err(ClientError::NotFound) => Err(ClientError::NotFound),
        Err(source) => {
            return Err(AppError::Client {
                name: name.to_string(),
                source,
            });
        }
        ok => ok,
    };
    panel.resolve(name, result);
    Ok(panel.lines())
}
