//! Environment variable overrides, applied between the config file and the CLI.

use std::path::PathBuf;

use crate::{Config, ConfigError};

/// Port the metadata service listens on.
pub const ENV_PORT: &str = "PORT";
/// Path to the planet database.
pub const ENV_DATABASE: &str = "ORRERY_DATABASE";
/// Base URL the client uses to reach the metadata service.
pub const ENV_SERVER_URL: &str = "ORRERY_SERVER_URL";

impl Config {
    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides using `lookup` to resolve variables. Empty values are ignored.
    pub fn apply_env_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(port) = get(ENV_PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_PORT,
                value: port.clone(),
            })?;
        }
        if let Some(path) = get(ENV_DATABASE) {
            self.database.path = Some(PathBuf::from(path));
        }
        if let Some(url) = get(ENV_SERVER_URL) {
            self.client.server_url = url;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_env_overrides_applied() {
        let mut config = Config::default();
        config
            .apply_env_from(lookup(&[
                (ENV_PORT, "8088"),
                (ENV_DATABASE, "/data/planets.db"),
                (ENV_SERVER_URL, "http://planets.local"),
            ]))
            .unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.database.path, Some(PathBuf::from("/data/planets.db")));
        assert_eq!(config.client.server_url, "http://planets.local");
    }

    #[test]
    fn test_empty_env_values_ignored() {
        let mut config = Config::default();
        config.apply_env_from(lookup(&[(ENV_PORT, "  ")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_env_from(lookup(&[(ENV_PORT, "fifty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_PORT, .. }));
    }
}
