//! State behind the planet information panel.
//!
//! Selecting a body moves the panel to `Loading`; the fetch result then
//! resolves it. A result for a body other than the one currently loading is
//! stale and dropped, so rapid clicks always show the last selection.

use orrery_store::Planet;

use crate::client::ClientError;

/// Text shown for a field the database left empty.
pub const MISSING_VALUE: &str = "n/a";

#[derive(Clone, Debug, PartialEq)]
pub enum PanelState {
    Idle,
    Loading { name: String },
    Loaded(Planet),
    Failed { name: String, message: String },
    NoData { name: String },
}

#[derive(Clone, Debug)]
pub struct InfoPanel {
    state: PanelState,
}

impl Default for InfoPanel {
    fn default() -> Self {
        Self {
            state: PanelState::Idle,
        }
    }
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != PanelState::Idle
    }

    /// Start loading `name`, replacing whatever was shown.
    pub fn select(&mut self, name: impl Into<String>) {
        self.state = PanelState::Loading { name: name.into() };
    }

    /// Apply the fetch result for `name`. Returns `false` if it was stale.
    pub fn resolve(&mut self, name: &str, result: Result<Planet, ClientError>) -> bool {
        match &self.state {
            PanelState::Loading { name: loading } if loading == name => {}
            _ => return false,
        }
        let name = name.to_string();
        self.state = match result {
            Ok(planet) => PanelState::Loaded(planet),
            Err(ClientError::NotFound) => PanelState::NoData { name },
            Err(e) => PanelState::Failed {
                name,
                message: e.to_string(),
            },
        };
        true
    }

    pub fn close(&mut self) {
        self.state = PanelState::Idle;
    }

    /// Lines of text the panel displays for its current state.
    pub fn lines(&self) -> Vec<String> {
        match &self.state {
            PanelState::Idle => Vec::new(),
            PanelState::Loading { .. } => vec!["Loading...".to_string()],
            PanelState::Failed { message, .. } => vec![format!("Error: {message}")],
            PanelState::NoData { .. } => vec!["No data available".to_string()],
            PanelState::Loaded(planet) => vec![
                planet.name.clone(),
                format!("Radius: {}", number(planet.radius)),
                format!("Distance from Sun: {}", number(planet.distance_from_sun)),
                format!("Length of Day: {}", number(planet.length_of_day)),
                format!("Length of Year: {}", number(planet.length_of_year)),
                format!(
                    "Fun Facts: {}",
                    planet.fun_facts.as_deref().unwrap_or(MISSING_VALUE)
                ),
            ],
        }
    }
}

fn number(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> Planet {
        Planet {
            name: "Earth".to_string(),
            radius: Some(6371.0),
            distance_from_sun: Some(149.6),
            length_of_day: Some(24.0),
            length_of_year: Some(365.25),
            fun_facts: Some("Only known planet with life.".to_string()),
        }
    }

    #[test]
    fn test_starts_closed() {
        let panel = InfoPanel::new();
        assert!(!panel.is_open());
        assert!(panel.lines().is_empty());
    }

    #[test]
    fn test_loaded_lines() {
        let mut panel = InfoPanel::new();
        panel.select("earth");
        assert_eq!(panel.lines(), vec!["Loading..."]);
        assert!(panel.resolve("earth", Ok(earth())));
        assert_eq!(
            panel.lines(),
            vec![
                "Earth",
                "Radius: 6371",
                "Distance from Sun: 149.6",
                "Length of Day: 24",
                "Length of Year: 365.25",
                "Fun Facts: Only known planet with life.",
            ]
        );
    }

    #[test]
    fn test_missing_values_show_placeholder() {
        let mut panel = InfoPanel::new();
        panel.select("sun");
        let sun = Planet {
            name: "Sun".to_string(),
            radius: Some(696_340.0),
            distance_from_sun: Some(0.0),
            length_of_day: None,
            length_of_year: None,
            fun_facts: None,
        };
        panel.resolve("sun", Ok(sun));
        let lines = panel.lines();
        assert_eq!(lines[2], "Distance from Sun: 0");
        assert_eq!(lines[3], "Length of Day: n/a");
        assert_eq!(lines[4], "Length of Year: n/a");
        assert_eq!(lines[5], "Fun Facts: n/a");
    }

    #[test]
    fn test_not_found_and_failure() {
        let mut panel = InfoPanel::new();
        panel.select("vulcan");
        panel.resolve("vulcan", Err(ClientError::NotFound));
        assert_eq!(
            panel.state(),
            &PanelState::NoData {
                name: "vulcan".to_string()
            }
        );
        assert_eq!(panel.lines(), vec!["No data available"]);

        panel.select("mars");
        panel.resolve("mars", Err(ClientError::Server(500)));
        assert_eq!(
            panel.lines(),
            vec!["Error: server responded with status 500"]
        );
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut panel = InfoPanel::new();
        panel.select("earth");
        panel.select("mars");
        assert!(!panel.resolve("earth", Ok(earth())));
        assert_eq!(
            panel.state(),
            &PanelState::Loading {
                name: "mars".to_string()
            }
        );
    }

    #[test]
    fn test_close() {
        let mut panel = InfoPanel::new();
        panel.select("earth");
        panel.resolve("earth", Ok(earth()));
        panel.close();
        assert!(!panel.is_open());
        assert!(!panel.resolve("earth", Ok(earth())));
    }
}
