//! Fixed parameters of every body in the scene.
//!
//! Sizes and orbit radii are in scene units and deliberately not to scale:
//! planet radii are relative to Earth = 1, orbits are compressed so the whole
//! system fits the view.

use serde::Serialize;

/// Celestial bodies present in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BodyKind {
    Sun,
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl BodyKind {
    /// Every body, ordered outward from the Sun (the Moon follows Earth).
    pub const ALL: [BodyKind; 11] = [
        BodyKind::Sun,
        BodyKind::Mercury,
        BodyKind::Venus,
        BodyKind::Earth,
        BodyKind::Moon,
        BodyKind::Mars,
        BodyKind::Jupiter,
        BodyKind::Saturn,
        BodyKind::Uranus,
        BodyKind::Neptune,
        BodyKind::Pluto,
    ];

    /// Bodies that orbit the Sun directly.
    pub const PLANETS: [BodyKind; 9] = [
        BodyKind::Mercury,
        BodyKind::Venus,
        BodyKind::Earth,
        BodyKind::Mars,
        BodyKind::Jupiter,
        BodyKind::Saturn,
        BodyKind::Uranus,
        BodyKind::Neptune,
        BodyKind::Pluto,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            BodyKind::Sun => "Sun",
            BodyKind::Mercury => "Mercury",
            BodyKind::Venus => "Venus",
            BodyKind::Earth => "Earth",
            BodyKind::Moon => "Moon",
            BodyKind::Mars => "Mars",
            BodyKind::Jupiter => "Jupiter",
            BodyKind::Saturn => "Saturn",
            BodyKind::Uranus => "Uranus",
            BodyKind::Neptune => "Neptune",
            BodyKind::Pluto => "Pluto",
        }
    }

    /// Name used in metadata service URLs.
    pub fn api_name(self) -> &'static str {
        match self {
            BodyKind::Sun => "sun",
            BodyKind::Mercury => "mercury",
            BodyKind::Venus => "venus",
            BodyKind::Earth => "earth",
            BodyKind::Moon => "moon",
            BodyKind::Mars => "mars",
            BodyKind::Jupiter => "jupiter",
            BodyKind::Saturn => "saturn",
            BodyKind::Uranus => "uranus",
            BodyKind::Neptune => "neptune",
            BodyKind::Pluto => "pluto",
        }
    }

    /// Case-insensitive lookup by display or API name.
    pub fn from_name(name: &str) -> Option<BodyKind> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.api_name().eq_ignore_ascii_case(name))
    }

    pub fn spec(self) -> BodySpec {
        let planet = |radius, tilt, orbit, period_years, spin_factor, texture| BodySpec {
            kind: self,
            radius,
            axial_tilt: tilt,
            orbit: Some(orbit),
            period_years,
            spin_factor,
            texture,
        };
        match self {
            BodyKind::Sun => BodySpec {
                kind: self,
                radius: 30.0,
                axial_tilt: 0.0,
                orbit: None,
                period_years: 0.0,
                spin_factor: 0.0,
                texture: None,
            },
            BodyKind::Mercury => planet(
                0.383,
                0.0,
                OrbitSpec::circle(50.0, 0.0),
                0.24,
                1.0 / 58.6,
                Some("textures/mercury.jpeg"),
            ),
            BodyKind::Venus => planet(
                0.95,
                3.1,
                OrbitSpec::circle(60.0, 0.698),
                0.62,
                -1.0 / 243.0,
                Some("textures/venus.jpeg"),
            ),
            BodyKind::Earth => planet(
                1.0,
                0.40,
                OrbitSpec::circle(75.0, 1.396),
                1.0,
                1.0,
                Some("textures/earth_day.jpeg"),
            ),
            // Orbits Earth, not the Sun; see `MOON_ORBIT_RADIUS`.
            BodyKind::Moon => BodySpec {
                kind: self,
                radius: 0.273,
                axial_tilt: 0.0,
                orbit: None,
                period_years: 1.0,
                spin_factor: 0.0,
                texture: Some("textures/moon.jpeg"),
            },
            BodyKind::Mars => planet(
                0.532,
                0.44,
                OrbitSpec::circle(90.0, 3.490),
                1.88,
                24.0 / 24.6,
                Some("textures/mars.jpeg"),
            ),
            BodyKind::Jupiter => planet(
                11.0,
                0.05,
                OrbitSpec::circle(120.0, 2.792),
                11.86,
                24.0 / 9.9,
                Some("textures/jupiter.jpeg"),
            ),
            BodyKind::Saturn => planet(
                9.0,
                0.47,
                OrbitSpec::circle(160.0, 0.698),
                29.46,
                24.0 / 10.7,
                Some("textures/saturn.jpeg"),
            ),
            BodyKind::Uranus => planet(
                4.0,
                1.71,
                OrbitSpec::circle(190.0, 4.188),
                84.01,
                24.0 / 17.2,
                Some("textures/uranus.jpeg"),
            ),
            BodyKind::Neptune => planet(
                4.0,
                0.49,
                OrbitSpec::circle(200.0, 4.886),
                164.8,
                24.0 / 16.1,
                Some("textures/neptune.jpeg"),
            ),
            // Pluto's orbit is visibly eccentric.
            BodyKind::Pluto => planet(
                0.2,
                2.11,
                OrbitSpec {
                    radius_x: 220.0,
                    radius_z: 195.0,
                    start_angle: 5.584,
                },
                248.0,
                24.0 / 153.3,
                Some("textures/pluto.webp"),
            ),
        }
    }
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Heliocentric orbit parameters in scene units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OrbitSpec {
    pub radius_x: f64,
    pub radius_z: f64,
    /// Angle in radians at phase 0.
    pub start_angle: f64,
}

impl OrbitSpec {
    pub const fn circle(radius: f64, start_angle: f64) -> Self {
        Self {
            radius_x: radius,
            radius_z: radius,
            start_angle,
        }
    }
}

/// Static description of one body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodySpec {
    pub kind: BodyKind,
    /// Sphere radius in scene units.
    pub radius: f32,
    /// Axial tilt in radians, applied about Z.
    pub axial_tilt: f32,
    /// `None` for the Sun and the Moon.
    pub orbit: Option<OrbitSpec>,
    /// Orbital period in Earth years.
    pub period_years: f64,
    /// Spin rate relative to Earth; negative spins retrograde.
    pub spin_factor: f64,
    pub texture: Option<&'static str>,
}

/// Radius of the Moon's circle around Earth.
pub const MOON_ORBIT_RADIUS: f64 = 5.0;
/// Radians of Moon angle per unit of Earth orbital progress.
pub const MOON_ORBIT_SPEED: f64 = 80.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(BodyKind::from_name("Neptune"), Some(BodyKind::Neptune));
        assert_eq!(BodyKind::from_name(" moon "), Some(BodyKind::Moon));
        assert_eq!(BodyKind::from_name("vulcan"), None);
    }

    #[test]
    fn test_orbits_increase_outward() {
        let radii: Vec<f64> = BodyKind::PLANETS
            .iter()
            .map(|kind| kind.spec().orbit.unwrap().radius_x)
            .collect();
        assert!(radii.windows(2).all(|w| w[0] < w[1]), "{radii:?}");
    }

    #[test]
    fn test_venus_spins_retrograde() {
        assert!(BodyKind::Venus.spec().spin_factor < 0.0);
        assert!(
            BodyKind::PLANETS
                .iter()
                .filter(|k| **k != BodyKind::Venus)
                .all(|k| k.spec().spin_factor > 0.0)
        );
    }

    #[test]
    fn test_only_planets_orbit_the_sun() {
        assert!(BodyKind::Sun.spec().orbit.is_none());
        assert!(BodyKind::Moon.spec().orbit.is_none());
        assert!(BodyKind::PLANETS.iter().all(|k| k.spec().orbit.is_some()));
    }

    #[test]
    fn test_every_body_but_the_sun_is_textured() {
        for kind in BodyKind::ALL {
            assert_eq!(kind.spec().texture.is_some(), kind != BodyKind::Sun, "{kind}");
        }
    }
}
