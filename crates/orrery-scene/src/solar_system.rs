//! The assembled solar system and its per-frame animation.
//!
//! Every animated quantity is a pure function of elapsed wall-clock time, so
//! a frame can be reproduced from its timestamp alone and the result does not
//! depend on how often frames are drawn.

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::{DVec3, Vec3};
use serde::Serialize;

use crate::body::{BodyKind, MOON_ORBIT_RADIUS, MOON_ORBIT_SPEED};
use crate::camera::{OrbitControls, PerspectiveCamera};
use crate::geometry::{Geometry, RingGeometry, SphereGeometry};
use crate::graph::{NodeId, NodeKind, SceneGraph, Transform};
use crate::light::{AmbientLight, PointLight};
use crate::material::{Color, Material, Side};
use crate::orbit::{EllipseCurve, orbital_phase, orbital_progress};

/// Earth's spin per reference frame, in radians.
pub const SPIN_PER_FRAME: f64 = 0.005;
/// Frame length the spin rate is defined against (60 Hz).
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
/// Samples along each drawn orbit path.
pub const ORBIT_PATH_DIVISIONS: usize = 200;

const ORBIT_LINE_COLOR: Color = Color(0xE4_E4_E3);
const ORBIT_LINE_OPACITY: f32 = 0.5;
const BACKDROP_RADIUS: f32 = 1000.0;
const BACKDROP_SEGMENTS: u32 = 100;
const RING_INNER_RADIUS: f32 = 12.0;
const RING_OUTER_RADIUS: f32 = 22.0;
const RING_THETA_SEGMENTS: u32 = 64;
const RING_OPACITY: f32 = 0.75;
/// Camera distance after a jump, in multiples of the body radius.
const JUMP_DISTANCE_RADII: f32 = 8.0;
const MIN_JUMP_DISTANCE: f32 = 5.0;

/// Scene nodes driven by one body's animation.
#[derive(Clone, Debug)]
struct BodyNodes {
    /// The sphere itself.
    mesh: NodeId,
    /// Node moved along the orbit (the mesh, or the group containing it).
    anchor: NodeId,
    /// Node spun about its axis (the mesh, or the group containing it).
    spinner: NodeId,
    axial_tilt: f32,
}

/// Per-body state captured for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub kind: BodyKind,
    pub position: [f32; 3],
    /// Spin angle about the body's axis, wrapped to `[0, 2π)`.
    pub spin: f32,
    /// Orbital phase in `[0, 1)`; 0 for the Sun. The Moon reports its turn
    /// around Earth, not Earth's around the Sun.
    pub phase: f64,
}

/// All body states at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub elapsed_ms: f64,
    pub bodies: Vec<BodySnapshot>,
}

/// The complete scene plus the state needed to animate it.
pub struct SolarSystem {
    graph: SceneGraph,
    camera: PerspectiveCamera,
    controls: OrbitControls,
    bodies: HashMap<BodyKind, BodyNodes>,
    orbits: HashMap<BodyKind, EllipseCurve>,
    elapsed_ms: f64,
    time_scale: f64,
}

impl SolarSystem {
    /// Build the scene for a viewport of the given size, posed at time zero.
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        let mut system = Self {
            graph: SceneGraph::new(),
            camera: PerspectiveCamera::new(viewport_width, viewport_height),
            controls: OrbitControls::default(),
            bodies: HashMap::new(),
            orbits: HashMap::new(),
            elapsed_ms: 0.0,
            time_scale: 1.0,
        };
        system.build();
        system.advance(0.0);
        log::debug!(
            "Built solar system scene with {} nodes",
            system.graph.len()
        );
        system
    }

    /// Multiplier applied to time passed to [`tick`](Self::tick).
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale.max(0.0);
        self
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    fn build(&mut self) {
        let g = &mut self.graph;

        g.add(
            "ambient_light",
            None,
            Transform::default(),
            NodeKind::AmbientLight(AmbientLight {
                color: Color(0x40_40_40),
                intensity: 0.25,
            }),
        );
        g.add(
            "sun_light",
            None,
            Transform::default(),
            NodeKind::PointLight(PointLight {
                color: Color::WHITE,
                intensity: 15_000.0,
                range: 500.0,
                position: Vec3::ZERO,
            }),
        );
        g.add(
            "backdrop",
            None,
            Transform::default(),
            NodeKind::Mesh {
                geometry: Geometry::Sphere(SphereGeometry::new(
                    BACKDROP_RADIUS,
                    BACKDROP_SEGMENTS,
                    BACKDROP_SEGMENTS,
                )),
                material: Material::Standard {
                    color: Color::WHITE,
                    emissive: Color(0),
                    emissive_intensity: 0.0,
                    texture: Some("textures/stars.jpeg".to_string()),
                    side: Side::Double,
                },
            },
        );

        let sun_group = g.add("sun_system", None, Transform::default(), NodeKind::Group);
        let sun = g.add(
            "Sun",
            Some(sun_group),
            Transform::default(),
            NodeKind::Mesh {
                geometry: Geometry::Sphere(SphereGeometry::body(BodyKind::Sun.spec().radius)),
                material: Material::Standard {
                    color: Color(0xFF_FF_00),
                    emissive: Color(0xFF_FF_A1),
                    emissive_intensity: 1.0,
                    texture: None,
                    side: Side::Front,
                },
            },
        );
        g.add(
            "reset_camera",
            Some(sun_group),
            Transform::default(),
            NodeKind::Camera(self.camera.clone()),
        );
        self.bodies.insert(
            BodyKind::Sun,
            BodyNodes {
                mesh: sun,
                anchor: sun_group,
                spinner: sun,
                axial_tilt: 0.0,
            },
        );

        for kind in BodyKind::PLANETS {
            self.add_planet(kind);
        }
    }

    fn add_planet(&mut self, kind: BodyKind) {
        let spec = kind.spec();
        let Some(orbit) = spec.orbit else {
            return;
        };
        let texture = spec.texture.unwrap_or_default().to_string();
        let sphere = |radius| Geometry::Sphere(SphereGeometry::body(radius));
        let g = &mut self.graph;

        let nodes = match kind {
            BodyKind::Earth => {
                let group = g.add("earth_system", None, Transform::default(), NodeKind::Group);
                let earth = g.add(
                    kind.display_name(),
                    Some(group),
                    Transform::default(),
                    NodeKind::Mesh {
                        geometry: sphere(spec.radius),
                        material: Material::Phong { texture },
                    },
                );
                let moon_spec = BodyKind::Moon.spec();
                let moon = g.add(
                    BodyKind::Moon.display_name(),
                    Some(group),
                    Transform::default(),
                    NodeKind::Mesh {
                        geometry: sphere(moon_spec.radius),
                        material: Material::Lambert {
                            texture: moon_spec.texture.unwrap_or_default().to_string(),
                        },
                    },
                );
                self.bodies.insert(
                    BodyKind::Moon,
                    BodyNodes {
                        mesh: moon,
                        anchor: moon,
                        spinner: moon,
                        axial_tilt: 0.0,
                    },
                );
                BodyNodes {
                    mesh: earth,
                    anchor: group,
                    spinner: earth,
                    axial_tilt: spec.axial_tilt,
                }
            }
            // Saturn's rings share the planet's tilt and spin, so both apply
            // to the enclosing group.
            BodyKind::Saturn => {
                let group = g.add("saturn_system", None, Transform::default(), NodeKind::Group);
                let saturn = g.add(
                    kind.display_name(),
                    Some(group),
                    Transform::default(),
                    NodeKind::Mesh {
                        geometry: sphere(spec.radius),
                        material: Material::Phong { texture },
                    },
                );
                g.add(
                    "saturn_rings",
                    Some(group),
                    Transform::default(),
                    NodeKind::Mesh {
                        geometry: Geometry::Ring(RingGeometry::new(
                            RING_INNER_RADIUS,
                            RING_OUTER_RADIUS,
                            RING_THETA_SEGMENTS,
                        )),
                        material: Material::Basic {
                            texture: "textures/saturn_rings.png".to_string(),
                            opacity: RING_OPACITY,
                            side: Side::Double,
                        },
                    },
                );
                BodyNodes {
                    mesh: saturn,
                    anchor: group,
                    spinner: group,
                    axial_tilt: spec.axial_tilt,
                }
            }
            _ => {
                let mesh = g.add(
                    kind.display_name(),
                    None,
                    Transform::default(),
                    NodeKind::Mesh {
                        geometry: sphere(spec.radius),
                        material: Material::Phong { texture },
                    },
                );
                BodyNodes {
                    mesh,
                    anchor: mesh,
                    spinner: mesh,
                    axial_tilt: spec.axial_tilt,
                }
            }
        };

        let curve = EllipseCurve::closed(orbit.radius_x, orbit.radius_z, orbit.start_angle);
        let path = curve
            .spaced_points(ORBIT_PATH_DIVISIONS)
            .into_iter()
            .map(|p| p.as_vec3())
            .collect();
        g.add(
            format!("{}_orbit", kind.api_name()),
            None,
            Transform::default(),
            NodeKind::Mesh {
                geometry: Geometry::Polyline(path),
                material: Material::Line {
                    color: ORBIT_LINE_COLOR,
                    opacity: ORBIT_LINE_OPACITY,
                },
            },
        );

        self.orbits.insert(kind, curve);
        self.bodies.insert(kind, nodes);
    }

    // -----------------------------------------------------------------------
    // Animation
    // -----------------------------------------------------------------------

    /// Advance by a frame of `dt_seconds` wall-clock time, scaled by the time scale.
    pub fn tick(&mut self, dt_seconds: f64) {
        let dt_ms = dt_seconds.max(0.0) * 1000.0 * self.time_scale;
        self.advance(self.elapsed_ms + dt_ms);
    }

    /// Pose every body for `elapsed_ms` since the animation started.
    pub fn advance(&mut self, elapsed_ms: f64) {
        self.elapsed_ms = elapsed_ms.max(0.0);
        let t = self.elapsed_ms;

        for kind in BodyKind::PLANETS {
            let (Some(nodes), Some(curve)) = (self.bodies.get(&kind), self.orbits.get(&kind))
            else {
                continue;
            };
            let spec = kind.spec();
            let position = curve.point_at(orbital_phase(spec.period_years, t));

            if let Some(anchor) = self.graph.transform_mut(nodes.anchor) {
                anchor.position = position.as_vec3();
            }
            if let Some(spinner) = self.graph.transform_mut(nodes.spinner) {
                spinner.rotation = Vec3::new(0.0, spin_angle(spec.spin_factor, t), nodes.axial_tilt);
            }
        }

        if let Some(moon) = self.bodies.get(&BodyKind::Moon) {
            let offset = moon_offset(t);
            if let Some(transform) = self.graph.transform_mut(moon.anchor) {
                transform.position = offset.as_vec3();
            }
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    /// World-space center of a body.
    pub fn body_position(&self, kind: BodyKind) -> Vec3 {
        self.bodies
            .get(&kind)
            .map(|nodes| self.graph.world_position(nodes.mesh))
            .unwrap_or(Vec3::ZERO)
    }

    /// Current spin angle about the body's own axis.
    pub fn body_spin(&self, kind: BodyKind) -> f32 {
        self.bodies
            .get(&kind)
            .and_then(|nodes| self.graph.get(nodes.spinner))
            .map(|node| node.transform.rotation.y)
            .unwrap_or(0.0)
    }

    /// Orbit curve of a planet; `None` for the Sun and the Moon.
    pub fn orbit(&self, kind: BodyKind) -> Option<&EllipseCurve> {
        self.orbits.get(&kind)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        let bodies = BodyKind::ALL
            .into_iter()
            .map(|kind| {
                let spec = kind.spec();
                let phase = match kind {
                    BodyKind::Moon => (moon_angle(self.elapsed_ms) / TAU).rem_euclid(1.0),
                    _ if spec.orbit.is_some() => orbital_phase(spec.period_years, self.elapsed_ms),
                    _ => 0.0,
                };
                BodySnapshot {
                    kind,
                    position: self.body_position(kind).to_array(),
                    spin: self.body_spin(kind),
                    phase,
                }
            })
            .collect();
        FrameSnapshot {
            elapsed_ms: self.elapsed_ms,
            bodies,
        }
    }

    // -----------------------------------------------------------------------
    // Camera
    // -----------------------------------------------------------------------

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        self.camera.resize(viewport_width, viewport_height);
    }

    pub fn reset_camera(&mut self) {
        self.camera.reset();
    }

    /// Orbit the view around its target.
    pub fn orbit_camera(&mut self, yaw: f32, pitch: f32) {
        self.controls.rotate(&mut self.camera, yaw, pitch);
    }

    pub fn zoom_camera(&mut self, factor: f32) {
        self.controls.zoom(&mut self.camera, factor);
    }

    /// Point the camera at a body from a distance proportional to its size.
    pub fn jump_to(&mut self, kind: BodyKind) {
        let focus = self.body_position(kind);
        let distance = (kind.spec().radius * JUMP_DISTANCE_RADII).max(MIN_JUMP_DISTANCE);
        self.controls.jump_to(&mut self.camera, focus, distance);
    }
}

/// Spin angle in `[0, 2π)` for a body spinning `spin_factor` times Earth's rate.
fn spin_angle(spin_factor: f64, elapsed_ms: f64) -> f32 {
    let frames = elapsed_ms / REFERENCE_FRAME_MS;
    (spin_factor * SPIN_PER_FRAME * frames).rem_euclid(TAU) as f32
}

/// The Moon's offset from Earth, driven by Earth's unwrapped orbital progress.
/// The Moon's angle around Earth, in radians, driven by Earth's unwrapped
/// orbital progress.
fn moon_angle(elapsed_ms: f64) -> f64 {
    orbital_progress(BodyKind::Earth.spec().period_years, elapsed_ms) * MOON_ORBIT_SPEED
}

fn moon_offset(elapsed_ms: f64) -> DVec3 {
    let angle = moon_angle(elapsed_ms);
    DVec3::new(
        -angle.cos() * MOON_ORBIT_RADIUS,
        0.0,
        -angle.sin() * MOON_ORBIT_RADIUS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> SolarSystem {
        SolarSystem::new(1280, 720)
    }

    #[test]
    fn test_initial_positions_use_start_angles() {
        let system = system();
        let mercury = system.body_position(BodyKind::Mercury);
        assert!((mercury - Vec3::new(50.0, 0.0, 0.0)).length() < 1e-4);

        let earth = system.body_position(BodyKind::Earth);
        let expected = Vec3::new(75.0 * 1.396f32.cos(), 0.0, 75.0 * 1.396f32.sin());
        assert!((earth - expected).length() < 1e-3, "{earth}");
    }

    #[test]
    fn test_sun_stays_at_origin() {
        let mut system = system();
        system.advance(123_456.0);
        assert_eq!(system.body_position(BodyKind::Sun), Vec3::ZERO);
    }

    #[test]
    fn test_planets_stay_on_their_orbits() {
        let mut system = system();
        for t in [0.0, 1_000.0, 37_500.0, 250_000.0, 9_999_999.0] {
            system.advance(t);
            for kind in BodyKind::PLANETS {
                let p = system.body_position(kind);
                let curve = system.orbit(kind).unwrap();
                let ellipse = (p.x as f64 / curve.radius_x).powi(2)
                    + (p.z as f64 / curve.radius_z).powi(2);
                assert!((ellipse - 1.0).abs() < 1e-3, "{kind} off orbit at t={t}");
                assert!(p.y.abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_earth_quarter_orbit() {
        let mut system = system();
        system.advance(25_000.0);
        let angle = 1.396 + std::f64::consts::FRAC_PI_2;
        let expected = Vec3::new((75.0 * angle.cos()) as f32, 0.0, (75.0 * angle.sin()) as f32);
        assert!((system.body_position(BodyKind::Earth) - expected).length() < 1e-3);
    }

    #[test]
    fn test_moon_circles_earth() {
        let mut system = system();
        for t in [0.0, 500.0, 12_345.0, 77_777.0] {
            system.advance(t);
            let d = system
                .body_position(BodyKind::Moon)
                .distance(system.body_position(BodyKind::Earth));
            assert!((d - 5.0).abs() < 1e-3, "moon distance {d} at t={t}");
        }
    }

    #[test]
    fn test_moon_starts_behind_earth_on_x() {
        let system = system();
        let offset = system.body_position(BodyKind::Moon) - system.body_position(BodyKind::Earth);
        assert!((offset - Vec3::new(-5.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_moon_rate_follows_earth_progress() {
        let mut system = system();
        system.advance(150_000.0);
        // Earth progress 1.5 orbits, times 80 radians per orbit.
        let angle = 120.0_f64;
        let expected = Vec3::new(
            (-angle.cos() * 5.0) as f32,
            0.0,
            (-angle.sin() * 5.0) as f32,
        );
        let offset = system.body_position(BodyKind::Moon) - system.body_position(BodyKind::Earth);
        assert!((offset - expected).length() < 1e-3, "offset {offset} vs {expected}");
        assert!((offset.x + 4.07).abs() < 0.01 && (offset.z + 2.90).abs() < 0.01);
    }

    #[test]
    fn test_moon_phase_is_its_own_turn() {
        let mut system = system();
        system.advance(150_000.0);
        let snapshot = system.snapshot();
        let phase_of = |kind: BodyKind| {
            snapshot
                .bodies
                .iter()
                .find(|b| b.kind == kind)
                .map(|b| b.phase)
                .unwrap()
        };
        let expected = (120.0 / TAU).rem_euclid(1.0);
        assert!((phase_of(BodyKind::Moon) - expected).abs() < 1e-9);
        assert!((phase_of(BodyKind::Earth) - 0.5).abs() < 1e-9);
        assert!(phase_of(BodyKind::Moon) < 1.0);
    }

    #[test]
    fn test_spin_is_time_based() {
        let mut a = system();
        let mut b = system();
        // One second at 60 Hz vs. 144 Hz.
        for _ in 0..60 {
            a.tick(1.0 / 60.0);
        }
        for _ in 0..144 {
            b.tick(1.0 / 144.0);
        }
        let spin_a = a.body_spin(BodyKind::Earth);
        let spin_b = b.body_spin(BodyKind::Earth);
        assert!((spin_a - 0.3).abs() < 1e-4, "spin {spin_a}");
        assert!((spin_a - spin_b).abs() < 1e-4);
    }

    #[test]
    fn test_venus_spins_backwards() {
        let mut system = system();
        system.advance(1_000.0);
        let venus = system.body_spin(BodyKind::Venus);
        assert!(venus > std::f32::consts::PI, "wrapped retrograde spin {venus}");
    }

    #[test]
    fn test_saturn_group_carries_rings() {
        let mut system = system();
        system.advance(50_000.0);
        let rings = system.graph().find("saturn_rings").unwrap();
        let saturn = system.body_position(BodyKind::Saturn);
        assert!((system.graph().world_position(rings) - saturn).length() < 1e-4);

        let group = system.graph().find("saturn_system").unwrap();
        let tilt = system.graph().get(group).unwrap().transform.rotation.z;
        assert!((tilt - 0.47).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_paths_present() {
        let system = system();
        for kind in BodyKind::PLANETS {
            let name = format!("{}_orbit", kind.api_name());
            let id = system.graph().find(&name).unwrap();
            match &system.graph().get(id).unwrap().kind {
                NodeKind::Mesh {
                    geometry: Geometry::Polyline(points),
                    material,
                } => {
                    assert_eq!(points.len(), ORBIT_PATH_DIVISIONS + 1);
                    assert!(material.is_transparent());
                }
                other => panic!("unexpected orbit node {other:?}"),
            }
        }
    }

    #[test]
    fn test_time_scale() {
        let mut system = system().with_time_scale(10.0);
        system.tick(1.0);
        assert!((system.elapsed_ms() - 10_000.0).abs() < 1e-9);
        system.tick(-5.0);
        assert!((system.elapsed_ms() - 10_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_jump_to_body() {
        let mut system = system();
        system.advance(42_000.0);
        system.jump_to(BodyKind::Jupiter);
        let jupiter = system.body_position(BodyKind::Jupiter);
        assert_eq!(system.camera().target, jupiter);
        assert!((system.camera().distance_to_target() - 88.0).abs() < 1e-2);

        system.reset_camera();
        assert_eq!(system.camera().position, PerspectiveCamera::HOME_POSITION);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut system = system();
        system.advance(1_000.0);
        let snapshot = system.snapshot();
        assert_eq!(snapshot.bodies.len(), BodyKind::ALL.len());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["bodies"][0]["kind"], "Sun");
        assert_eq!(json["elapsed_ms"], 1000.0);
    }
}
