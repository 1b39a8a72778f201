//! Solar-system scene: the static scene graph of the Sun, planets, Moon,
//! rings, orbit paths, lights and camera, and the per-frame animation that
//! moves bodies along their orbits and spins them on their axes.
//!
//! The output is renderer-agnostic: nodes carry transforms, geometry
//! descriptors and material parameters for an external 3D library to draw.

pub mod body;
pub mod camera;
pub mod geometry;
pub mod graph;
pub mod light;
pub mod material;
pub mod orbit;
pub mod solar_system;

pub use body::{BodyKind, BodySpec, OrbitSpec};
pub use camera::{OrbitControls, PerspectiveCamera};
pub use geometry::{Geometry, RingGeometry, SphereGeometry};
pub use graph::{Node, NodeId, NodeKind, SceneGraph, Transform};
pub use light::{AmbientLight, PointLight};
pub use material::{Color, Material};
pub use orbit::{EllipseCurve, orbital_phase};
pub use solar_system::{BodySnapshot, FrameSnapshot, SolarSystem};
