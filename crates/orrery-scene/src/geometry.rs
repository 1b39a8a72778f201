//! Geometry descriptors for scene meshes.
//!
//! Spheres are described parametrically and tessellated by the renderer.
//! Saturn's ring is generated here because its texture coordinates are
//! remapped so the ring texture runs radially from the inner to the outer edge.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use serde::Serialize;

/// Latitude/longitude sphere.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SphereGeometry {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl SphereGeometry {
    /// Segment count used for every celestial body.
    pub const BODY_SEGMENTS: u32 = 32;

    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments: width_segments.max(3),
            height_segments: height_segments.max(2),
        }
    }

    /// A body sphere with the standard 32x32 tessellation.
    pub fn body(radius: f32) -> Self {
        Self::new(radius, Self::BODY_SEGMENTS, Self::BODY_SEGMENTS)
    }

    /// Vertices after tessellation, including the duplicated seam column.
    pub fn vertex_count(&self) -> usize {
        ((self.width_segments + 1) * (self.height_segments + 1)) as usize
    }

    /// Triangles after tessellation; the pole rows emit one triangle per quad.
    pub fn triangle_count(&self) -> usize {
        let quads = (self.width_segments * self.height_segments) as usize;
        quads * 2 - 2 * self.width_segments as usize
    }
}

/// Flat annulus lying in the XZ plane, centered at the origin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RingGeometry {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub theta_segments: u32,
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl RingGeometry {
    /// Build the ring with one radial step and `theta_segments` around.
    ///
    /// Vertices nearer than the mid radius get `u = 0`, the rest `u = 1`, and
    /// every vertex gets `v = 1`, so a 1D strip texture maps across the band.
    pub fn new(inner_radius: f32, outer_radius: f32, theta_segments: u32) -> Self {
        let theta_segments = theta_segments.max(3);
        let mid_radius = (inner_radius + outer_radius) / 2.0;
        let columns = theta_segments + 1;

        let mut positions = Vec::with_capacity(2 * columns as usize);
        for radius in [inner_radius, outer_radius] {
            for i in 0..columns {
                let angle = i as f32 / theta_segments as f32 * TAU;
                // Built in XY then laid flat: (x, y, 0) -> (x, 0, y).
                positions.push(Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin()));
            }
        }

        let uvs = positions
            .iter()
            .map(|p| {
                let u = if p.length() < mid_radius { 0.0 } else { 1.0 };
                Vec2::new(u, 1.0)
            })
            .collect();

        let mut indices = Vec::with_capacity(theta_segments as usize * 6);
        for i in 0..theta_segments {
            let a = i;
            let b = i + columns;
            let c = i + columns + 1;
            let d = i + 1;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }

        Self {
            inner_radius,
            outer_radius,
            theta_segments,
            positions,
            uvs,
            indices,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Geometry attached to a mesh node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Geometry {
    Sphere(SphereGeometry),
    Ring(RingGeometry),
    /// Open or closed polyline through the given points.
    Polyline(Vec<Vec3>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_vertex_layout() {
        let ring = RingGeometry::new(12.0, 22.0, 64);
        assert_eq!(ring.positions.len(), 2 * 65);
        assert_eq!(ring.uvs.len(), ring.positions.len());
        assert_eq!(ring.triangle_count(), 128);
        assert!(ring.positions.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_ring_radii() {
        let ring = RingGeometry::new(12.0, 22.0, 64);
        let (inner, outer) = ring.positions.split_at(65);
        assert!(inner.iter().all(|p| (p.length() - 12.0).abs() < 1e-4));
        assert!(outer.iter().all(|p| (p.length() - 22.0).abs() < 1e-4));
    }

    #[test]
    fn test_ring_uv_remap() {
        let ring = RingGeometry::new(12.0, 22.0, 64);
        for (p, uv) in ring.positions.iter().zip(&ring.uvs) {
            let expected_u = if p.length() < 17.0 { 0.0 } else { 1.0 };
            assert_eq!(uv.x, expected_u);
            assert_eq!(uv.y, 1.0);
        }
    }

    #[test]
    fn test_serialized_ring_keeps_uv_remap() {
        let ring = RingGeometry::new(12.0, 22.0, 8);
        let json = serde_json::to_value(Geometry::Ring(ring.clone())).unwrap();
        let body = &json["Ring"];

        let uvs = body["uvs"].as_array().unwrap();
        assert_eq!(uvs.len(), ring.uvs.len());
        assert_eq!(uvs[0], serde_json::json!([0.0, 1.0]));
        assert_eq!(uvs[9], serde_json::json!([1.0, 1.0]));
        assert_eq!(body["positions"].as_array().unwrap().len(), 18);
        assert_eq!(body["indices"].as_array().unwrap().len(), ring.indices.len());
    }

    #[test]
    fn test_ring_indices_in_bounds() {
        let ring = RingGeometry::new(12.0, 22.0, 64);
        let max = ring.positions.len() as u32;
        assert!(ring.indices.iter().all(|&i| i < max));
    }

    #[test]
    fn test_sphere_counts() {
        let sphere = SphereGeometry::body(1.0);
        assert_eq!(sphere.vertex_count(), 33 * 33);
        assert_eq!(sphere.triangle_count(), 32 * 32 * 2 - 64);
    }

    #[test]
    fn test_sphere_minimum_segments() {
        let sphere = SphereGeometry::new(1.0, 1, 1);
        assert_eq!(sphere.width_segments, 3);
        assert_eq!(sphere.height_segments, 2);
    }
}
