//! Scene lighting: a dim ambient term and the Sun as a point light.

use glam::Vec3;
use serde::Serialize;

use crate::material::Color;

/// Uniform light applied to every surface.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AmbientLight {
    pub color: Color,
    pub intensity: f32,
}

/// Omnidirectional light with a finite range.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointLight {
    pub color: Color,
    pub intensity: f32,
    /// Beyond this distance the light contributes nothing. 0 = unlimited.
    pub range: f32,
    pub position: Vec3,
}

impl PointLight {
    /// Relative strength at `distance` from the light, in `[0, 1]`.
    ///
    /// Inverse-square falloff windowed to reach zero at `range`.
    pub fn attenuation(&self, distance: f32) -> f32 {
        let inv_sq = 1.0 / (distance * distance + 1.0);
        if self.range <= 0.0 {
            return inv_sq;
        }
        if distance >= self.range {
            return 0.0;
        }
        let ratio = distance / self.range;
        let t = (1.0 - ratio * ratio).max(0.0);
        inv_sq * t * t
    }

    /// Irradiance reaching a point, scaled by intensity.
    pub fn irradiance_at(&self, point: Vec3) -> f32 {
        self.intensity * self.attenuation(point.distance(self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun_light() -> PointLight {
        PointLight {
            color: Color::WHITE,
            intensity: 15_000.0,
            range: 500.0,
            position: Vec3::ZERO,
        }
    }

    #[test]
    fn test_attenuation_monotonic() {
        let light = sun_light();
        let mut previous = f32::MAX;
        for d in [0.0, 50.0, 75.0, 120.0, 220.0, 400.0] {
            let a = light.attenuation(d);
            assert!(a < previous, "attenuation must fall with distance");
            previous = a;
        }
    }

    #[test]
    fn test_zero_beyond_range() {
        let light = sun_light();
        assert_eq!(light.attenuation(500.0), 0.0);
        assert_eq!(light.irradiance_at(Vec3::new(0.0, 0.0, 800.0)), 0.0);
    }

    #[test]
    fn test_unbounded_range() {
        let light = PointLight {
            range: 0.0,
            ..sun_light()
        };
        assert!(light.attenuation(10_000.0) > 0.0);
    }
}
