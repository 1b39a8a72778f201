//! Orbit paths as parametric ellipses in the ecliptic (XZ) plane.
//!
//! A body's position is a point on its curve at parameter `t in [0, 1)`, where
//! `t` is the fractional orbital phase derived from elapsed wall-clock time.

use std::f64::consts::TAU;

use glam::DVec3;

/// Phase advance per millisecond for a body with a one-year period.
pub const ORBIT_SPEED_PER_MS: f64 = 0.000_01;

/// Unwrapped orbital progress after `elapsed_ms` for a body whose period is
/// `period_years` Earth years. One unit is one full orbit.
pub fn orbital_progress(period_years: f64, elapsed_ms: f64) -> f64 {
    if period_years <= 0.0 {
        return 0.0;
    }
    ORBIT_SPEED_PER_MS / period_years * elapsed_ms
}

/// Fractional orbital phase in `[0, 1)`.
pub fn orbital_phase(period_years: f64, elapsed_ms: f64) -> f64 {
    orbital_progress(period_years, elapsed_ms).rem_euclid(1.0)
}

/// An axis-aligned ellipse centered at the origin, swept counter-clockwise
/// from `start_angle` through `start_angle + sweep`.
#[derive(Clone, Debug, PartialEq)]
pub struct EllipseCurve {
    /// Semi-axis along world X.
    pub radius_x: f64,
    /// Semi-axis along world Z.
    pub radius_z: f64,
    /// Angle in radians at `t = 0`.
    pub start_angle: f64,
    /// Angular extent in radians. A closed orbit sweeps `TAU`.
    pub sweep: f64,
}

impl EllipseCurve {
    /// A closed orbit starting at `start_angle`.
    pub fn closed(radius_x: f64, radius_z: f64, start_angle: f64) -> Self {
        Self {
            radius_x,
            radius_z,
            start_angle,
            sweep: TAU,
        }
    }

    /// A circular closed orbit.
    pub fn circle(radius: f64, start_angle: f64) -> Self {
        Self::closed(radius, radius, start_angle)
    }

    /// Point on the curve at parameter `t` (0 = start, 1 = end).
    pub fn point_at(&self, t: f64) -> DVec3 {
        let angle = self.start_angle + t * self.sweep;
        DVec3::new(self.radius_x * angle.cos(), 0.0, self.radius_z * angle.sin())
    }

    /// `divisions + 1` points at equal parameter steps, first and last included.
    pub fn spaced_points(&self, divisions: usize) -> Vec<DVec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f64 / divisions as f64))
            .collect()
    }

    /// Whether the curve returns to its starting point.
    pub fn is_closed(&self) -> bool {
        (self.sweep.abs() - TAU).abs() < 1e-9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_wraps_each_period() {
        // Earth completes one orbit every 100 000 ms.
        assert!((orbital_phase(1.0, 25_000.0) - 0.25).abs() < 1e-12);
        let full = orbital_phase(1.0, 100_000.0);
        assert!(full < 1e-9 || full > 1.0 - 1e-9, "phase = {full}");
        assert!((orbital_phase(1.0, 150_000.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_shorter_period_orbits_faster() {
        let mercury = orbital_progress(0.24, 10_000.0);
        let earth = orbital_progress(1.0, 10_000.0);
        assert!((mercury / earth - 1.0 / 0.24).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_period_stays_put() {
        assert_eq!(orbital_phase(0.0, 5_000.0), 0.0);
        assert_eq!(orbital_phase(-1.0, 5_000.0), 0.0);
    }

    #[test]
    fn test_circle_is_constant_radius() {
        let curve = EllipseCurve::circle(75.0, 1.396);
        for i in 0..20 {
            let p = curve.point_at(i as f64 / 20.0);
            assert!((p.length() - 75.0).abs() < 1e-9, "r = {}", p.length());
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_start_angle_offsets_first_point() {
        let curve = EllipseCurve::circle(50.0, std::f64::consts::FRAC_PI_2);
        let p = curve.point_at(0.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.z - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_ellipse_axes() {
        let curve = EllipseCurve::closed(220.0, 195.0, 0.0);
        assert!((curve.point_at(0.0).x - 220.0).abs() < 1e-9);
        assert!((curve.point_at(0.25).z - 195.0).abs() < 1e-9);
    }

    #[test]
    fn test_spaced_points_close_the_loop() {
        let curve = EllipseCurve::closed(220.0, 195.0, 5.584);
        let points = curve.spaced_points(200);
        assert_eq!(points.len(), 201);
        assert!((points[0] - points[200]).length() < 1e-9);
        assert!(curve.is_closed());
    }
}
