//! Viewing camera and orbit-style controls.

use glam::{Mat4, Vec3};
use serde::Serialize;

/// Perspective camera looking at a target point.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerspectiveCamera {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub target: Vec3,
}

impl PerspectiveCamera {
    pub const DEFAULT_FOV_Y_DEGREES: f32 = 25.0;
    pub const DEFAULT_NEAR: f32 = 0.1;
    pub const DEFAULT_FAR: f32 = 1000.0;
    /// Starting pose: above the ecliptic and back along +Z.
    pub const HOME_POSITION: Vec3 = Vec3::new(0.0, 300.0, 650.0);

    /// Camera in its home pose for a viewport of the given size.
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            fov_y_degrees: Self::DEFAULT_FOV_Y_DEGREES,
            aspect: aspect_ratio(viewport_width, viewport_height),
            near: Self::DEFAULT_NEAR,
            far: Self::DEFAULT_FAR,
            position: Self::HOME_POSITION,
            target: Vec3::ZERO,
        }
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, viewport_width: u32, viewport_height: u32) {
        self.aspect = aspect_ratio(viewport_width, viewport_height);
    }

    /// Return to the home pose, keeping projection settings.
    pub fn reset(&mut self) {
        self.position = Self::HOME_POSITION;
        self.target = Vec3::ZERO;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}

/// Orbit controls: the camera circles a target and zooms within limits.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrbitControls {
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: 800.0,
        }
    }
}

impl OrbitControls {
    /// Pull or push the camera along its view ray into the allowed range.
    pub fn constrain(&self, camera: &mut PerspectiveCamera) {
        let offset = camera.position - camera.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        let clamped = distance.clamp(self.min_distance, self.max_distance);
        if clamped != distance {
            camera.position = camera.target + offset * (clamped / distance);
        }
    }

    /// Rotate the camera around the target by yaw (about +Y) and pitch.
    pub fn rotate(&self, camera: &mut PerspectiveCamera, yaw: f32, pitch: f32) {
        let offset = camera.position - camera.target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let mut theta = offset.x.atan2(offset.z) + yaw;
        let limit = std::f32::consts::FRAC_PI_2 - 1e-3;
        let mut phi = (offset.y / radius).clamp(-1.0, 1.0).asin() + pitch;
        phi = phi.clamp(-limit, limit);
        theta = theta.rem_euclid(std::f32::consts::TAU);

        camera.position = camera.target
            + Vec3::new(
                radius * phi.cos() * theta.sin(),
                radius * phi.sin(),
                radius * phi.cos() * theta.cos(),
            );
    }

    /// Zoom by `factor` (< 1 moves closer), respecting the distance limits.
    pub fn zoom(&self, camera: &mut PerspectiveCamera, factor: f32) {
        let offset = camera.position - camera.target;
        camera.position = camera.target + offset * factor.max(0.0);
        self.constrain(camera);
    }

    /// Re-target on `focus`, keeping the viewing direction, at `distance` away.
    pub fn jump_to(&self, camera: &mut PerspectiveCamera, focus: Vec3, distance: f32) {
        let direction = (camera.position - camera.target).normalize_or(Vec3::Z);
        camera.target = focus;
        camera.position = focus + direction * distance;
        self.constrain(camera);
    }
}
