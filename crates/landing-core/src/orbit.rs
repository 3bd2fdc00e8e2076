//! Circular label motion around the scene origin.

use glam::{Mat4, Vec3};

/// Static orbit parameters of one label.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    pub radius: f32,
    /// Angular speed in radians per second.
    pub speed: f32,
    /// Phase offset in radians.
    pub phase: f32,
}

/// Placement of a label on its orbit at a given instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPose {
    pub position: Vec3,
    /// Rotation about +Y so the label's local +Z points away from the origin.
    pub yaw: f32,
}

impl OrbitPose {
    /// Label-to-world transform: translation then yaw.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_rotation_y(self.yaw)
    }
}

#[inline]
pub fn orbit_angle(elapsed_sec: f32, params: &OrbitParams) -> f32 {
    elapsed_sec * params.speed + params.phase
}

/// Position on the XZ circle and facing of a label at `elapsed_sec`.
#[inline]
pub fn orbit_pose(elapsed_sec: f32, params: &OrbitParams) -> OrbitPose {
    let t = orbit_angle(elapsed_sec, params);
    let position = Vec3::new(t.cos() * params.radius, 0.0, t.sin() * params.radius);
    OrbitPose {
        position,
        yaw: position.x.atan2(position.z),
    }
}
