//! Perspective camera and orbit controls around the scene origin.

use crate::constants::{
    ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_PITCH_LIMIT, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_STEP,
};
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Spherical camera placement: yaw about +Y, pitch above the XZ plane.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitControls {
    /// Controls that reproduce a camera placed at `eye` looking at `target`.
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-3);
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
            target,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// Rotate by a drag of `dx`, `dy` pixels; a drag across the full viewport
    /// height turns a full circle.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        if viewport_height <= 0.0 {
            return;
        }
        let k = TAU * ORBIT_ROTATE_SPEED / viewport_height;
        self.yaw -= dx * k;
        self.pitch = (self.pitch + dy * k).clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    /// Wheel zoom: scrolling down moves away, up moves closer.
    pub fn zoom(&mut self, delta_y: f32) {
        if delta_y == 0.0 {
            return;
        }
        let factor = if delta_y > 0.0 {
            1.0 / ORBIT_ZOOM_STEP
        } else {
            ORBIT_ZOOM_STEP
        };
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    pub fn camera(&self, aspect: f32, fovy_radians: f32, znear: f32, zfar: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians,
            znear,
            zfar,
        }
    }
}
