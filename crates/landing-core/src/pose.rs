//! Pointer-driven tilt, idle wobble and vertical bob of the centre model.

use crate::constants::{
    BOB_AMPLITUDE, TILT_GAIN, WOBBLE_AMPLITUDE, WOBBLE_FREQ_X, WOBBLE_FREQ_Y,
};
use crate::pointer::PointerSample;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModelPose {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub position_y: f32,
}

impl ModelPose {
    /// Group transform: bob translation, then X and Y rotation (XYZ order).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, self.position_y, 0.0))
            * Mat4::from_rotation_x(self.rotation_x)
            * Mat4::from_rotation_y(self.rotation_y)
    }
}

/// Tilt toward the pointer. Bounded to ±`TILT_GAIN` for samples in [-1, 1].
#[inline]
pub fn target_rotation(pointer: PointerSample) -> (f32, f32) {
    (-pointer.y * TILT_GAIN, pointer.x * TILT_GAIN)
}

/// Small oscillation on two unrelated frequencies so the axes never sync up.
#[inline]
pub fn wobble(elapsed_sec: f32) -> (f32, f32) {
    (
        (elapsed_sec * WOBBLE_FREQ_X).sin() * WOBBLE_AMPLITUDE,
        (elapsed_sec * WOBBLE_FREQ_Y).sin() * WOBBLE_AMPLITUDE,
    )
}

pub fn model_pose(pointer: PointerSample, elapsed_sec: f32) -> ModelPose {
    let (tx, ty) = target_rotation(pointer);
    let (wx, wy) = wobble(elapsed_sec);
    ModelPose {
        rotation_x: tx + wx,
        rotation_y: ty + wy,
        position_y: elapsed_sec.sin() * BOB_AMPLITUDE,
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box enclosing all points, `None` when there are none.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (min, max) = it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Translation that moves the centre of the scaled box onto the origin.
#[inline]
pub fn recenter_offset(bounds: &Aabb, scale: f32) -> Vec3 {
    -(bounds.center() * scale)
}
