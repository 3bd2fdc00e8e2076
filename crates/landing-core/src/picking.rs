use crate::camera::Camera;
use crate::pointer::PointerSample;
use crate::selection::LabelId;
use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Rectangle in a label's local XY plane (z = 0). The text baseline sits on
/// y = 0 and the text starts at x = 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl LabelRect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[inline]
/// Compute a world-space ray through a normalized pointer position.
///
/// The ray starts at the camera eye and passes through the far-plane point
/// under the pointer.
pub fn pointer_ray(camera: &Camera, pointer: PointerSample) -> Ray {
    let inv = camera.view_projection().inverse();
    let p_far = inv * Vec4::new(pointer.x, pointer.y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let ro = camera.eye;
    Ray {
        origin: ro,
        dir: (p1 - ro).normalize(),
    }
}

/// Distance along `ray` to the label rectangle placed by the rigid transform
/// `label_to_world`, if hit from either side.
pub fn ray_label_hit(ray: Ray, label_to_world: Mat4, rect: LabelRect) -> Option<f32> {
    let world_to_label = label_to_world.inverse();
    let o = world_to_label.transform_point3(ray.origin);
    let d = world_to_label.transform_vector3(ray.dir);
    if d.z.abs() < 1e-6 {
        return None;
    }
    let t = -o.z / d.z;
    if t < 0.0 {
        return None;
    }
    let p = o + d * t;
    rect.contains(Vec2::new(p.x, p.y)).then_some(t)
}

/// Nearest label hit by `ray`.
pub fn pick_nearest<I>(ray: Ray, labels: I) -> Option<(LabelId, f32)>
where
    I: IntoIterator<Item = (LabelId, Mat4, LabelRect)>,
{
    let mut best = None::<(LabelId, f32)>;
    for (id, xf, rect) in labels {
        if let Some(t) = ray_label_hit(ray, xf, rect) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((id, t)),
            }
        }
    }
    best
}
