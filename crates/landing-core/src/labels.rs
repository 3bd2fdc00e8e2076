use crate::constants::{LABEL_GLYPH_ADVANCE, LABEL_TEXT_SIZE};
use crate::orbit::{orbit_pose, OrbitParams, OrbitPose};
use crate::picking::LabelRect;
use crate::selection::LabelId;
use glam::{Mat4, Vec2};

/// Compile-time description of one label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSpec {
    pub text: String,
    pub orbit: OrbitParams,
}

/// A label at runtime: fixed orbit, last computed pose and its quad.
#[derive(Clone, Debug)]
pub struct OrbitingLabel {
    pub id: LabelId,
    pub text: String,
    pub orbit: OrbitParams,
    pub pose: OrbitPose,
    pub rect: LabelRect,
}

impl OrbitingLabel {
    pub fn new(id: LabelId, spec: &LabelSpec) -> Self {
        Self {
            id,
            text: spec.text.clone(),
            orbit: spec.orbit,
            pose: orbit_pose(0.0, &spec.orbit),
            rect: estimated_rect(&spec.text),
        }
    }

    pub fn advance(&mut self, elapsed_sec: f32) {
        self.pose = orbit_pose(elapsed_sec, &self.orbit);
    }

    pub fn transform(&self) -> Mat4 {
        self.pose.transform()
    }
}

/// Rough quad for `text` until the host measures the real glyphs.
pub fn estimated_rect(text: &str) -> LabelRect {
    let glyphs = text.chars().count().max(1) as f32;
    LabelRect::new(
        Vec2::new(0.0, -0.25 * LABEL_TEXT_SIZE),
        Vec2::new(glyphs * LABEL_GLYPH_ADVANCE * LABEL_TEXT_SIZE, LABEL_TEXT_SIZE),
    )
}
