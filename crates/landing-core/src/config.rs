//! Scene configuration assembled from the tuning constants.
//!
//! Hosts start from `SceneConfig::default()` and may override fields before
//! building the scene. The values are trusted as given; a negative radius or
//! an empty label list is a programming error, not a runtime condition.

use crate::constants::*;
use crate::labels::LabelSpec;
use crate::orbit::OrbitParams;
use crate::selection::srgb_hex_to_linear;
use crate::stars::StarfieldParams;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct CameraConfig {
    pub position: Vec3,
    pub target: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightingConfig {
    pub ambient: f32,
    pub directional_position: Vec3,
    pub directional_intensity: f32,
    /// Linear background color.
    pub background: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelConfig {
    pub obj_path: String,
    pub mtl_path: String,
    pub scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub labels: Vec<LabelSpec>,
    pub camera: CameraConfig,
    pub lighting: LightingConfig,
    pub stars: StarfieldParams,
    pub model: ModelConfig,
    pub click_drag_tolerance_px: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(CAMERA_POSITION),
            target: Vec3::ZERO,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INTENSITY,
            directional_position: Vec3::from_array(DIRECTIONAL_POSITION),
            directional_intensity: DIRECTIONAL_INTENSITY,
            background: srgb_hex_to_linear(COLOR_BACKGROUND),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            obj_path: MODEL_OBJ_PATH.to_string(),
            mtl_path: MODEL_MTL_PATH.to_string(),
            scale: MODEL_SCALE,
        }
    }
}

impl Default for StarfieldParams {
    fn default() -> Self {
        Self {
            radius: STAR_RADIUS,
            depth: STAR_DEPTH,
            count: STAR_COUNT,
            factor: STAR_FACTOR,
            saturation: STAR_SATURATION,
            lightness: STAR_LIGHTNESS,
            fade: true,
            speed: STAR_SPEED,
            seed: STAR_SEED,
        }
    }
}

pub fn default_labels() -> Vec<LabelSpec> {
    DEFAULT_LABELS
        .iter()
        .map(|&(text, phase)| LabelSpec {
            text: text.to_string(),
            orbit: OrbitParams {
                radius: LABEL_ORBIT_RADIUS,
                speed: LABEL_ORBIT_SPEED,
                phase,
            },
        })
        .collect()
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            labels: default_labels(),
            camera: CameraConfig::default(),
            lighting: LightingConfig::default(),
            stars: StarfieldParams::default(),
            model: ModelConfig::default(),
            click_drag_tolerance_px: CLICK_DRAG_TOLERANCE_PX,
        }
    }
}
