// Host-side tests for scene configuration defaults and tuning constants.

use glam::Vec3;
use landing_core::*;
use std::f32::consts::PI;

#[test]
fn default_labels_match_constants() {
    let labels = default_labels();
    assert_eq!(labels.len(), DEFAULT_LABELS.len());
    for (spec, (text, phase)) in labels.iter().zip(DEFAULT_LABELS) {
        assert_eq!(spec.text, text);
        assert_eq!(spec.orbit.phase, phase);
        assert_eq!(spec.orbit.radius, LABEL_ORBIT_RADIUS);
        assert_eq!(spec.orbit.speed, LABEL_ORBIT_SPEED);
    }
}

#[test]
fn label_phases_are_evenly_spaced() {
    for w in DEFAULT_LABELS.windows(2) {
        assert!((w[1].1 - w[0].1 - PI / 2.0).abs() < 1e-6);
    }
}

#[test]
fn camera_defaults() {
    let c = CameraConfig::default();
    assert_eq!(c.position, Vec3::new(0.0, 0.0, 8.0));
    assert_eq!(c.target, Vec3::ZERO);
    assert!((c.fovy_radians - 60f32.to_radians()).abs() < 1e-6);
    assert!(c.znear > 0.0 && c.zfar > c.znear);
    assert!(c.min_distance <= c.position.length() && c.position.length() <= c.max_distance);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(LABEL_ORBIT_RADIUS > 0.0);
    assert!(LABEL_ORBIT_SPEED > 0.0);
    assert!(TILT_GAIN > 0.0 && TILT_GAIN < PI / 2.0);
    assert!(WOBBLE_AMPLITUDE < TILT_GAIN);
    assert!(WOBBLE_FREQ_X != WOBBLE_FREQ_Y);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
    assert!(ORBIT_PITCH_LIMIT < PI / 2.0);
    assert!(CLICK_DRAG_TOLERANCE_PX >= 0.0);
    // stars sit well beyond the labels and inside the far plane
    assert!(STAR_RADIUS > LABEL_ORBIT_RADIUS + CAMERA_POSITION[2]);
    assert!(STAR_RADIUS + STAR_DEPTH + ORBIT_MAX_DISTANCE < CAMERA_ZFAR);
}

#[test]
fn lighting_and_model_defaults() {
    let l = LightingConfig::default();
    assert_eq!(l.ambient, AMBIENT_INTENSITY);
    assert_eq!(l.directional_position, Vec3::new(5.0, 5.0, 5.0));
    assert_eq!(l.background, Vec3::ZERO);

    let m = ModelConfig::default();
    assert!(m.obj_path.ends_with(".obj"));
    assert!(m.mtl_path.ends_with(".mtl"));
    assert_eq!(m.scale, MODEL_SCALE);
}

#[test]
fn scene_config_can_be_overridden() {
    let cfg = SceneConfig {
        labels: default_labels().into_iter().take(2).collect(),
        ..SceneConfig::default()
    };
    let scene = SceneState::new(cfg);
    assert_eq!(scene.labels().len(), 2);
    assert_eq!(scene.selection().visual(LabelId(1)), LabelVisual::Idle);
}
