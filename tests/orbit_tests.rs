// Host-side tests for label orbits.

use glam::Vec3;
use landing_core::*;
use std::f32::consts::{FRAC_PI_2, PI};

const EPS: f32 = 1e-4;

fn params(phase: f32) -> OrbitParams {
    OrbitParams {
        radius: LABEL_ORBIT_RADIUS,
        speed: LABEL_ORBIT_SPEED,
        phase,
    }
}

#[test]
fn labels_start_a_quarter_turn_apart() {
    let expected = [
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(-3.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -3.0),
    ];
    for ((_, phase), want) in DEFAULT_LABELS.iter().zip(expected) {
        let p = orbit_pose(0.0, &params(*phase)).position;
        assert!(p.distance(want) < EPS, "{p:?} != {want:?}");
    }
}

#[test]
fn orbit_angle_advances_linearly() {
    let p = params(FRAC_PI_2);
    assert!((orbit_angle(0.0, &p) - FRAC_PI_2).abs() < EPS);
    assert!((orbit_angle(10.0, &p) - (3.0 + FRAC_PI_2)).abs() < EPS);
}

#[test]
fn position_stays_on_the_horizontal_circle() {
    let p = params(0.7);
    for i in 0..50 {
        let t = i as f32 * 0.37;
        let pos = orbit_pose(t, &p).position;
        assert_eq!(pos.y, 0.0);
        assert!((pos.length() - LABEL_ORBIT_RADIUS).abs() < EPS);
    }
}

#[test]
fn full_period_returns_to_start() {
    let p = params(0.0);
    let period = 2.0 * PI / LABEL_ORBIT_SPEED;
    let a = orbit_pose(1.0, &p).position;
    let b = orbit_pose(1.0 + period, &p).position;
    assert!(a.distance(b) < 1e-3);
}

#[test]
fn label_faces_away_from_origin() {
    for i in 0..8 {
        let pose = orbit_pose(i as f32, &params(0.3));
        let facing = pose.transform().transform_vector3(Vec3::Z);
        let outward = pose.position.normalize();
        assert!(facing.dot(outward) > 1.0 - EPS);
    }
}

#[test]
fn label_facing_the_camera_has_no_yaw() {
    // "Contact" sits on +Z at t = 0.
    let pose = orbit_pose(0.0, &params(FRAC_PI_2));
    assert!(pose.yaw.abs() < EPS);
}

#[test]
fn first_label_starts_on_x_axis_turned_sideways() {
    let pose = orbit_pose(0.0, &params(0.0));
    assert!(pose.position.distance(Vec3::new(3.0, 0.0, 0.0)) < EPS);
    assert!((pose.yaw - FRAC_PI_2).abs() < EPS);
}
