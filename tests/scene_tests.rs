// Host-side tests for the scene state: hover, click, drag, zoom and the model slot.

use glam::{Vec2, Vec3};
use landing_core::*;

const EPS: f32 = 1e-4;
const VP: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

fn scene() -> SceneState {
    let mut s = SceneState::new(SceneConfig::default());
    s.set_viewport(VP);
    s
}

/// Client pixel position of a world point under the current camera.
fn client_for(s: &SceneState, world: Vec3) -> Vec2 {
    let ndc = s.camera().view_projection().project_point3(world);
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * VP.width,
        (1.0 - ndc.y) * 0.5 * VP.height,
    )
}

/// A point on the "Contact" label, which faces the camera at t = 0.
fn on_contact(s: &SceneState) -> Vec2 {
    client_for(s, Vec3::new(0.8, 0.2, LABEL_ORBIT_RADIUS))
}

fn moved(client: Vec2) -> InputEvent {
    InputEvent::PointerMoved {
        client,
        viewport: VP,
    }
}

fn down(client: Vec2) -> InputEvent {
    InputEvent::PointerDown {
        client,
        viewport: VP,
    }
}

fn up(client: Vec2) -> InputEvent {
    InputEvent::PointerUp {
        client,
        viewport: VP,
    }
}

fn drawable(id: u64, bounds: Aabb) -> AssetState<Drawable> {
    AssetState::Ready(Drawable {
        id: DrawableId(id),
        bounds,
        scale: MODEL_SCALE,
    })
}

#[test]
fn default_scene_has_four_labels() {
    let s = scene();
    let texts: Vec<_> = s.labels().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, ["Projects", "Contact", "Experience", "About Me"]);
    assert_eq!(s.label_id("Contact"), Some(LabelId(1)));
    assert_eq!(s.label_id("Blog"), None);
    assert_eq!(s.selected_text(), None);
}

#[test]
fn hover_enters_and_leaves() {
    let mut s = scene();
    let contact = s.label_id("Contact").unwrap();
    let p = on_contact(&s);

    let ev = s.apply(moved(p));
    assert_eq!(ev.as_slice(), &[LabelEvent::Enter(contact)]);
    assert!(s.selection().is_hovered(contact));

    // moving within the label emits nothing new
    assert!(s.apply(moved(p + Vec2::new(2.0, 0.0))).is_empty());

    let ev = s.apply(moved(Vec2::new(5.0, 5.0)));
    assert_eq!(ev.as_slice(), &[LabelEvent::Leave(contact)]);
    assert!(!s.selection().is_hovered(contact));
}

#[test]
fn pointer_leaving_page_clears_hover() {
    let mut s = scene();
    let p = on_contact(&s);
    s.apply(moved(p));
    let ev = s.apply(InputEvent::PointerLeft);
    assert_eq!(ev.len(), 1);
    assert!(matches!(ev[0], LabelEvent::Leave(_)));
    assert!(s.apply(InputEvent::PointerLeft).is_empty());
}

#[test]
fn click_selects_then_reclick_clears() {
    let mut s = scene();
    let p = on_contact(&s);
    let contact = s.label_id("Contact").unwrap();

    s.apply(down(p));
    let ev = s.apply(up(p));
    assert!(ev.contains(&LabelEvent::Click(contact)));
    assert_eq!(s.selected_text(), Some("Contact"));

    let ev = s.apply_all([down(p), up(p)]);
    assert!(ev.contains(&LabelEvent::Click(contact)));
    assert_eq!(s.selected_text(), None);
}

#[test]
fn small_jitter_still_clicks() {
    let mut s = scene();
    let p = on_contact(&s);
    let jitter = p + Vec2::new(2.0, 1.0);
    s.apply_all([down(p), moved(jitter), up(jitter)]);
    assert_eq!(s.selected_text(), Some("Contact"));
}

#[test]
fn drag_rotates_camera_without_clicking() {
    let mut s = scene();
    let p = on_contact(&s);
    let yaw0 = s.controls().yaw;
    let ev = s.apply_all([down(p), moved(p + Vec2::new(40.0, 0.0)), up(p)]);
    assert!(!ev.iter().any(|e| matches!(e, LabelEvent::Click(_))));
    assert_eq!(s.selection().selected(), None);
    assert!((s.controls().yaw - yaw0).abs() > 0.1);
}

#[test]
fn release_over_another_spot_does_not_click() {
    let mut s = scene();
    let p = on_contact(&s);
    s.apply(down(p));
    let ev = s.apply(up(Vec2::new(5.0, 5.0)));
    assert!(ev.iter().all(|e| !matches!(e, LabelEvent::Click(_))));
    assert_eq!(s.selected_text(), None);
}

#[test]
fn press_on_empty_space_never_selects() {
    let mut s = scene();
    let empty = Vec2::new(5.0, 5.0);
    s.apply_all([down(empty), up(empty)]);
    assert_eq!(s.selected_text(), None);
}

#[test]
fn plain_moves_do_not_rotate_camera() {
    let mut s = scene();
    let before = s.controls().clone();
    s.apply_all([moved(Vec2::new(10.0, 10.0)), moved(Vec2::new(700.0, 500.0))]);
    assert_eq!(s.controls(), &before);
}

#[test]
fn wheel_zoom_changes_distance() {
    let mut s = scene();
    let d0 = s.controls().distance;
    s.apply(InputEvent::Wheel { delta_y: 120.0 });
    assert!(s.controls().distance > d0);
    s.apply(InputEvent::Wheel { delta_y: -120.0 });
    assert!((s.controls().distance - d0).abs() < EPS);
}

#[test]
fn label_events_pass_through() {
    let mut s = scene();
    s.apply(InputEvent::Label(LabelEvent::Click(LabelId(3))));
    assert_eq!(s.selected_text(), Some("About Me"));
    s.apply(InputEvent::Label(LabelEvent::Click(LabelId(42))));
    assert_eq!(s.selected_text(), Some("About Me"));
}

#[test]
fn pointer_drives_model_tilt() {
    let mut s = scene();
    s.apply(moved(Vec2::new(VP.width, VP.height * 0.5)));
    let snap = s.tick(0.0);
    assert!((snap.pose.rotation_y - TILT_GAIN).abs() < EPS);
    assert!(snap.pose.rotation_x.abs() < EPS);
}

#[test]
fn tick_places_labels_on_orbit() {
    let mut s = scene();
    let snap = s.tick(3.0);
    assert_eq!(snap.labels.len(), 4);
    assert!((snap.elapsed_sec - 3.0).abs() < EPS);
    for (frame, label) in snap.labels.iter().zip(s.labels()) {
        let pos = frame.transform.transform_point3(Vec3::ZERO);
        assert!((pos.length() - LABEL_ORBIT_RADIUS).abs() < EPS);
        let want = orbit_pose(3.0, &label.orbit).position;
        assert!(pos.distance(want) < EPS);
    }
}

#[test]
fn snapshot_colors_follow_selection() {
    let mut s = scene();
    let p = on_contact(&s);
    s.apply_all([moved(p), down(p), up(p)]);
    let snap = s.tick(0.0);
    let by_id = |id: usize| snap.labels.iter().find(|l| l.id == LabelId(id)).unwrap();
    let contact = by_id(1);
    assert_eq!(contact.visual, LabelVisual::Selected);
    assert_eq!(contact.color, LabelVisual::Selected.color());
    assert_eq!(by_id(0).visual, LabelVisual::Idle);
    assert_eq!(snap.selected, Some(LabelId(1)));
}

#[test]
fn measured_rect_replaces_estimate() {
    let mut s = scene();
    let rect = LabelRect::new(Vec2::new(-0.1, -0.2), Vec2::new(4.0, 0.6));
    s.set_label_rect(LabelId(2), rect);
    assert_eq!(s.labels()[2].rect, rect);
    // out of range is ignored
    s.set_label_rect(LabelId(9), rect);
    assert_eq!(s.labels().len(), 4);
}

#[test]
fn model_absent_until_ready() {
    let mut s = scene();
    assert!(s.tick(0.5).model.is_none());
    s.set_model(AssetState::Pending);
    assert!(s.tick(0.6).model.is_none());
}

#[test]
fn failed_model_keeps_rendering_without_it() {
    let mut s = scene();
    s.set_model(AssetState::Failed(AssetError::Fetch {
        path: "/ironman.obj".into(),
        reason: "HTTP 404".into(),
    }));
    let snap = s.tick(1.0);
    assert!(snap.model.is_none());
    assert_eq!(snap.labels.len(), 4);
}

#[test]
fn ready_model_is_centered_on_pose_origin() {
    let mut s = scene();
    let bounds = Aabb::new(Vec3::new(-20.0, 0.0, -10.0), Vec3::new(40.0, 180.0, 30.0));
    s.set_model(drawable(1, bounds));
    let snap = s.tick(1.3);
    let model = snap.model.unwrap();
    let center = model.transform_point3(bounds.center());
    let pivot = snap.pose.matrix().transform_point3(Vec3::ZERO);
    assert!(center.distance(pivot) < EPS);
}

#[test]
fn recentering_happens_once_per_drawable() {
    let mut s = scene();
    let a = Aabb::new(Vec3::ZERO, Vec3::splat(10.0));
    s.set_model(drawable(1, a));
    let off = s.model().offset();
    assert!((off + a.center() * MODEL_SCALE).length() < EPS);

    // same drawable observed again with different bounds: no re-centering
    let moved_box = Aabb::new(Vec3::splat(100.0), Vec3::splat(120.0));
    s.set_model(drawable(1, moved_box));
    assert_eq!(s.model().offset(), off);

    // a new drawable gets its own offset
    s.set_model(drawable(2, moved_box));
    assert!((s.model().offset() + moved_box.center() * MODEL_SCALE).length() < EPS);
}

#[test]
fn clicking_projects_twice_toggles() {
    let mut s = scene();
    let projects = s.label_id("Projects").unwrap();
    assert_eq!(s.selection().selected(), None);
    s.apply(InputEvent::Label(LabelEvent::Click(projects)));
    assert_eq!(s.selection().selected(), Some(projects));
    s.apply(InputEvent::Label(LabelEvent::Click(projects)));
    assert_eq!(s.selection().selected(), None);
}

#[test]
fn picking_label_center_yields_that_label() {
    let mut s = scene();
    let contact = s.labels()[1].clone();
    let c = contact.rect.center();
    let world = contact.transform().transform_point3(Vec3::new(c.x, c.y, 0.0));
    let ev = s.apply(moved(client_for(&s, world)));
    assert_eq!(ev.as_slice(), &[LabelEvent::Enter(contact.id)]);
}

#[test]
fn replayed_events_give_identical_frames() {
    let run = || {
        let mut s = scene();
        let p = on_contact(&s);
        let events = [
            moved(p),
            down(p),
            up(p),
            InputEvent::Wheel { delta_y: 100.0 },
            moved(Vec2::new(600.0, 100.0)),
            down(Vec2::new(600.0, 100.0)),
            moved(Vec2::new(650.0, 120.0)),
            up(Vec2::new(650.0, 120.0)),
        ];
        let mut out = Vec::new();
        for (i, ev) in events.into_iter().enumerate() {
            s.apply(ev);
            let snap = s.tick(i as f32 * 0.016);
            out.push((snap.view, snap.model, snap.selected, snap.pose));
        }
        out
    };
    assert_eq!(run(), run());
}

#[test]
fn labels_arrive_far_to_near() {
    let mut s = scene();
    let quarter_turn = std::f32::consts::FRAC_PI_2 / LABEL_ORBIT_SPEED;
    for t in [0.0, 1.7, quarter_turn, 2.0 * quarter_turn, 7.3] {
        let snap = s.tick(t);
        let depths: Vec<f32> = snap
            .labels
            .iter()
            .map(|l| snap.view.transform_point3(l.transform.w_axis.truncate()).z)
            .collect();
        assert_eq!(depths.len(), 4);
        for pair in depths.windows(2) {
            assert!(pair[0] <= pair[1], "t={t}: {depths:?}");
        }
    }
}

#[test]
fn sorting_keeps_each_label_with_its_own_color() {
    let mut s = scene();
    let contact = s.label_id("Contact").unwrap();
    s.apply(InputEvent::Label(LabelEvent::Enter(contact)));
    let snap = s.tick(std::f32::consts::FRAC_PI_2 / LABEL_ORBIT_SPEED);
    for l in &snap.labels {
        assert_eq!(l.visual, s.selection().visual(l.id));
    }
    let ids: std::collections::BTreeSet<usize> = snap.labels.iter().map(|l| l.id.0).collect();
    assert_eq!(ids.len(), 4);
}

#[test]
fn loaded_mesh_maps_to_drawable_and_failures_pass_through() {
    let bounds = Aabb::new(Vec3::ZERO, Vec3::ONE);
    let ready: AssetState<Aabb> = Ok(bounds).into();
    let mapped = ready.map(|b| Drawable {
        id: DrawableId(7),
        bounds: b,
        scale: 0.5,
    });
    assert_eq!(mapped.ready().map(|d| d.id), Some(DrawableId(7)));

    let err = AssetError::Empty {
        path: "/ironman.obj".into(),
    };
    let failed: AssetState<Aabb> = Err(err.clone()).into();
    assert_eq!(failed.map(|_| 1u8), AssetState::Failed(err));
    assert_eq!(AssetState::<Aabb>::Pending.map(|_| 1u8), AssetState::Pending);
}
