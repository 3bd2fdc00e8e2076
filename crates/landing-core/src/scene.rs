//! Whole-scene state: labels, pointer, selection, model slot and camera.
//!
//! The host feeds input through [`SceneState::apply`] and calls
//! [`SceneState::tick`] once per frame with the elapsed session time. Both are
//! plain functions of the current state and their arguments; nothing here
//! blocks or touches the platform.

use crate::asset::{AssetState, Drawable, ModelSlot};
use crate::camera::{Camera, OrbitControls};
use crate::config::SceneConfig;
use crate::events::{InputEvent, LabelEvent};
use crate::labels::OrbitingLabel;
use crate::picking::{pick_nearest, pointer_ray, LabelRect};
use crate::pointer::{normalize_pointer, PointerSample, PointerTracker, Viewport};
use crate::pose::{model_pose, ModelPose};
use crate::selection::{LabelId, LabelVisual, SelectionState};
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// Label events produced while applying one input event.
pub type LabelEvents = SmallVec<[LabelEvent; 4]>;

#[derive(Clone, Debug)]
pub struct LabelFrame {
    pub id: LabelId,
    pub transform: Mat4,
    pub rect: LabelRect,
    pub visual: LabelVisual,
    /// Linear color for the current visual.
    pub color: Vec3,
}

/// View-space z of a label's anchor; more negative is farther from the eye.
fn view_depth(view: Mat4, label: &LabelFrame) -> f32 {
    view.transform_point3(label.transform.w_axis.truncate()).z
}

/// Render-ready output of one tick.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub elapsed_sec: f32,
    pub view: Mat4,
    pub projection: Mat4,
    pub eye: Vec3,
    /// Ordered far to near from the eye.
    pub labels: Vec<LabelFrame>,
    pub pose: ModelPose,
    /// World matrix of the model; `None` while it is pending or failed.
    pub model: Option<Mat4>,
    pub selected: Option<LabelId>,
}

impl FrameSnapshot {
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[derive(Clone, Copy, Debug)]
struct Press {
    start: Vec2,
    last: Vec2,
    travel: f32,
    label: Option<LabelId>,
}

pub struct SceneState {
    config: SceneConfig,
    labels: Vec<OrbitingLabel>,
    pointer: PointerTracker,
    selection: SelectionState,
    model: ModelSlot,
    controls: OrbitControls,
    viewport: Viewport,
    hover_target: Option<LabelId>,
    press: Option<Press>,
    pose: ModelPose,
    elapsed_sec: f32,
}

impl SceneState {
    pub fn new(config: SceneConfig) -> Self {
        let labels = config
            .labels
            .iter()
            .enumerate()
            .map(|(i, spec)| OrbitingLabel::new(LabelId(i), spec))
            .collect::<Vec<_>>();
        let mut controls = OrbitControls::looking_from(config.camera.position, config.camera.target);
        controls.min_distance = config.camera.min_distance;
        controls.max_distance = config.camera.max_distance;
        let selection = SelectionState::new(labels.len());
        Self {
            config,
            labels,
            pointer: PointerTracker::default(),
            selection,
            model: ModelSlot::default(),
            controls,
            viewport: Viewport::new(1.0, 1.0),
            hover_target: None,
            press: None,
            pose: ModelPose::default(),
            elapsed_sec: 0.0,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn labels(&self) -> &[OrbitingLabel] {
        &self.labels
    }

    pub fn label_id(&self, text: &str) -> Option<LabelId> {
        self.labels.iter().find(|l| l.text == text).map(|l| l.id)
    }

    pub fn pointer(&self) -> PointerSample {
        self.pointer.sample()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected_text(&self) -> Option<&str> {
        let id = self.selection.selected()?;
        self.labels.get(id.0).map(|l| l.text.as_str())
    }

    pub fn model(&self) -> &ModelSlot {
        &self.model
    }

    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    pub fn pose(&self) -> ModelPose {
        self.pose
    }

    /// Size of the drawing surface, used for the camera aspect.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if !viewport.is_empty() {
            self.viewport = viewport;
        }
    }

    /// Replace a label's quad once the host has measured its text.
    pub fn set_label_rect(&mut self, id: LabelId, rect: LabelRect) {
        if let Some(l) = self.labels.get_mut(id.0) {
            l.rect = rect;
        }
    }

    pub fn set_model(&mut self, state: AssetState<Drawable>) {
        self.model.set(state);
    }

    pub fn camera(&self) -> Camera {
        self.camera_with_aspect(self.viewport.aspect())
    }

    fn camera_with_aspect(&self, aspect: f32) -> Camera {
        let c = &self.config.camera;
        self.controls.camera(aspect, c.fovy_radians, c.znear, c.zfar)
    }

    /// Apply every event in arrival order.
    pub fn apply_all<I: IntoIterator<Item = InputEvent>>(&mut self, events: I) -> LabelEvents {
        let mut out = LabelEvents::new();
        for ev in events {
            out.extend(self.apply(ev));
        }
        out
    }

    /// Apply one input event and return the label events it produced.
    pub fn apply(&mut self, ev: InputEvent) -> LabelEvents {
        let mut out = LabelEvents::new();
        match ev {
            InputEvent::PointerMoved { client, viewport } => {
                let sample = self.pointer.track(client, viewport);
                if let Some(press) = self.press.as_mut() {
                    let d = client - press.last;
                    press.last = client;
                    press.travel = press.travel.max(client.distance(press.start));
                    self.controls.rotate_by_pixels(d.x, d.y, viewport.height);
                }
                if !viewport.is_empty() {
                    let hit = self.pick(sample, viewport.aspect());
                    self.set_hover_target(hit, &mut out);
                }
            }
            InputEvent::PointerDown { client, viewport } => {
                let label = normalize_pointer(client, viewport)
                    .and_then(|s| self.pick(s, viewport.aspect()));
                self.press = Some(Press {
                    start: client,
                    last: client,
                    travel: 0.0,
                    label,
                });
            }
            InputEvent::PointerUp { client, viewport } => {
                if let Some(press) = self.press.take() {
                    let travel = press.travel.max(client.distance(press.start));
                    let hit = normalize_pointer(client, viewport)
                        .and_then(|s| self.pick(s, viewport.aspect()));
                    if let Some(id) = press.label {
                        if hit == Some(id) && travel <= self.config.click_drag_tolerance_px {
                            out.push(LabelEvent::Click(id));
                        }
                    }
                }
            }
            InputEvent::PointerLeft => {
                self.press = None;
                self.set_hover_target(None, &mut out);
            }
            InputEvent::Wheel { delta_y } => self.controls.zoom(delta_y),
            InputEvent::Label(le) => out.push(le),
        }
        for le in &out {
            self.selection.apply(*le);
        }
        out
    }

    /// Advance to `elapsed_sec`: re-place labels, re-pose the model and
    /// produce the frame snapshot.
    pub fn tick(&mut self, elapsed_sec: f32) -> FrameSnapshot {
        self.elapsed_sec = elapsed_sec;
        for l in &mut self.labels {
            l.advance(elapsed_sec);
        }
        self.pose = model_pose(self.pointer.sample(), elapsed_sec);
        let model = self
            .model
            .local_matrix()
            .map(|local| self.pose.matrix() * local);
        let camera = self.camera();
        let view = camera.view_matrix();
        let mut labels: Vec<LabelFrame> = self
            .labels
            .iter()
            .map(|l| {
                let visual = self.selection.visual(l.id);
                LabelFrame {
                    id: l.id,
                    transform: l.transform(),
                    rect: l.rect,
                    visual,
                    color: visual.color(),
                }
            })
            .collect();
        // Far to near, so blended edges of a nearer label land on top.
        labels.sort_by(|a, b| view_depth(view, a).total_cmp(&view_depth(view, b)));
        FrameSnapshot {
            elapsed_sec,
            view,
            projection: camera.projection_matrix(),
            eye: camera.eye,
            labels,
            pose: self.pose,
            model,
            selected: self.selection.selected(),
        }
    }

    fn pick(&self, sample: PointerSample, aspect: f32) -> Option<LabelId> {
        let ray = pointer_ray(&self.camera_with_aspect(aspect), sample);
        pick_nearest(
            ray,
            self.labels.iter().map(|l| (l.id, l.transform(), l.rect)),
        )
        .map(|(id, _)| id)
    }

    fn set_hover_target(&mut self, target: Option<LabelId>, out: &mut LabelEvents) {
        if target == self.hover_target {
            return;
        }
        if let Some(old) = self.hover_target {
            out.push(LabelEvent::Leave(old));
        }
        if let Some(new) = target {
            out.push(LabelEvent::Enter(new));
        }
        self.hover_target = target;
    }
}
