//! Load state of externally supplied drawables.
//!
//! Loading itself happens outside the core. The core only sees the outcome as
//! an explicit tagged value, so every frame can be computed without waiting on
//! anything: a pending or failed model simply draws nothing.

use crate::pose::{recenter_offset, Aabb};
use glam::{Mat4, Vec3};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("{path}:{line}: {message}")]
    Parse {
        path: String,
        line: usize,
        message: String,
    },
    #[error("{path} contains no drawable geometry")]
    Empty { path: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssetState<T> {
    Pending,
    Ready(T),
    Failed(AssetError),
}

impl<T> Default for AssetState<T> {
    fn default() -> Self {
        AssetState::Pending
    }
}

impl<T> AssetState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            AssetState::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AssetState<U> {
        match self {
            AssetState::Pending => AssetState::Pending,
            AssetState::Ready(v) => AssetState::Ready(f(v)),
            AssetState::Failed(e) => AssetState::Failed(e),
        }
    }
}

impl<T> From<Result<T, AssetError>> for AssetState<T> {
    fn from(r: Result<T, AssetError>) -> Self {
        match r {
            Ok(v) => AssetState::Ready(v),
            Err(e) => AssetState::Failed(e),
        }
    }
}

/// Identity of one loaded drawable instance. A reload yields a new id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawableId(pub u64);

/// What the core needs to know about a loaded model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drawable {
    pub id: DrawableId,
    /// Bounds in the model's own units, before scaling.
    pub bounds: Aabb,
    pub scale: f32,
}

/// The model slot of the scene: its load state plus the re-centering applied to
/// the current drawable.
#[derive(Debug, Default)]
pub struct ModelSlot {
    state: AssetState<Drawable>,
    centered_for: Option<DrawableId>,
    offset: Vec3,
}

impl ModelSlot {
    pub fn set(&mut self, state: AssetState<Drawable>) {
        if let AssetState::Failed(e) = &state {
            log::warn!("[model] load failed: {e}");
        }
        self.state = state;
        self.recenter_if_new();
    }

    /// Offset applied to the current drawable so its box centre sits at the
    /// group origin. Zero until a drawable is ready.
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Local transform of the drawable inside its posed group, if one is ready.
    pub fn local_matrix(&self) -> Option<Mat4> {
        let d = self.state.ready()?;
        Some(Mat4::from_translation(self.offset) * Mat4::from_scale(Vec3::splat(d.scale)))
    }

    // Re-centering runs once per drawable id; observing the same id again is a no-op.
    fn recenter_if_new(&mut self) {
        let Some(d) = self.state.ready() else {
            return;
        };
        if self.centered_for == Some(d.id) {
            return;
        }
        self.offset = recenter_offset(&d.bounds, d.scale);
        self.centered_for = Some(d.id);
        log::debug!(
            "[model] recentered drawable {} offset=({:.3},{:.3},{:.3})",
            d.id.0,
            self.offset.x,
            self.offset.y,
            self.offset.z
        );
    }
}
