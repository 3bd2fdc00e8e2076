//! Hover and selection state of the orbiting labels.
//!
//! Hover is tracked per label. Selection is a single optional label id, so at
//! most one label can be selected at any time. Clicking the selected label
//! clears the selection; clicking another label moves it.

use crate::constants::{COLOR_HOVERED, COLOR_IDLE, COLOR_SELECTED};
use crate::events::LabelEvent;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LabelId(pub usize);

/// Resolved look of a label. Selected wins over hovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelVisual {
    Idle,
    Hovered,
    Selected,
}

impl LabelVisual {
    pub fn hex(self) -> u32 {
        match self {
            LabelVisual::Selected => COLOR_SELECTED,
            LabelVisual::Hovered => COLOR_HOVERED,
            LabelVisual::Idle => COLOR_IDLE,
        }
    }

    /// Linear-space color for shading.
    pub fn color(self) -> Vec3 {
        srgb_hex_to_linear(self.hex())
    }
}

#[inline]
fn srgb_channel_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    Vec3::new(
        srgb_channel_to_linear(c.x),
        srgb_channel_to_linear(c.y),
        srgb_channel_to_linear(c.z),
    )
}

/// Convert a 0xRRGGBB sRGB color to linear RGB in [0, 1].
pub fn srgb_hex_to_linear(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    srgb_to_linear(Vec3::new(r, g, b))
}

#[derive(Clone, Debug)]
pub struct SelectionState {
    selected: Option<LabelId>,
    hovered: Vec<bool>,
}

impl SelectionState {
    pub fn new(label_count: usize) -> Self {
        Self {
            selected: None,
            hovered: vec![false; label_count],
        }
    }

    pub fn selected(&self) -> Option<LabelId> {
        self.selected
    }

    pub fn is_selected(&self, id: LabelId) -> bool {
        self.selected == Some(id)
    }

    pub fn is_hovered(&self, id: LabelId) -> bool {
        self.hovered.get(id.0).copied().unwrap_or(false)
    }

    pub fn visual(&self, id: LabelId) -> LabelVisual {
        if self.is_selected(id) {
            LabelVisual::Selected
        } else if self.is_hovered(id) {
            LabelVisual::Hovered
        } else {
            LabelVisual::Idle
        }
    }

    /// Click-to-select with re-click clearing.
    pub fn toggle(&mut self, id: LabelId) {
        self.selected = match self.selected {
            Some(cur) if cur == id => None,
            _ => Some(id),
        };
    }

    /// Apply one label event. Events for ids outside the label set are ignored.
    pub fn apply(&mut self, ev: LabelEvent) {
        let id = ev.label();
        if id.0 >= self.hovered.len() {
            log::debug!("[selection] ignoring {:?} for unknown label", ev);
            return;
        }
        match ev {
            LabelEvent::Enter(_) => self.hovered[id.0] = true,
            LabelEvent::Leave(_) => self.hovered[id.0] = false,
            LabelEvent::Click(_) => {
                self.toggle(id);
                log::debug!("[selection] click {} -> selected={:?}", id.0, self.selected);
            }
        }
    }
}
