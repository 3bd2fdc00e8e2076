//! Input events queued by the host between frames and consumed once per tick.

use crate::pointer::Viewport;
use crate::selection::LabelId;
use glam::Vec2;
use smallvec::SmallVec;

/// Semantic pointer events scoped to one label's hit area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelEvent {
    Enter(LabelId),
    Leave(LabelId),
    Click(LabelId),
}

impl LabelEvent {
    pub fn label(&self) -> LabelId {
        match *self {
            LabelEvent::Enter(id) | LabelEvent::Leave(id) | LabelEvent::Click(id) => id,
        }
    }
}

/// Raw input as delivered by the page. Pointer positions are client pixels
/// against the viewport they were measured in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMoved { client: Vec2, viewport: Viewport },
    PointerDown { client: Vec2, viewport: Viewport },
    PointerUp { client: Vec2, viewport: Viewport },
    /// Pointer left the page; clears hover and ends any drag.
    PointerLeft,
    /// Wheel delta in pixels, positive when scrolling down (zoom out).
    Wheel { delta_y: f32 },
    /// Pre-resolved label event, for hosts that do their own hit testing.
    Label(LabelEvent),
}

/// FIFO of pending input, drained by the frame tick.
#[derive(Default, Debug)]
pub struct InputQueue {
    events: SmallVec<[InputEvent; 16]>,
}

impl InputQueue {
    pub fn push(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take all queued events in arrival order.
    pub fn drain(&mut self) -> SmallVec<[InputEvent; 16]> {
        std::mem::take(&mut self.events)
    }
}
