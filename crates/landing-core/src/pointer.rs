use glam::Vec2;

/// Size of the window the pointer coordinates are measured against, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width / self.height
        }
    }
}

/// Pointer position in device-independent coordinates, both axes in [-1, 1],
/// +y up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
}

/// Map client pixel coordinates to the [-1, 1] range. Returns `None` for an
/// empty viewport.
#[inline]
pub fn normalize_pointer(client: Vec2, viewport: Viewport) -> Option<PointerSample> {
    if viewport.is_empty() {
        return None;
    }
    Some(PointerSample {
        x: (client.x / viewport.width) * 2.0 - 1.0,
        y: -(client.y / viewport.height) * 2.0 + 1.0,
    })
}

/// Holds the latest pointer sample. Every move overwrites the previous one;
/// there is no smoothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    sample: PointerSample,
}

impl PointerTracker {
    pub fn sample(&self) -> PointerSample {
        self.sample
    }

    pub fn track(&mut self, client: Vec2, viewport: Viewport) -> PointerSample {
        if let Some(s) = normalize_pointer(client, viewport) {
            self.sample = s;
        }
        self.sample
    }
}
