// Page wiring and presentation constants for the web frontend.

// DOM
pub const CANVAS_ID: &str = "app-canvas";

// Label rasterization
pub const LABEL_FONT_PX: f32 = 96.0; // font size used for the label bitmaps
pub const LABEL_FONT: &str = "96px Helvetica, Arial, sans-serif";
pub const LABEL_PAD_PX: f32 = 8.0; // transparent margin around the glyphs

// Renderer
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
