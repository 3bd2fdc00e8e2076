use std::f32::consts::PI;

// Shared animation/interaction tuning constants for the landing scene.

// Orbiting labels
pub const LABEL_ORBIT_RADIUS: f32 = 3.0;
pub const LABEL_ORBIT_SPEED: f32 = 0.3; // radians per second
pub const LABEL_TEXT_SIZE: f32 = 0.5; // world units, cap height of the label quad
pub const LABEL_GLYPH_ADVANCE: f32 = 0.6; // width estimate per glyph, as a fraction of text size

// Label texts and their phase offsets around the orbit
pub const DEFAULT_LABELS: [(&str, f32); 4] = [
    ("Projects", 0.0),
    ("Contact", PI / 2.0),
    ("Experience", PI),
    ("About Me", 3.0 * PI / 2.0),
];

// Model pose
pub const TILT_GAIN: f32 = 0.5; // radians of tilt per unit of pointer offset
pub const WOBBLE_AMPLITUDE: f32 = 0.05;
pub const WOBBLE_FREQ_X: f32 = 0.5;
pub const WOBBLE_FREQ_Y: f32 = 0.7;
pub const BOB_AMPLITUDE: f32 = 0.1;
pub const MODEL_SCALE: f32 = 0.03;

// Label colors as sRGB hex
pub const COLOR_SELECTED: u32 = 0x800080;
pub const COLOR_HOVERED: u32 = 0x888888;
pub const COLOR_IDLE: u32 = 0xffffff;
pub const COLOR_BACKGROUND: u32 = 0x000000;

// Camera
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 8.0];
pub const CAMERA_FOV_Y_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // distance factor per wheel notch
pub const ORBIT_MIN_DISTANCE: f32 = 2.0;
pub const ORBIT_MAX_DISTANCE: f32 = 60.0;
pub const ORBIT_PITCH_LIMIT: f32 = PI / 2.0 - 0.01;

// Interaction
pub const CLICK_DRAG_TOLERANCE_PX: f32 = 4.0; // max pointer travel for a press to count as a click

// Starfield
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;
pub const STAR_COUNT: usize = 5000;
pub const STAR_FACTOR: f32 = 4.0;
pub const STAR_SATURATION: f32 = 0.0;
pub const STAR_LIGHTNESS: f32 = 0.9;
pub const STAR_SPEED: f32 = 1.0;
pub const STAR_SEED: u64 = 0x5eed_57a2;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const DIRECTIONAL_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;

// Assets served next to the page
pub const MODEL_OBJ_PATH: &str = "/ironman.obj";
pub const MODEL_MTL_PATH: &str = "/ironman.mtl";
