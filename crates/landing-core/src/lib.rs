pub mod asset;
pub mod camera;
pub mod config;
pub mod constants;
pub mod events;
pub mod labels;
pub mod lifecycle;
pub mod orbit;
pub mod picking;
pub mod pointer;
pub mod pose;
pub mod scene;
pub mod selection;
pub mod stars;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
pub static LABEL_WGSL: &str = include_str!("../shaders/label.wgsl");
pub static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");

pub use asset::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use labels::*;
pub use lifecycle::*;
pub use orbit::*;
pub use picking::*;
pub use pointer::*;
pub use pose::*;
pub use scene::*;
pub use selection::*;
pub use stars::*;
