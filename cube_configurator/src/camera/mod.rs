mod orbit;
mod viewport;

pub use orbit::{orbit_camera_plugin, OrbitCamera};
pub use viewport::{viewport_plugin, ViewportSize};
