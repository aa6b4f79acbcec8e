//! Rendering Adapter: scene description, first-person camera, renderer interface.
//!
//! # Invariants
//! - Renderers read the scene and camera; they never mutate either.
//! - The camera is the only viewpoint the walk kernel steers.
//!
//! The GPU backend lives in `glade-render-wgpu`; [`DebugTextRenderer`]
//! renders the same scene as text for the CLI and tests.

mod camera;
mod geometry;
mod renderer;
mod scene;

pub use camera::FirstPersonCamera;
pub use geometry::{Geometry, Triangles, VertexData};
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{Light, Material, Mesh, SPAWN_POINT, Scene, SceneObject};

pub fn crate_info() -> &'static str {
    concat!("glade-render v", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
