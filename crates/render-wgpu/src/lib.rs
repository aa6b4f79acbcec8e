//! wgpu render backend for the walk demo.
//!
//! Clears to the scene background and draws every mesh as an instanced
//! cuboid lit by the scene's ambient and directional light.
//!
//! # Invariants
//! - Renderer never mutates the scene or the camera.
//! - Movement integration runs before rendering, once per frame.

mod context;
mod gpu;
mod shaders;

pub use context::{DEFAULT_MSAA_SAMPLES, GpuContext, GpuInitError, pick_sample_count};
pub use gpu::WgpuRenderer;
