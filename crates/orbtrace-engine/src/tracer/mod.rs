//! Ray tracing device resources and the wgpu side of the frame loop.
//!
//! Binding slots:
//! - group 0 binding 0: output image (write-only storage texture)
//! - group 0 binding 1: scene buffer (read-only storage)
//! - group 1 binding 0: per-frame uniforms

mod kernel;
mod pipeline;
mod renderer;
mod resources;
mod scene_buffer;
mod target;

pub use kernel::{kernel_source, storage_format_token, validate_kernel, KERNEL_WGSL};
pub use pipeline::TracePipeline;
pub use renderer::Renderer;
pub use resources::DeviceResources;
pub use scene_buffer::SceneBuffer;
