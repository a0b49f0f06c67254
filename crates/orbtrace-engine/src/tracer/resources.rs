use crate::device::{Gpu, GpuInit};
use crate::error::RendererError;
use crate::frame::ThreadgroupCaps;
use crate::scene::Sphere;
use winit::window::Window;

use super::{SceneBuffer, TracePipeline};

/// Device-side resources created once at startup.
///
/// Owns the device/queue (through [`Gpu`]), the compiled kernel, and the
/// read-only scene buffer. Nothing here is recreated per frame.
pub struct DeviceResources<'w> {
    pub(crate) gpu: Gpu<'w>,
    pub(crate) pipeline: TracePipeline,
    pub(crate) scene: SceneBuffer,
    caps: ThreadgroupCaps,
}

impl<'w> DeviceResources<'w> {
    /// Acquires the device, compiles the kernel, and uploads `spheres`.
    ///
    /// Fails with [`RendererError::DeviceUnavailable`] or
    /// [`RendererError::PipelineCompilationFailed`]; both are fatal.
    pub async fn new(
        window: &'w Window,
        init: &GpuInit,
        spheres: &[Sphere],
    ) -> Result<Self, RendererError> {
        let gpu = Gpu::new(window, init).await?;

        let caps = ThreadgroupCaps::from_limits(&gpu.device().limits(), init.execution_width);

        let pipeline = TracePipeline::new(
            gpu.device(),
            gpu.surface_format(),
            &init.kernel_entry_point,
            caps.threads_per_group(),
        )
        .await?;

        let scene = SceneBuffer::upload(gpu.device(), spheres);

        Ok(Self {
            gpu,
            pipeline,
            scene,
            caps,
        })
    }

    pub fn gpu(&self) -> &Gpu<'w> {
        &self.gpu
    }

    pub fn device(&self) -> &wgpu::Device {
        self.gpu.device()
    }

    pub fn queue(&self) -> &wgpu::Queue {
        self.gpu.queue()
    }

    pub fn pipeline(&self) -> &TracePipeline {
        &self.pipeline
    }

    pub fn scene(&self) -> &SceneBuffer {
        &self.scene
    }

    /// Thread-group capability figures reported by the device.
    pub fn caps(&self) -> ThreadgroupCaps {
        self.caps
    }
}
