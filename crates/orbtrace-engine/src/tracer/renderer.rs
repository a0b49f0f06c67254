use winit::window::Window;

use crate::coords::PixelSize;
use crate::device::GpuInit;
use crate::error::RendererError;
use crate::frame::{FrameOrchestrator, FramePlan, FrameSkipped, FrameStats, OrbitCamera};
use crate::scene::Sphere;

use super::target::SurfaceTarget;
use super::DeviceResources;

/// Device resources plus the frame orchestrator, bound to one window.
pub struct Renderer<'w> {
    window: &'w Window,
    resources: DeviceResources<'w>,
    orchestrator: FrameOrchestrator,
}

impl<'w> Renderer<'w> {
    /// Builds all device resources; the animation clock starts here.
    pub async fn new(
        window: &'w Window,
        init: &GpuInit,
        spheres: &[Sphere],
    ) -> Result<Self, RendererError> {
        let resources = DeviceResources::new(window, init, spheres).await?;
        let orchestrator = FrameOrchestrator::new(resources.caps(), OrbitCamera::default());

        Ok(Self {
            window,
            resources,
            orchestrator,
        })
    }

    /// Runs one refresh tick.
    ///
    /// `Err` is a dropped frame, never a failure of the renderer.
    pub fn render_frame(&mut self) -> Result<FramePlan, FrameSkipped> {
        let DeviceResources {
            gpu,
            pipeline,
            scene,
            ..
        } = &mut self.resources;

        let mut target = SurfaceTarget {
            window: self.window,
            gpu,
            pipeline,
            scene,
        };

        self.orchestrator.tick(&mut target)
    }

    /// Reconfigures the surface for a new physical size.
    pub fn resize(&mut self, size: PixelSize) {
        self.resources.gpu.resize(size);
    }

    pub fn stats(&self) -> FrameStats {
        self.orchestrator.stats()
    }
}
