use winit::window::Window;

use crate::coords::PixelSize;
use crate::device::{Gpu, GpuFrame, SurfaceErrorKind};
use crate::frame::{FramePlan, PresentTarget, SkipReason};

use super::{SceneBuffer, TracePipeline};

/// [`PresentTarget`] over the window's wgpu surface.
///
/// Borrowed from the renderer for the duration of one tick.
pub(crate) struct SurfaceTarget<'a, 'w> {
    pub(crate) window: &'w Window,
    pub(crate) gpu: &'a mut Gpu<'w>,
    pub(crate) pipeline: &'a TracePipeline,
    pub(crate) scene: &'a SceneBuffer,
}

impl PresentTarget for SurfaceTarget<'_, '_> {
    type Frame = GpuFrame;

    fn pixel_size(&self) -> PixelSize {
        self.gpu.size()
    }

    fn acquire(&mut self) -> Result<GpuFrame, SkipReason> {
        self.gpu.begin_frame().map_err(|err| {
            let action = self.gpu.handle_surface_error(&err);
            log::debug!("surface error: {err} ({action:?})");
            SkipReason::SurfaceUnavailable(SurfaceErrorKind::from(&err))
        })
    }

    fn submit(&mut self, mut frame: GpuFrame, plan: &FramePlan) {
        self.pipeline.encode(
            self.gpu.device(),
            &mut frame.encoder,
            &frame.view,
            self.scene,
            plan,
        );

        self.window.pre_present_notify();
        self.gpu.submit(frame);
    }
}
