use wgpu::SurfaceError;
use winit::window::Window;

use crate::coords::PixelSize;
use crate::error::RendererError;

use super::surface;
use super::{GpuFrame, GpuInit, SurfaceErrorAction, SurfaceErrorKind};

/// Owns wgpu core objects and the surface configuration.
///
/// This type is the low-level device context:
/// - selects an adapter and stores the Device/Queue
/// - creates and configures a storage-writable Surface (swapchain)
/// - acquires frames and provides an encoder + view for compute writes
pub struct Gpu<'w> {
    /// Surface bound to the window.
    ///
    /// Surface lifetime is tied to the window; the runtime keeps both in one
    /// self-referencing entry so the window outlives the `Gpu`.
    surface: wgpu::Surface<'w>,

    /// Logical device.
    device: wgpu::Device,

    /// Command queue.
    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    /// Current drawable size in physical pixels.
    size: PixelSize,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    ///
    /// Every failure in the acquisition chain maps to
    /// [`RendererError::DeviceUnavailable`].
    pub async fn new(window: &'w Window, init: &GpuInit) -> Result<Self, RendererError> {
        let size = PixelSize::from(window.inner_size());

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window).map_err(|e| {
            RendererError::device_unavailable(format!("failed to create surface: {e}"))
        })?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RendererError::device_unavailable(format!("no suitable adapter: {e}")))?;

        let info = adapter.get_info();
        log::info!("adapter: {} ({:?}, {:?})", info.name, info.backend, info.device_type);

        let surface_caps = surface.get_capabilities(&adapter);
        if !surface::supports_storage_writes(surface_caps.usages) {
            return Err(RendererError::device_unavailable(
                "surface does not support storage writes",
            ));
        }

        let bgra_storage = adapter
            .features()
            .contains(wgpu::Features::BGRA8UNORM_STORAGE);
        let format = surface::choose_storage_format(&surface_caps.formats, bgra_storage)
            .ok_or_else(|| {
                RendererError::device_unavailable(format!(
                    "no storage-capable surface format among {:?}",
                    surface_caps.formats
                ))
            })?;

        let required_features = if format == wgpu::TextureFormat::Bgra8Unorm {
            wgpu::Features::BGRA8UNORM_STORAGE
        } else {
            wgpu::Features::empty()
        };

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("orbtrace device"),
                required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| {
                RendererError::device_unavailable(format!("failed to create device/queue: {e}"))
            })?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::STORAGE_BINDING,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: init.present_mode,
            alpha_mode: surface::choose_alpha_mode(&surface_caps),
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };

        if !size.is_empty() {
            surface.configure(&device, &config);
        }

        log::info!("surface: {format:?} {}x{}", size.width, size.height);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the current drawable size (physical pixels).
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Returns a reference to the logical device.
    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    /// Returns a reference to the command queue.
    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Reconfigures the surface after a resize.
    pub fn resize(&mut self, new_size: PixelSize) {
        surface::apply_resize(
            &self.surface,
            &self.device,
            &mut self.config,
            &mut self.size,
            new_size,
        );
    }

    /// Acquires the next surface texture and creates an encoder.
    pub fn begin_frame(&self) -> Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("orbtrace frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the recorded commands and presents the frame.
    ///
    /// Fire-and-forget: the CPU does not wait for the GPU.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame {
            surface_texture,
            view,
            encoder,
        } = frame;

        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    /// Converts a `SurfaceError` into a higher-level action, reconfiguring the
    /// surface when it was lost or outdated.
    pub fn handle_surface_error(&mut self, err: &SurfaceError) -> SurfaceErrorAction {
        surface::map_surface_error(
            &self.surface,
            &self.device,
            &self.config,
            self.size,
            SurfaceErrorKind::from(err),
        )
    }
}
