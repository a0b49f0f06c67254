/// Default name of the compute kernel entry point.
pub const DEFAULT_KERNEL_ENTRY_POINT: &str = "ray_tracing_kernel";

/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Present mode (swap behavior).
    ///
    /// FIFO paces ticks to the display refresh rate.
    pub present_mode: wgpu::PresentMode,

    /// Adapter preference.
    pub power_preference: wgpu::PowerPreference,

    /// Limits requested from the adapter/device.
    ///
    /// `max_compute_invocations_per_workgroup` from these limits bounds the
    /// thread-group size.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,

    /// SIMD execution width used as the thread-group X dimension.
    ///
    /// wgpu does not report this portably; 32 matches common desktop and
    /// Apple GPUs. Clamped to device limits.
    pub execution_width: u32,

    /// Entry point of the ray tracing kernel.
    pub kernel_entry_point: String,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::HighPerformance,
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
            execution_width: 32,
            kernel_entry_point: DEFAULT_KERNEL_ENTRY_POINT.to_string(),
        }
    }
}
