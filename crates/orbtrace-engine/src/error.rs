//! Construction-time error taxonomy.
//!
//! Both variants are fatal: the renderer cannot be created and the frame loop
//! is never entered. Per-frame failures are not errors of this type; they are
//! reported as [`crate::frame::FrameSkipped`] and never escalate.

/// Errors raised while building the renderer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RendererError {
    /// No compatible compute device, queue, or writable surface.
    #[error("no compatible compute device: {reason}")]
    DeviceUnavailable { reason: String },

    /// The named kernel entry point is missing or the kernel does not build.
    #[error("compute kernel `{entry_point}` failed to build: {message}")]
    PipelineCompilationFailed { entry_point: String, message: String },
}

impl RendererError {
    pub(crate) fn device_unavailable(reason: impl Into<String>) -> Self {
        Self::DeviceUnavailable {
            reason: reason.into(),
        }
    }

    pub(crate) fn pipeline_failed(entry_point: &str, message: impl Into<String>) -> Self {
        Self::PipelineCompilationFailed {
            entry_point: entry_point.to_string(),
            message: message.into(),
        }
    }

    /// Returns `true` for errors caused by the kernel rather than the platform.
    pub fn is_pipeline_error(&self) -> bool {
        matches!(self, Self::PipelineCompilationFailed { .. })
    }
}
