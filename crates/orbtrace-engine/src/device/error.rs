/// High-level response after a surface error.
///
/// Neither action is fatal: a surface that cannot produce an image this tick
/// costs one frame and nothing more.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; rendering may resume next frame.
    Reconfigured,
    /// Transient error or backpressure; skip the current frame.
    SkipFrame,
}

/// Why the surface could not hand out an image.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorKind {
    Timeout,
    Outdated,
    Lost,
    OutOfMemory,
    Other,
}

impl From<&wgpu::SurfaceError> for SurfaceErrorKind {
    fn from(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Timeout => Self::Timeout,
            wgpu::SurfaceError::Outdated => Self::Outdated,
            wgpu::SurfaceError::Lost => Self::Lost,
            wgpu::SurfaceError::OutOfMemory => Self::OutOfMemory,
            wgpu::SurfaceError::Other => Self::Other,
        }
    }
}

impl SurfaceErrorKind {
    /// Lost and outdated surfaces must be reconfigured before the next acquire.
    pub fn needs_reconfigure(self) -> bool {
        matches!(self, Self::Lost | Self::Outdated)
    }

    pub fn action(self) -> SurfaceErrorAction {
        if self.needs_reconfigure() {
            SurfaceErrorAction::Reconfigured
        } else {
            SurfaceErrorAction::SkipFrame
        }
    }
}

impl std::fmt::Display for SurfaceErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Timeout => "timeout",
            Self::Outdated => "outdated",
            Self::Lost => "lost",
            Self::OutOfMemory => "out of memory",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}
