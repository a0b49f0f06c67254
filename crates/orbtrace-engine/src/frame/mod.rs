//! Frame orchestration.
//!
//! One refresh tick runs: sample the clock, skip if there is no surface to
//! draw into, derive the camera pose, build the uniform record from the
//! current surface size, size the dispatch, then encode and submit.
//!
//! Everything here is GPU-agnostic; the wgpu side lives behind
//! [`PresentTarget`].

mod camera;
mod dispatch;
mod orchestrator;
mod plan;
mod uniforms;

pub use camera::{CameraPose, OrbitCamera};
pub use dispatch::{DispatchPlan, GridSize, ThreadgroupCaps};
pub use orchestrator::{
    FrameOrchestrator, FrameSkipped, FrameState, FrameStats, PresentTarget, SkipReason,
};
pub use plan::FramePlan;
pub use uniforms::{GpuUniforms, Uniforms, UNIFORMS_SIZE};
