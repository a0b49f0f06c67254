//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring a storage-writable Surface (swapchain)
//! - acquiring frames and providing encoders/views for the compute pass

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::{SurfaceErrorAction, SurfaceErrorKind};
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::{GpuInit, DEFAULT_KERNEL_ENTRY_POINT};
