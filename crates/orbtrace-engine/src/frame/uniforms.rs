use bytemuck::{Pod, Zeroable};
use std::mem::{offset_of, size_of};

use crate::coords::{PixelSize, Vec3};

use super::CameraPose;

/// Per-frame parameters for the kernel.
///
/// Rebuilt every tick and handed to the device by value; never retained.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Uniforms {
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    /// Output width/height in pixels.
    pub resolution: [f32; 2],
    /// Seconds since renderer start.
    pub time: f32,
}

impl Uniforms {
    pub fn new(pose: CameraPose, size: PixelSize, time: f32) -> Self {
        Self {
            camera_position: pose.position,
            camera_target: pose.target,
            resolution: size.as_f32(),
            time,
        }
    }

    pub fn to_gpu(&self) -> GpuUniforms {
        GpuUniforms {
            camera_position: self.camera_position.to_array(),
            _pad0: 0.0,
            camera_target: self.camera_target.to_array(),
            _pad1: 0.0,
            resolution: self.resolution,
            time: self.time,
            _pad2: 0.0,
        }
    }
}

/// Device-side uniform layout (48 bytes):
///
///  offset  0  camera_position  vec3<f32>
///  offset 16  camera_target    vec3<f32>
///  offset 32  resolution       vec2<f32>
///  offset 40  time             f32
///
/// Explicit pads stand in for the 16-byte alignment of `vec3<f32>` and the
/// struct's round-up to 16.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable, PartialEq)]
pub struct GpuUniforms {
    pub camera_position: [f32; 3],
    pub _pad0: f32,
    pub camera_target: [f32; 3],
    pub _pad1: f32,
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad2: f32,
}

pub const UNIFORMS_SIZE: usize = 48;

const _: () = {
    assert!(size_of::<GpuUniforms>() == UNIFORMS_SIZE);
    assert!(offset_of!(GpuUniforms, camera_position) == 0);
    assert!(offset_of!(GpuUniforms, camera_target) == 16);
    assert!(offset_of!(GpuUniforms, resolution) == 32);
    assert!(offset_of!(GpuUniforms, time) == 40);
    assert!(UNIFORMS_SIZE % 16 == 0);
};
