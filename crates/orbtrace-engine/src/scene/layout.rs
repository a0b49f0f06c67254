//! Byte layout of the scene buffer.
//!
//! The kernel declares `array<Sphere>` in a storage buffer. Under WGSL layout
//! rules `vec3<f32>` is 16-byte aligned and 12 bytes wide, so a trailing `f32`
//! packs into the fourth lane and the struct needs no explicit padding.

use bytemuck::{Pod, Zeroable};
use std::mem::{align_of, offset_of, size_of};

use crate::coords::{ColorRgb, Vec3};

use super::Sphere;

/// Device-side sphere layout (32 bytes):
///
///  offset  0  center    vec3<f32>
///  offset 12  radius    f32
///  offset 16  color     vec3<f32>
///  offset 28  specular  f32
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable, PartialEq)]
pub struct GpuSphere {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub specular: f32,
}

/// Per-element stride of the scene buffer in bytes.
pub const SPHERE_STRIDE: usize = 32;

const _: () = {
    assert!(size_of::<GpuSphere>() == SPHERE_STRIDE);
    assert!(offset_of!(GpuSphere, center) == 0);
    assert!(offset_of!(GpuSphere, radius) == 12);
    assert!(offset_of!(GpuSphere, color) == 16);
    assert!(offset_of!(GpuSphere, specular) == 28);
    // Host alignment is 4; the stride is what keeps elements on 16-byte boundaries.
    assert!(SPHERE_STRIDE % 16 == 0);
    assert!(align_of::<GpuSphere>() == 4);
};

impl From<&Sphere> for GpuSphere {
    fn from(s: &Sphere) -> Self {
        Self {
            center: s.center.to_array(),
            radius: s.radius,
            color: s.color.to_array(),
            specular: s.specular,
        }
    }
}

impl From<GpuSphere> for Sphere {
    fn from(g: GpuSphere) -> Self {
        Sphere::new(
            Vec3::from_array(g.center),
            g.radius,
            ColorRgb::from_array(g.color),
            g.specular,
        )
    }
}

/// Raised when a byte buffer cannot hold a whole number of spheres.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("scene buffer length {len} is not a multiple of the {stride}-byte sphere stride")]
pub struct SceneLayoutError {
    pub len: usize,
    pub stride: usize,
}

/// Serializes spheres into the exact byte layout the kernel reads.
///
/// The result is always `spheres.len() * SPHERE_STRIDE` bytes.
pub fn serialize(spheres: &[Sphere]) -> Vec<u8> {
    let packed: Vec<GpuSphere> = spheres.iter().map(GpuSphere::from).collect();
    bytemuck::cast_slice(&packed).to_vec()
}

/// Reads spheres back from a scene buffer image.
pub fn deserialize(bytes: &[u8]) -> Result<Vec<Sphere>, SceneLayoutError> {
    if bytes.len() % SPHERE_STRIDE != 0 {
        return Err(SceneLayoutError {
            len: bytes.len(),
            stride: SPHERE_STRIDE,
        });
    }

    Ok(bytes
        .chunks_exact(SPHERE_STRIDE)
        .map(|chunk| Sphere::from(bytemuck::pod_read_unaligned::<GpuSphere>(chunk)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::build;

    fn f32_at(bytes: &[u8], offset: usize) -> f32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&bytes[offset..offset + 4]);
        f32::from_ne_bytes(raw)
    }

    #[test]
    fn default_scene_round_trips() {
        let spheres = build();
        let bytes = serialize(&spheres);
        let back = deserialize(&bytes).unwrap();
        assert_eq!(back.len(), spheres.len());
        for i in 0..spheres.len() {
            assert_eq!(back[i], spheres[i], "sphere {i}");
        }
    }

    #[test]
    fn byte_length_is_count_times_stride() {
        let template = build()[0];
        for count in 0..=17 {
            let spheres = vec![template; count];
            assert_eq!(serialize(&spheres).len(), count * SPHERE_STRIDE);
        }
    }

    #[test]
    fn empty_scene_serializes_to_nothing() {
        assert!(serialize(&[]).is_empty());
        assert!(deserialize(&[]).unwrap().is_empty());
    }

    #[test]
    fn fields_land_at_device_offsets() {
        let spheres = build();
        let bytes = serialize(&spheres);

        // Mirror sphere, third element.
        let base = 2 * SPHERE_STRIDE;
        assert_eq!(f32_at(&bytes, base), -2.2);
        assert_eq!(f32_at(&bytes, base + 4), 0.0);
        assert_eq!(f32_at(&bytes, base + 8), -1.0);
        assert_eq!(f32_at(&bytes, base + 12), 1.0);
        assert_eq!(f32_at(&bytes, base + 16), 0.9);
        assert_eq!(f32_at(&bytes, base + 28), 0.95);

        // Ground radius.
        assert_eq!(f32_at(&bytes, SPHERE_STRIDE + 12), 100.0);
    }

    #[test]
    fn truncated_buffer_is_rejected() {
        let bytes = serialize(&build());
        let err = deserialize(&bytes[..bytes.len() - 4]).unwrap_err();
        assert_eq!(
            err,
            SceneLayoutError {
                len: 4 * SPHERE_STRIDE - 4,
                stride: SPHERE_STRIDE
            }
        );
    }
}
