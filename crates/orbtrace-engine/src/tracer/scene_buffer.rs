use wgpu::util::DeviceExt;

use crate::scene::{self, Sphere, SPHERE_STRIDE};

/// Device-resident, read-only copy of the scene.
///
/// Written once at creation; the buffer has no `COPY_DST` usage, so it cannot
/// be written again.
pub struct SceneBuffer {
    buffer: wgpu::Buffer,
    sphere_count: usize,
}

impl SceneBuffer {
    pub fn upload(device: &wgpu::Device, spheres: &[Sphere]) -> Self {
        let bytes = padded_bytes(spheres);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orbtrace scene buffer"),
            contents: &bytes,
            usage: wgpu::BufferUsages::STORAGE,
        });

        log::info!("scene uploaded: {} spheres, {} bytes", spheres.len(), bytes.len());

        Self {
            buffer,
            sphere_count: spheres.len(),
        }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn sphere_count(&self) -> usize {
        self.sphere_count
    }
}

/// Serialized scene, padded to one zeroed element when empty.
///
/// Storage bindings cannot be zero-sized; a zero-radius sphere is skipped by
/// the kernel.
fn padded_bytes(spheres: &[Sphere]) -> Vec<u8> {
    let mut bytes = scene::serialize(spheres);
    if bytes.is_empty() {
        bytes.resize(SPHERE_STRIDE, 0);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_is_not_padded() {
        let spheres = scene::build();
        assert_eq!(padded_bytes(&spheres), scene::serialize(&spheres));
    }

    #[test]
    fn empty_scene_gets_one_inert_element() {
        let bytes = padded_bytes(&[]);
        assert_eq!(bytes.len(), SPHERE_STRIDE);
        let spheres = scene::deserialize(&bytes).unwrap();
        assert_eq!(spheres[0].radius, 0.0);
        assert!(!spheres[0].is_valid());
    }
}
