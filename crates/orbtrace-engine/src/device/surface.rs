use crate::coords::PixelSize;

use super::{SurfaceErrorAction, SurfaceErrorKind};

/// Picks a surface format the kernel can write to as a storage texture.
///
/// sRGB formats are never storage-capable. `Rgba8Unorm` is storage-capable
/// everywhere; `Bgra8Unorm` only with `Features::BGRA8UNORM_STORAGE`.
pub(crate) fn choose_storage_format(
    formats: &[wgpu::TextureFormat],
    bgra_storage: bool,
) -> Option<wgpu::TextureFormat> {
    if formats.contains(&wgpu::TextureFormat::Rgba8Unorm) {
        return Some(wgpu::TextureFormat::Rgba8Unorm);
    }

    if bgra_storage && formats.contains(&wgpu::TextureFormat::Bgra8Unorm) {
        return Some(wgpu::TextureFormat::Bgra8Unorm);
    }

    None
}

/// The surface must accept compute writes, not only render attachments.
pub(crate) fn supports_storage_writes(usages: wgpu::TextureUsages) -> bool {
    usages.contains(wgpu::TextureUsages::STORAGE_BINDING)
}

pub(crate) fn choose_alpha_mode(caps: &wgpu::SurfaceCapabilities) -> wgpu::CompositeAlphaMode {
    if caps.alpha_modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
        return wgpu::CompositeAlphaMode::Opaque;
    }
    caps.alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// wgpu does not support configuring a surface with a 0x0 size; in that case,
/// only `size` is updated and configuration is deferred.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PixelSize,
    new_size: PixelSize,
) {
    *size = new_size;

    if new_size.is_empty() {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;

    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PixelSize,
    kind: SurfaceErrorKind,
) -> SurfaceErrorAction {
    let action = kind.action();
    if action == SurfaceErrorAction::Reconfigured && !size.is_empty() {
        surface.configure(device, config);
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    #[test]
    fn prefers_rgba8_unorm() {
        let formats = [F::Bgra8UnormSrgb, F::Bgra8Unorm, F::Rgba8Unorm];
        assert_eq!(choose_storage_format(&formats, true), Some(F::Rgba8Unorm));
    }

    #[test]
    fn bgra_requires_storage_feature() {
        let formats = [F::Bgra8UnormSrgb, F::Bgra8Unorm];
        assert_eq!(choose_storage_format(&formats, false), None);
        assert_eq!(choose_storage_format(&formats, true), Some(F::Bgra8Unorm));
    }

    #[test]
    fn srgb_only_surface_is_rejected() {
        let formats = [F::Bgra8UnormSrgb, F::Rgba8UnormSrgb];
        assert_eq!(choose_storage_format(&formats, true), None);
    }

    #[test]
    fn storage_usage_is_required() {
        assert!(!supports_storage_writes(wgpu::TextureUsages::RENDER_ATTACHMENT));
        assert!(supports_storage_writes(
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::STORAGE_BINDING
        ));
    }
}
