//! Kernel source and host-side validation.
//!
//! The kernel is checked with naga before it reaches wgpu so that a missing
//! entry point or a broken shader surfaces as a typed construction error
//! instead of a device-side validation panic.

use std::borrow::Cow;

use crate::error::RendererError;

/// WGSL source of the ray tracing kernel, written for an `rgba8unorm` output.
pub const KERNEL_WGSL: &str = include_str!("shaders/raytrace.wgsl");

const RGBA_OUTPUT_DECL: &str = "texture_storage_2d<rgba8unorm, write>";

/// WGSL texel format name for a storage-capable output format.
pub fn storage_format_token(format: wgpu::TextureFormat) -> Option<&'static str> {
    match format {
        wgpu::TextureFormat::Rgba8Unorm => Some("rgba8unorm"),
        wgpu::TextureFormat::Bgra8Unorm => Some("bgra8unorm"),
        _ => None,
    }
}

/// Specializes the kernel's output declaration to `format`.
pub fn kernel_source(format: wgpu::TextureFormat) -> Result<Cow<'static, str>, RendererError> {
    let token = storage_format_token(format).ok_or_else(|| {
        RendererError::device_unavailable(format!("{format:?} is not a kernel output format"))
    })?;

    if token == "rgba8unorm" {
        return Ok(Cow::Borrowed(KERNEL_WGSL));
    }

    let decl = format!("texture_storage_2d<{token}, write>");
    Ok(Cow::Owned(KERNEL_WGSL.replace(RGBA_OUTPUT_DECL, &decl)))
}

/// Parses and validates `source`, and checks it exports a compute entry point
/// called `entry_point`.
pub fn validate_kernel(source: &str, entry_point: &str) -> Result<(), RendererError> {
    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| RendererError::pipeline_failed(entry_point, e.emit_to_string(source)))?;

    let found = module
        .entry_points
        .iter()
        .any(|ep| ep.name == entry_point && ep.stage == naga::ShaderStage::Compute);

    if !found {
        let available: Vec<&str> = module
            .entry_points
            .iter()
            .filter(|ep| ep.stage == naga::ShaderStage::Compute)
            .map(|ep| ep.name.as_str())
            .collect();
        return Err(RendererError::pipeline_failed(
            entry_point,
            format!("no compute entry point with this name (available: {available:?})"),
        ));
    }

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    )
    .validate(&module)
    .map_err(|e| RendererError::pipeline_failed(entry_point, e.emit_to_string(source)))?;

    Ok(())
}
