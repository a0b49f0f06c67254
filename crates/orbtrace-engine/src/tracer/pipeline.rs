use std::fmt;
use std::num::NonZeroU64;

use wgpu::util::DeviceExt;

use crate::error::RendererError;
use crate::frame::{FramePlan, GridSize, UNIFORMS_SIZE};
use crate::scene::SPHERE_STRIDE;

use super::kernel;
use super::SceneBuffer;

/// Compiled ray tracing pipeline and its bind group layouts.
///
/// Built once at startup for a fixed output format and thread-group size.
pub struct TracePipeline {
    pipeline: wgpu::ComputePipeline,
    /// Group 0: output image + scene buffer.
    frame_layout: wgpu::BindGroupLayout,
    /// Group 1: per-frame uniforms.
    uniforms_layout: wgpu::BindGroupLayout,
    entry_point: String,
    threads_per_group: GridSize,
}

impl TracePipeline {
    /// Validates and compiles the kernel for `output_format`.
    ///
    /// Device-side validation errors raised while creating the module,
    /// layouts, or pipeline are captured and returned as
    /// [`RendererError::PipelineCompilationFailed`].
    pub async fn new(
        device: &wgpu::Device,
        output_format: wgpu::TextureFormat,
        entry_point: &str,
        threads_per_group: GridSize,
    ) -> Result<Self, RendererError> {
        let source = kernel::kernel_source(output_format)?;
        kernel::validate_kernel(&source, entry_point)?;

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orbtrace kernel"),
            source: wgpu::ShaderSource::Wgsl(source),
        });

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("orbtrace frame bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::StorageTexture {
                        access: wgpu::StorageTextureAccess::WriteOnly,
                        format: output_format,
                        view_dimension: wgpu::TextureViewDimension::D2,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Storage { read_only: true },
                        has_dynamic_offset: false,
                        min_binding_size: NonZeroU64::new(SPHERE_STRIDE as u64),
                    },
                    count: None,
                },
            ],
        });

        let uniforms_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("orbtrace uniforms bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::COMPUTE,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: NonZeroU64::new(UNIFORMS_SIZE as u64),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("orbtrace pipeline layout"),
            bind_group_layouts: &[&frame_layout, &uniforms_layout],
            immediate_size: 0,
        });

        let constants = [
            ("WORKGROUP_X", threads_per_group.x as f64),
            ("WORKGROUP_Y", threads_per_group.y as f64),
        ];

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("orbtrace pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some(entry_point),
            compilation_options: wgpu::PipelineCompilationOptions {
                constants: &constants,
                ..Default::default()
            },
            cache: None,
        });

        check_scope(entry_point, scope.pop().await)?;

        log::info!(
            "kernel `{entry_point}` ready: {}x{} threads per group",
            threads_per_group.x,
            threads_per_group.y
        );

        Ok(Self {
            pipeline,
            frame_layout,
            uniforms_layout,
            entry_point: entry_point.to_string(),
            threads_per_group,
        })
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }

    pub fn threads_per_group(&self) -> GridSize {
        self.threads_per_group
    }

    /// Records one compute pass for `plan` into `encoder`.
    ///
    /// The uniform buffer and both bind groups live only as long as this
    /// frame's submission.
    pub fn encode(
        &self,
        device: &wgpu::Device,
        encoder: &mut wgpu::CommandEncoder,
        output: &wgpu::TextureView,
        scene: &SceneBuffer,
        plan: &FramePlan,
    ) {
        let uniforms = plan.uniforms.to_gpu();
        let uniforms_ubo = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orbtrace frame uniforms"),
            contents: bytemuck::bytes_of(&uniforms),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let frame_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orbtrace frame bind group"),
            layout: &self.frame_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(output),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: scene.buffer().as_entire_binding(),
                },
            ],
        });

        let uniforms_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orbtrace uniforms bind group"),
            layout: &self.uniforms_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniforms_ubo.as_entire_binding(),
            }],
        });

        let groups = plan.dispatch.workgroup_count();

        let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("orbtrace trace pass"),
            timestamp_writes: None,
        });
        cpass.set_pipeline(&self.pipeline);
        cpass.set_bind_group(0, &frame_group, &[]);
        cpass.set_bind_group(1, &uniforms_group, &[]);
        cpass.dispatch_workgroups(groups.x, groups.y, groups.z);
    }
}

/// Maps an error captured by a validation scope to a construction error.
fn check_scope<E: fmt::Display>(entry_point: &str, error: Option<E>) -> Result<(), RendererError> {
    match error {
        Some(e) => Err(RendererError::pipeline_failed(entry_point, e.to_string())),
        None => Ok(()),
    }
}
