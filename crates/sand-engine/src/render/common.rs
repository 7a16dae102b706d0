//! GPU-side types shared by the shader builder and the sprite renderer.

use bytemuck::{Pod, Zeroable};

// ── model uniform ─────────────────────────────────────────────────────────

/// `model` uniform at group 0, binding 0 of every sprite program.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct ModelUniform {
    pub model: [[f32; 4]; 4], // column-major
}

impl ModelUniform {
    pub(super) const SIZE: u64 = std::mem::size_of::<ModelUniform>() as u64;

    pub(super) fn new(model: glam::Mat4) -> Self {
        Self { model: model.to_cols_array_2d() }
    }
}

pub(super) fn model_ubo_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(ModelUniform::SIZE)
        .unwrap_or(std::num::NonZeroU64::MIN)
}

/// Bind group layout for the model uniform. The offset is dynamic so one
/// buffer serves every draw of a frame.
pub(super) fn model_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("sand model bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: Some(model_ubo_min_binding_size()),
            },
            count: None,
        }],
    })
}

// ── dynamic offsets ───────────────────────────────────────────────────────

/// Rounds `size` up to the device's dynamic-offset alignment.
pub(super) fn aligned_stride(size: u64, alignment: u64) -> u64 {
    let alignment = alignment.max(1);
    size.div_ceil(alignment) * alignment
}
