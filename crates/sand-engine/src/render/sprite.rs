use glam::{Mat4, Vec2, Vec3};

use crate::coords::{pixel_extent_to_ndc, pixel_to_ndc, Viewport};
use crate::core::RenderSettings;

use super::common::{aligned_stride, model_ubo_min_binding_size, ModelUniform};
use super::ctx::{RenderCtx, RenderTarget};
use super::error::RenderError;
use super::mesh::QuadMesh;
use super::programs::{ProgramHandle, ProgramStore};

/// Translation + scale placing the unit quad as a square sprite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteTransform {
    /// Top-left corner in NDC. `z` is fixed at 1.
    pub translation: Vec3,
    /// NDC size of the sprite. `z` is fixed at 1.
    pub scale: Vec3,
}

impl SpriteTransform {
    /// Places a `sprite_width`-pixel square with its top-left corner at `top_left` (pixels).
    pub fn new(viewport: Viewport, sprite_width: f32, top_left: Vec2) -> Self {
        let corner = pixel_to_ndc(viewport, top_left);
        let size = pixel_extent_to_ndc(viewport, Vec2::splat(sprite_width));
        Self {
            translation: corner.extend(1.0),
            scale: size.extend(1.0),
        }
    }

    /// `translate * scale`: the quad is scaled first, then moved.
    pub fn model(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * Mat4::from_scale(self.scale)
    }
}

#[derive(Debug, Copy, Clone)]
struct SpriteDraw {
    program: ProgramHandle,
    model: Mat4,
}

/// Queues sprite draws for the current frame and records them at flush.
///
/// Every draw gets its own slot in one uniform buffer, addressed by a dynamic
/// offset.
#[derive(Default)]
pub struct SpriteRenderer {
    draws: Vec<SpriteDraw>,

    model_ubo: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,
    capacity: usize,
    stride: u64,

    warned_missing_program: bool,
}

impl SpriteRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a sprite with its top-left corner at `(x, y)` pixels.
    ///
    /// The shader name is resolved immediately; an unregistered name is an
    /// error and nothing is queued.
    pub fn draw_sprite(
        &mut self,
        settings: &RenderSettings,
        shader: &str,
        x: f32,
        y: f32,
    ) -> Result<(), RenderError> {
        let program = settings.shaders.get(shader)?;
        let transform = SpriteTransform::new(settings.viewport(), settings.sprite_width, Vec2::new(x, y));
        self.draws.push(SpriteDraw {
            program,
            model: transform.model(),
        });
        Ok(())
    }

    /// Number of sprites queued since the last flush.
    pub fn queued(&self) -> usize {
        self.draws.len()
    }

    /// Model matrices queued since the last flush, in draw order.
    pub fn queued_models(&self) -> impl Iterator<Item = Mat4> + '_ {
        self.draws.iter().map(|d| d.model)
    }

    /// Drops queued draws without recording them.
    pub fn discard(&mut self) {
        self.draws.clear();
    }

    /// Uploads model matrices and records one indexed draw per queued sprite
    /// into `target`. The target is loaded, not cleared.
    pub fn flush(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        programs: &ProgramStore,
        mesh: &QuadMesh,
    ) {
        if self.draws.is_empty() {
            return;
        }

        self.ensure_capacity(ctx, programs, self.draws.len());
        self.write_models(ctx);

        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sand sprite pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        mesh.bind(&mut rpass);

        let mut bound: Option<ProgramHandle> = None;
        for (slot, draw) in self.draws.iter().enumerate() {
            let Some(program) = programs.get(draw.program) else {
                if !self.warned_missing_program {
                    log::warn!("sprite references a program missing from the store; skipped");
                    self.warned_missing_program = true;
                }
                continue;
            };

            if bound != Some(draw.program) {
                rpass.set_pipeline(program.pipeline());
                bound = Some(draw.program);
            }

            let offset = slot as u64 * self.stride;
            rpass.set_bind_group(0, bind_group, &[offset as u32]);
            rpass.draw_indexed(0..QuadMesh::index_count(), 0, 0..1);
        }

        drop(rpass);
        self.draws.clear();
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, programs: &ProgramStore, required: usize) {
        if required <= self.capacity && self.model_ubo.is_some() {
            return;
        }

        let alignment = ctx.device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = aligned_stride(ModelUniform::SIZE, alignment);
        let capacity = required.next_power_of_two().max(64);

        let model_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sand sprite model ubo"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sand sprite model bind group"),
            layout: programs.bind_group_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &model_ubo,
                    offset: 0,
                    size: Some(model_ubo_min_binding_size()),
                }),
            }],
        });

        log::debug!("sprite uniform buffer grown to {capacity} slots ({stride} B stride)");

        self.model_ubo = Some(model_ubo);
        self.bind_group = Some(bind_group);
        self.capacity = capacity;
        self.stride = stride;
    }

    fn write_models(&self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.model_ubo.as_ref() else { return };

        let stride = self.stride as usize;
        let mut bytes = vec![0u8; stride * self.draws.len()];
        for (slot, draw) in self.draws.iter().enumerate() {
            let uniform = ModelUniform::new(draw.model);
            let start = slot * stride;
            bytes[start..start + ModelUniform::SIZE as usize]
                .copy_from_slice(bytemuck::bytes_of(&uniform));
        }

        ctx.queue.write_buffer(ubo, 0, &bytes);
    }
}
