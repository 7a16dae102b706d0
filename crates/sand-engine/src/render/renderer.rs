use super::ctx::{RenderCtx, RenderTarget};
use super::mesh::QuadMesh;
use super::programs::ProgramStore;
use super::sprite::SpriteRenderer;

/// GPU resources created once at startup: linked programs, the quad mesh
/// and the sprite draw queue.
pub struct Renderer {
    pub programs: ProgramStore,
    pub mesh: QuadMesh,
    pub sprites: SpriteRenderer,
}

impl Renderer {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            programs: ProgramStore::new(device),
            mesh: QuadMesh::upload(device),
            sprites: SpriteRenderer::new(),
        }
    }

    /// Records every queued sprite into `target`.
    pub fn flush(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        self.sprites.flush(ctx, target, &self.programs, &self.mesh);
    }
}
