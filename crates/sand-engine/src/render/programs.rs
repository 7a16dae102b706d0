use std::collections::HashMap;

use super::common::model_bind_group_layout;
use super::ctx::RenderCtx;
use super::error::{RenderError, ShaderError};
use super::shader::{ShaderProgram, ShaderSource};

/// Opaque id of a linked program in a [`ProgramStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ProgramHandle(u32);

impl ProgramHandle {
    /// Handle of the `index`-th program built by a store. Looking up a
    /// handle the store never issued yields `None`.
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Shader name → program handle.
#[derive(Debug, Default, Clone)]
pub struct ShaderTable {
    by_name: HashMap<String, ProgramHandle>,
}

impl ShaderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name`. Returns the handle it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, handle: ProgramHandle) -> Option<ProgramHandle> {
        self.by_name.insert(name.into(), handle)
    }

    pub fn get(&self, name: &str) -> Result<ProgramHandle, RenderError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RenderError::UnknownShader(name.to_owned()))
    }
}

/// Owns every linked program plus the pipeline layout they share.
pub struct ProgramStore {
    programs: Vec<ShaderProgram>,
    bind_group_layout: wgpu::BindGroupLayout,
    pipeline_layout: wgpu::PipelineLayout,
}

impl ProgramStore {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = model_bind_group_layout(device);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sand sprite pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        Self {
            programs: Vec::new(),
            bind_group_layout,
            pipeline_layout,
        }
    }

    /// Compiles and links `source`, returning the new program's handle.
    pub fn build(
        &mut self,
        ctx: &RenderCtx<'_>,
        source: &ShaderSource<'_>,
    ) -> Result<ProgramHandle, ShaderError> {
        let program = ShaderProgram::build(ctx, &self.pipeline_layout, source)?;
        let handle = ProgramHandle::from_index(self.programs.len() as u32);
        self.programs.push(program);
        Ok(handle)
    }

    pub fn get(&self, handle: ProgramHandle) -> Option<&ShaderProgram> {
        self.programs.get(handle.index())
    }

    pub(super) fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }
}
