use std::fmt;

use super::ctx::RenderCtx;
use super::error::ShaderError;
use super::mesh::QuadVertex;

/// Programmable pipeline stage.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Entry point every stage source must define.
    pub const fn entry_point(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vs_main",
            ShaderStage::Fragment => "fs_main",
        }
    }

    fn naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// WGSL source pair for one program.
#[derive(Debug, Copy, Clone)]
pub struct ShaderSource<'a> {
    pub label: &'a str,
    pub vertex: &'a str,
    pub fragment: &'a str,
}

/// A linked program: one render pipeline drawing the quad mesh.
#[derive(Debug)]
pub struct ShaderProgram {
    pipeline: wgpu::RenderPipeline,
}

impl ShaderProgram {
    pub(super) fn pipeline(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }

    /// Compiles both stages and links them into a pipeline.
    ///
    /// Each stage is validated on the CPU first so a bad source becomes a
    /// `ShaderError` instead of a device error. The per-stage modules are
    /// dropped once the pipeline exists.
    pub(super) fn build(
        ctx: &RenderCtx<'_>,
        layout: &wgpu::PipelineLayout,
        source: &ShaderSource<'_>,
    ) -> Result<Self, ShaderError> {
        validate_stage(source.label, source.vertex, ShaderStage::Vertex)?;
        validate_stage(source.label, source.fragment, ShaderStage::Fragment)?;

        let vertex = compile_module(ctx.device, source.label, source.vertex, ShaderStage::Vertex);
        let fragment =
            compile_module(ctx.device, source.label, source.fragment, ShaderStage::Fragment);

        let label = format!("sand {} pipeline", source.label);
        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&label),
            layout: Some(layout),

            vertex: wgpu::VertexState {
                module: &vertex,
                entry_point: Some(ShaderStage::Vertex.entry_point()),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment,
                entry_point: Some(ShaderStage::Fragment.entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("linked shader program `{}`", source.label);

        Ok(Self { pipeline })
    }
}

fn compile_module(
    device: &wgpu::Device,
    program: &str,
    source: &str,
    stage: ShaderStage,
) -> wgpu::ShaderModule {
    let label = format!("sand {program} {stage} shader");
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    })
}

/// Parses and validates one WGSL stage and checks that it defines the stage's entry point.
pub fn validate_stage(program: &str, source: &str, stage: ShaderStage) -> Result<(), ShaderError> {
    let compile_error = |message: String| ShaderError::Compile {
        program: program.to_owned(),
        stage,
        message,
    };

    let module = naga::front::wgsl::parse_str(source)
        .map_err(|e| compile_error(e.emit_to_string(source)))?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    )
    .validate(&module)
    .map_err(|e| compile_error(error_chain(&e)))?;

    let entry_point = stage.entry_point();
    let linked = module
        .entry_points
        .iter()
        .any(|ep| ep.stage == stage.naga() && ep.name == entry_point);

    if !linked {
        return Err(ShaderError::MissingEntryPoint {
            program: program.to_owned(),
            stage,
            entry_point,
        });
    }

    Ok(())
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(e) = source {
        message.push_str(": ");
        message.push_str(&e.to_string());
        source = e.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERTEX: &str = r#"
struct Model {
    model: mat4x4<f32>,
};

@group(0) @binding(0) var<uniform> u: Model;

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return u.model * vec4<f32>(position, 1.0);
}
"#;

    const FRAGMENT: &str = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 0.5, 0.2, 1.0);
}
"#;

    #[test]
    fn valid_stages_pass() {
        validate_stage("test", VERTEX, ShaderStage::Vertex).unwrap();
        validate_stage("test", FRAGMENT, ShaderStage::Fragment).unwrap();
    }

    #[test]
    fn syntax_error_is_compile_error() {
        let err = validate_stage("broken", "fn vs_main( {", ShaderStage::Vertex).unwrap_err();
        match err {
            ShaderError::Compile { program, stage, message } => {
                assert_eq!(program, "broken");
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn type_error_is_compile_error() {
        let src = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    return 1.0;
}
"#;
        let err = validate_stage("typed", src, ShaderStage::Fragment).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { stage: ShaderStage::Fragment, .. }));
    }

    #[test]
    fn swapped_stages_do_not_link() {
        let err = validate_stage("swapped", FRAGMENT, ShaderStage::Vertex).unwrap_err();
        assert_eq!(
            err,
            ShaderError::MissingEntryPoint {
                program: "swapped".into(),
                stage: ShaderStage::Vertex,
                entry_point: "vs_main",
            }
        );
    }

    #[test]
    fn display_names_program_and_stage() {
        let err = validate_stage("sand", FRAGMENT, ShaderStage::Vertex).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("`sand`"));
        assert!(text.contains("vertex"));
        assert!(text.contains("vs_main"));
    }
}
