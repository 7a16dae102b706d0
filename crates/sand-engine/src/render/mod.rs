//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU positions are framebuffer pixels (top-left origin, +Y down).
//! - Each draw carries a model matrix that maps the unit quad straight into NDC.

mod common;
mod ctx;
mod error;
mod mesh;
mod programs;
mod renderer;
mod shader;
mod sprite;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::{RenderError, ShaderError};
pub use mesh::{QuadMesh, QuadVertex, QUAD_INDICES, QUAD_VERTICES};
pub use programs::{ProgramHandle, ProgramStore, ShaderTable};
pub use renderer::Renderer;
pub use shader::{validate_stage, ShaderProgram, ShaderSource, ShaderStage};
pub use sprite::{SpriteRenderer, SpriteTransform};
