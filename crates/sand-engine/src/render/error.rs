use std::fmt;

use super::shader::ShaderStage;

/// Shader build failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// A stage failed to parse or validate.
    Compile {
        program: String,
        stage: ShaderStage,
        message: String,
    },
    /// A stage source has no entry point for its stage.
    MissingEntryPoint {
        program: String,
        stage: ShaderStage,
        entry_point: &'static str,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { program, stage, message } => {
                write!(f, "{stage} stage of shader `{program}` failed to compile: {message}")
            }
            ShaderError::MissingEntryPoint { program, stage, entry_point } => write!(
                f,
                "shader `{program}` does not link: {stage} stage has no `{entry_point}` entry point"
            ),
        }
    }
}

impl std::error::Error for ShaderError {}

/// Draw-time failure.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Shader name was never registered in the shader table.
    UnknownShader(String),
    Shader(ShaderError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnknownShader(name) => write!(f, "no shader program named `{name}`"),
            RenderError::Shader(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Shader(e) => Some(e),
            RenderError::UnknownShader(_) => None,
        }
    }
}

impl From<ShaderError> for RenderError {
    fn from(e: ShaderError) -> Self {
        RenderError::Shader(e)
    }
}
