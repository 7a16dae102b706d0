use sand_engine::render::ShaderSource;

/// Table key of the sand program.
pub const SAND: &str = "sand";

pub const SAND_VERTEX: &str = include_str!("../shaders/sand.vert.wgsl");
pub const SAND_FRAGMENT: &str = include_str!("../shaders/sand.frag.wgsl");

pub fn sand() -> ShaderSource<'static> {
    ShaderSource {
        label: SAND,
        vertex: SAND_VERTEX,
        fragment: SAND_FRAGMENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sand_engine::render::{validate_stage, ShaderStage};

    #[test]
    fn sand_stages_validate() {
        let src = sand();
        validate_stage(src.label, src.vertex, ShaderStage::Vertex).unwrap();
        validate_stage(src.label, src.fragment, ShaderStage::Fragment).unwrap();
    }

    #[test]
    fn stages_are_not_interchangeable() {
        assert!(validate_stage(SAND, SAND_FRAGMENT, ShaderStage::Vertex).is_err());
        assert!(validate_stage(SAND, SAND_VERTEX, ShaderStage::Fragment).is_err());
    }
}
