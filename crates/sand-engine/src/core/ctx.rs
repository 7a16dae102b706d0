use crate::render::{
    ProgramHandle, ProgramStore, RenderCtx, RenderError, ShaderError, ShaderSource, SpriteRenderer,
};

use super::settings::RenderSettings;

/// Context for [`App::setup`](super::App::setup).
pub struct SetupCtx<'a> {
    pub render: RenderCtx<'a>,
    pub settings: &'a mut RenderSettings,
    pub programs: &'a mut ProgramStore,
}

impl<'a> SetupCtx<'a> {
    /// Builds a program from `source` and registers it as `name` in the
    /// settings' shader table.
    pub fn build_shader(
        &mut self,
        name: &str,
        source: &ShaderSource<'_>,
    ) -> Result<ProgramHandle, ShaderError> {
        let handle = self.programs.build(&self.render, source)?;
        if self.settings.shaders.insert(name, handle).is_some() {
            log::warn!("shader `{name}` registered twice; keeping the newer program");
        }
        log::info!("shader `{name}` ready");
        Ok(handle)
    }
}

/// Per-frame context passed to [`App::render`](super::App::render).
pub struct FrameCtx<'a> {
    pub settings: &'a RenderSettings,
    pub sprites: &'a mut SpriteRenderer,
}

impl<'a> FrameCtx<'a> {
    /// Queues a square sprite with its top-left corner at `(x, y)` pixels.
    pub fn draw_sprite(&mut self, shader: &str, x: f32, y: f32) -> Result<(), RenderError> {
        self.sprites.draw_sprite(self.settings, shader, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_ctx_draws_with_current_settings() {
        let mut settings = RenderSettings::new(1280.0, 720.0, 10.0);
        settings.shaders.insert("sand", ProgramHandle::from_index(0));
        settings.resize(640, 360);

        let mut sprites = SpriteRenderer::new();
        let mut frame = FrameCtx { settings: &settings, sprites: &mut sprites };
        frame.draw_sprite("sand", 0.0, 0.0).unwrap();
        assert!(frame.draw_sprite("rock", 0.0, 0.0).is_err());

        let model = sprites.queued_models().next().unwrap();
        assert_eq!(model.x_axis.x, 20.0 / 640.0);
        assert_eq!(model.y_axis.y, 20.0 / 360.0);
    }
}
