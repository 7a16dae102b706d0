use sand_engine::core::{App, FrameCtx, SetupCtx};
use sand_engine::render::RenderError;

use crate::shaders;

/// Draws two sand sprites on a cleared background.
#[derive(Debug, Default)]
pub struct SandboxApp;

impl App for SandboxApp {
    fn setup(&mut self, ctx: &mut SetupCtx<'_>) -> anyhow::Result<()> {
        ctx.build_shader(shaders::SAND, &shaders::sand())?;
        Ok(())
    }

    fn render(&mut self, frame: &mut FrameCtx<'_>) -> Result<(), RenderError> {
        let s = frame.settings.sprite_width;
        frame.draw_sprite(shaders::SAND, 0.0, 0.0)?;
        frame.draw_sprite(shaders::SAND, s, s)?;
        Ok(())
    }
}
