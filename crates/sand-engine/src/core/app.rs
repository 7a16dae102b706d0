use winit::event::WindowEvent;

use crate::render::RenderError;

use super::ctx::{FrameCtx, SetupCtx};
use super::settings::RenderSettings;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract driven by the runtime.
pub trait App {
    /// Called once after the GPU is ready, before the first frame.
    /// Builds shader programs; an error aborts startup.
    fn setup(&mut self, ctx: &mut SetupCtx<'_>) -> anyhow::Result<()>;

    /// Called for every window event, after the input table was updated.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame before rendering.
    fn handle_input(&mut self, settings: &mut RenderSettings) -> AppControl {
        let _ = settings;
        AppControl::Continue
    }

    /// Queues this frame's sprites. An error closes the window and is
    /// returned from `Runtime::run`.
    fn render(&mut self, frame: &mut FrameCtx<'_>) -> Result<(), RenderError>;
}
