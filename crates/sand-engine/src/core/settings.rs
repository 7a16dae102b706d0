use crate::coords::Viewport;
use crate::input::{InputEvent, InputTable};
use crate::render::ShaderTable;

/// Window and layout state shared by the runtime and the app.
///
/// Owned by the runtime. Window events reach it through [`RenderSettings::dispatch`].
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Framebuffer width in pixels.
    pub width: f32,
    /// Framebuffer height in pixels.
    pub height: f32,
    /// Edge length of a square sprite in pixels.
    pub sprite_width: f32,

    /// Sprite grid size at construction. Not updated on resize.
    pub columns: u32,
    pub rows: u32,

    pub shaders: ShaderTable,
    pub input: InputTable,
}

/// Events that mutate [`RenderSettings`].
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    Input(InputEvent),
    /// New framebuffer size in physical pixels.
    FramebufferResized { width: u32, height: u32 },
}

impl RenderSettings {
    pub fn new(width: f32, height: f32, sprite_width: f32) -> Self {
        let (columns, rows) = grid_dimensions(width, height, sprite_width);
        Self {
            width,
            height,
            sprite_width,
            columns,
            rows,
            shaders: ShaderTable::new(),
            input: InputTable::new(),
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn dispatch(&mut self, event: &SettingsEvent) {
        match event {
            SettingsEvent::Input(ev) => self.input.apply_event(ev),
            SettingsEvent::FramebufferResized { width, height } => self.resize(*width, *height),
        }
    }

    /// Stores a new framebuffer size. A zero-area size (minimized window) is
    /// ignored so sprite math never divides by zero.
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width as f32, height as f32);
        if !viewport.is_valid() {
            log::debug!("ignoring zero-area framebuffer {width}x{height}");
            return;
        }
        self.width = viewport.width;
        self.height = viewport.height;
    }
}

/// Whole sprites that fit across and down. Zero for a non-positive sprite size.
fn grid_dimensions(width: f32, height: f32, sprite_width: f32) -> (u32, u32) {
    if sprite_width.is_nan() || sprite_width <= 0.0 {
        return (0, 0);
    }
    let fit = |extent: f32| (extent / sprite_width).floor().max(0.0) as u32;
    (fit(width), fit(height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonState, InputCode, Key};

    #[test]
    fn grid_derives_from_constructor_arguments() {
        let s = RenderSettings::new(1280.0, 720.0, 10.0);
        assert_eq!((s.columns, s.rows), (128, 72));
    }

    #[test]
    fn grid_rounds_down() {
        let s = RenderSettings::new(1000.0, 705.0, 30.0);
        assert_eq!((s.columns, s.rows), (33, 23));
    }

    #[test]
    fn degenerate_sprite_width_gives_empty_grid() {
        assert_eq!(grid_dimensions(1280.0, 720.0, 0.0), (0, 0));
        assert_eq!(grid_dimensions(1280.0, 720.0, -5.0), (0, 0));
        assert_eq!(grid_dimensions(1280.0, 720.0, f32::NAN), (0, 0));
    }

    #[test]
    fn resize_updates_viewport() {
        let mut s = RenderSettings::new(1280.0, 720.0, 10.0);
        s.dispatch(&SettingsEvent::FramebufferResized { width: 1920, height: 1080 });
        assert_eq!(s.viewport(), Viewport::new(1920.0, 1080.0));
        // Grid is a construction-time value.
        assert_eq!((s.columns, s.rows), (128, 72));
    }

    #[test]
    fn zero_area_resize_is_ignored() {
        let mut s = RenderSettings::new(1280.0, 720.0, 10.0);
        s.dispatch(&SettingsEvent::FramebufferResized { width: 0, height: 0 });
        assert_eq!(s.viewport(), Viewport::new(1280.0, 720.0));
        s.dispatch(&SettingsEvent::FramebufferResized { width: 800, height: 0 });
        assert_eq!(s.viewport(), Viewport::new(1280.0, 720.0));
        assert!(s.viewport().is_valid());
    }

    #[test]
    fn input_events_reach_the_table() {
        let mut s = RenderSettings::new(1280.0, 720.0, 10.0);
        s.dispatch(&SettingsEvent::Input(InputEvent::Key {
            key: Key::Escape,
            state: ButtonState::Pressed,
            repeat: false,
        }));
        assert!(s.input.is_down(InputCode::ESCAPE));
    }

    #[test]
    fn sprite_placement_follows_resize() {
        use crate::render::SpriteTransform;
        use glam::{Vec2, Vec3};

        let mut s = RenderSettings::new(1280.0, 720.0, 10.0);
        let before = SpriteTransform::new(s.viewport(), s.sprite_width, Vec2::new(100.0, 100.0));

        s.dispatch(&SettingsEvent::FramebufferResized { width: 640, height: 360 });
        let after = SpriteTransform::new(s.viewport(), s.sprite_width, Vec2::new(100.0, 100.0));

        assert_ne!(before, after);
        assert_eq!(after.scale, Vec3::new(20.0 / 640.0, 20.0 / 360.0, 1.0));
        assert!((after.translation.x - (200.0 / 640.0 - 1.0)).abs() < 1e-6);
    }
}
