mod app;
mod shaders;

use sand_engine::core::RenderSettings;
use sand_engine::device::GpuInit;
use sand_engine::logging::{init_logging, LoggingConfig};
use sand_engine::window::{Runtime, RuntimeConfig};

use crate::app::SandboxApp;

const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;
const SPRITE_WIDTH: f32 = 10.0;

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Falling sand".to_string(),
        initial_size: (WIDTH as f64, HEIGHT as f64).into(),
        ..RuntimeConfig::default()
    };
    let settings = RenderSettings::new(WIDTH as f32, HEIGHT as f32, SPRITE_WIDTH);

    if let Err(e) = Runtime::run(config, GpuInit::default(), settings, SandboxApp) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
