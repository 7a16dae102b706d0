use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, CloseReason, FrameLoop, RenderSettings, SettingsEvent, SetupCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{ButtonState, InputEvent, Key};
use crate::paint::Color;
use crate::render::{RenderCtx, Renderer};

use super::pass::WindowFramePass;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Framebuffer clear color at the start of every frame.
    pub clear_color: Color,
    /// Close the window on an Escape press.
    pub close_on_escape: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "sand".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            clear_color: Color::BLACK,
            close_on_escape: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, runs `app.setup`, then drives frames until the window closes.
    ///
    /// Startup failures and render errors are returned after the event loop exits.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, settings: RenderSettings, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, settings, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    settings: RenderSettings,
    frame_loop: FrameLoop,

    window: Option<WindowEntry>,
    renderer: Option<Renderer>,

    /// First fatal error; returned from `Runtime::run`.
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, settings: RenderSettings, app: A) -> Self {
        let frame_loop = FrameLoop::new(config.clear_color);
        Self {
            config,
            gpu_init,
            app,
            settings,
            frame_loop,
            window: None,
            renderer: None,
            fatal: None,
        }
    }

    fn fail(&mut self, err: anyhow::Error, event_loop: &ActiveEventLoop) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.frame_loop.request_close(CloseReason::AppRequested);
        event_loop.exit();
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")
    }

    /// Creates the window, GPU resources and app state. Runs once.
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let entry = self.create_window_entry(event_loop)?;

        let size = entry.with_window(|w| w.inner_size());
        self.settings.dispatch(&SettingsEvent::FramebufferResized {
            width: size.width,
            height: size.height,
        });

        let Self { app, settings, .. } = self;
        let renderer = entry.with_gpu(|gpu| -> Result<Renderer> {
            let info = gpu.adapter_info();
            log::info!(
                "renderer: {} ({:?}, driver {} {})",
                info.name,
                info.backend,
                info.driver,
                info.driver_info
            );
            log::info!("surface format: {:?}, framebuffer {}x{}", gpu.surface_format(), size.width, size.height);

            let mut renderer = Renderer::new(gpu.device());
            let mut ctx = SetupCtx {
                render: RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), settings.viewport()),
                settings: &mut *settings,
                programs: &mut renderer.programs,
            };
            app.setup(&mut ctx).context("app setup failed")?;
            Ok(renderer)
        })?;

        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn resize(&mut self, new_size: PhysicalSize<u32>) {
        log::debug!("framebuffer resized to {}x{}", new_size.width, new_size.height);
        self.settings.dispatch(&SettingsEvent::FramebufferResized {
            width: new_size.width,
            height: new_size.height,
        });
        if let Some(entry) = self.window.as_mut() {
            entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn redraw(&mut self) {
        let Self {
            app,
            settings,
            frame_loop,
            window,
            renderer,
            fatal,
            ..
        } = self;

        let (Some(entry), Some(renderer)) = (window.as_mut(), renderer.as_mut()) else {
            return;
        };

        let error = entry.with_mut(|fields| {
            let mut pass = WindowFramePass {
                window: fields.window,
                gpu: fields.gpu,
                renderer,
                app,
                settings,
                frame: None,
                error: None,
            };
            frame_loop.run_frame(&mut pass);
            pass.error
        });

        if let Some(e) = error {
            if fatal.is_none() {
                *fatal = Some(anyhow::Error::new(e).context("render failed"));
            }
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || !self.frame_loop.is_running() {
            return;
        }

        if let Err(e) = self.start(event_loop) {
            self.fail(e, event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.frame_loop.is_running() {
            event_loop.exit();
            return;
        }

        // Continuous redraw; presentation blocks on vsync.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if !self.frame_loop.is_running() {
            event_loop.exit();
            return;
        }

        let ours = self
            .window
            .as_ref()
            .is_some_and(|entry| entry.with_window(|w| w.id()) == window_id);
        if !ours {
            return;
        }

        if let Some(ev) = translate_window_event(&event) {
            let escape = matches!(
                ev,
                InputEvent::Key { key: Key::Escape, state: ButtonState::Pressed, repeat: false }
            );
            self.settings.dispatch(&SettingsEvent::Input(ev));

            if escape && self.config.close_on_escape {
                self.frame_loop.request_close(CloseReason::EscapePressed);
            }
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.frame_loop.request_close(CloseReason::AppRequested);
        }

        match event {
            WindowEvent::CloseRequested => {
                self.frame_loop.request_close(CloseReason::WindowClosed);
            }

            WindowEvent::Resized(new_size) => self.resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(size) = self.window.as_ref().map(|e| e.with_window(|w| w.inner_size())) {
                    self.resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(),

            _ => {}
        }

        if !self.frame_loop.is_running() {
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // GPU objects go before the surface's window.
        self.renderer = None;
        self.window = None;
        log::debug!("event loop exiting after {} frames", self.frame_loop.frames());
    }
}
