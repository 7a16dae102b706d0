use winit::window::Window;

use crate::core::{App, AppControl, FrameCtx, FramePass, FrameStart, RenderSettings};
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderError, RenderTarget, Renderer};

/// One frame of the window against the GPU.
pub(super) struct WindowFramePass<'a, 'w, A> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub renderer: &'a mut Renderer,
    pub app: &'a mut A,
    pub settings: &'a mut RenderSettings,
    pub frame: Option<GpuFrame>,
    pub error: Option<RenderError>,
}

impl<'a, 'w, A: App> FramePass for WindowFramePass<'a, 'w, A> {
    fn clear(&mut self, color: Color) -> FrameStart {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => FrameStart::Close,
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        FrameStart::Skip
                    }
                };
            }
        };

        // Clear pass; dropped before any later pass borrows the encoder.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("sand clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(color.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        self.frame = Some(frame);
        FrameStart::Ready
    }

    fn handle_input(&mut self) -> AppControl {
        self.app.handle_input(self.settings)
    }

    fn render(&mut self) -> AppControl {
        let Self {
            gpu,
            renderer,
            app,
            settings,
            frame,
            error,
            ..
        } = self;

        let Some(frame) = frame.as_mut() else {
            return AppControl::Continue;
        };

        let result = {
            let mut ctx = FrameCtx {
                settings,
                sprites: &mut renderer.sprites,
            };
            app.render(&mut ctx)
        };

        if let Err(e) = result {
            log::error!("render failed: {e}");
            renderer.sprites.discard();
            *error = Some(e);
            return AppControl::Exit;
        }

        let rctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), settings.viewport());
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        renderer.flush(&rctx, &mut target);

        AppControl::Continue
    }

    fn present(&mut self) {
        if let Some(frame) = self.frame.take() {
            self.window.pre_present_notify();
            self.gpu.submit(frame);
        }
    }
}
