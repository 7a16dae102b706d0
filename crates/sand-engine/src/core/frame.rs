//! Per-frame state machine.
//!
//! One iteration is clear → handle input → render → present. The window
//! system drains its event queue between iterations; that part lives in the
//! runtime.

use crate::paint::Color;

use super::app::AppControl;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameState {
    Running,
    Closing,
}

/// Why the loop left `Running`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CloseReason {
    /// The window manager asked the window to close.
    WindowClosed,
    /// Escape was pressed.
    EscapePressed,
    /// An app callback returned `AppControl::Exit`.
    AppRequested,
    /// The surface can no longer be presented to.
    SurfaceLost,
}

/// Outcome of starting a frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameStart {
    /// Target acquired and cleared.
    Ready,
    /// No target this time; try again next iteration.
    Skip,
    /// No target and none will come.
    Close,
}

/// The four steps of a frame, implemented by the runtime against the GPU and
/// by tests against a recorder.
pub trait FramePass {
    fn clear(&mut self, color: Color) -> FrameStart;
    fn handle_input(&mut self) -> AppControl;
    fn render(&mut self) -> AppControl;
    fn present(&mut self);
}

#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: FrameState,
    close_reason: Option<CloseReason>,
    clear_color: Color,
    frames: u64,
}

impl FrameLoop {
    pub fn new(clear_color: Color) -> Self {
        Self {
            state: FrameState::Running,
            close_reason: None,
            clear_color,
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> FrameState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == FrameState::Running
    }

    /// First reason given for closing, if closed.
    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close_reason
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Moves to `Closing`. Only the first reason is kept.
    pub fn request_close(&mut self, reason: CloseReason) {
        if self.state == FrameState::Closing {
            return;
        }
        log::info!("closing after {} frames: {reason:?}", self.frames);
        self.state = FrameState::Closing;
        self.close_reason = Some(reason);
    }

    /// Runs one iteration against `pass` and returns the resulting state.
    ///
    /// A started frame is always presented, even when input handling or
    /// rendering asks to exit; the transition takes effect afterwards.
    pub fn run_frame<P: FramePass>(&mut self, pass: &mut P) -> FrameState {
        if self.state == FrameState::Closing {
            return self.state;
        }

        match pass.clear(self.clear_color) {
            FrameStart::Ready => {}
            FrameStart::Skip => return self.state,
            FrameStart::Close => {
                self.request_close(CloseReason::SurfaceLost);
                return self.state;
            }
        }

        let input = pass.handle_input();
        let render = pass.render();
        pass.present();
        self.frames += 1;

        if input == AppControl::Exit || render == AppControl::Exit {
            self.request_close(CloseReason::AppRequested);
        }

        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, Eq, PartialEq)]
    enum Step {
        Clear,
        Input,
        Render,
        Present,
    }

    struct Recorder {
        steps: Vec<Step>,
        clear_colors: Vec<Color>,
        start: FrameStart,
        input: AppControl,
        render: AppControl,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                steps: Vec::new(),
                clear_colors: Vec::new(),
                start: FrameStart::Ready,
                input: AppControl::Continue,
                render: AppControl::Continue,
            }
        }
    }

    impl FramePass for Recorder {
        fn clear(&mut self, color: Color) -> FrameStart {
            self.steps.push(Step::Clear);
            self.clear_colors.push(color);
            self.start
        }

        fn handle_input(&mut self) -> AppControl {
            self.steps.push(Step::Input);
            self.input
        }

        fn render(&mut self) -> AppControl {
            self.steps.push(Step::Render);
            self.render
        }

        fn present(&mut self) {
            self.steps.push(Step::Present);
        }
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn frame_runs_steps_in_order() {
        let mut fl = FrameLoop::new(Color::BLACK);
        let mut rec = Recorder::new();

        assert_eq!(fl.run_frame(&mut rec), FrameState::Running);
        assert_eq!(rec.steps, vec![Step::Clear, Step::Input, Step::Render, Step::Present]);
        assert_eq!(rec.clear_colors, vec![Color::BLACK]);
        assert_eq!(fl.frames(), 1);
    }

    #[test]
    fn frames_repeat_while_running() {
        let mut fl = FrameLoop::new(Color::BLACK);
        let mut rec = Recorder::new();
        for _ in 0..3 {
            fl.run_frame(&mut rec);
        }
        assert_eq!(rec.steps.len(), 12);
        assert_eq!(fl.frames(), 3);
    }

    // ── closing ───────────────────────────────────────────────────────────

    #[test]
    fn close_request_stops_further_frames() {
        let mut fl = FrameLoop::new(Color::BLACK);
        let mut rec = Recorder::new();

        fl.run_frame(&mut rec);
        fl.request_close(CloseReason::EscapePressed);

        assert_eq!(fl.run_frame(&mut rec), FrameState::Closing);
        assert_eq!(rec.steps.len(), 4);
        assert!(!fl.is_running());
    }

    #[test]
    fn first_close_reason_wins() {
        let mut fl = FrameLoop::new(Color::BLACK);
        fl.request_close(CloseReason::WindowClosed);
        fl.request_close(CloseReason::EscapePressed);
        assert_eq!(fl.close_reason(), Some(CloseReason::WindowClosed));
    }

    #[test]
    fn input_exit_still_presents_the_frame() {
        let mut fl = FrameLoop::new(Color::BLACK);
        let mut rec = Recorder::new();
        rec.input = AppControl::Exit;

        assert_eq!(fl.run_frame(&mut rec), FrameState::Closing);
        assert_eq!(rec.steps, vec![Step::Clear, Step::Input, Step::Render, Step::Present]);
        assert_eq!(fl.close_reason(), Some(CloseReason::AppRequested));
    }

    #[test]
    fn render_exit_closes() {
        let mut fl = FrameLoop::new(Color::BLACK);
        let mut rec = Recorder::new();
        rec.render = AppControl::Exit;
        assert_eq!(fl.run_frame(&mut rec), FrameState::Closing);
        assert_eq!(fl.frames(), 1);
    }

    // ── frame start ───────────────────────────────────────────────────────

    #[test]
    fn skipped_frame_does_not_render_or_present() {
        let mut fl = FrameLoop::new(Color::BLACK);
        let mut rec = Recorder::new();
        rec.start = FrameStart::Skip;

        assert_eq!(fl.run_frame(&mut rec), FrameState::Running);
        assert_eq!(rec.steps, vec![Step::Clear]);
        assert_eq!(fl.frames(), 0);
    }

    #[test]
    fn lost_surface_closes() {
        let mut fl = FrameLoop::new(Color::BLACK);
        let mut rec = Recorder::new();
        rec.start = FrameStart::Close;

        assert_eq!(fl.run_frame(&mut rec), FrameState::Closing);
        assert_eq!(fl.close_reason(), Some(CloseReason::SurfaceLost));
        assert_eq!(rec.steps, vec![Step::Clear]);
    }

    #[test]
    fn clear_color_is_configurable() {
        let white = Color::from_premul(1.0, 1.0, 1.0, 1.0);
        let mut fl = FrameLoop::new(white);
        let mut rec = Recorder::new();
        fl.run_frame(&mut rec);
        assert_eq!(rec.clear_colors, vec![white]);
    }
}
