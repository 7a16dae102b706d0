//! Engine-facing contracts.
//!
//! The runtime owns the window and GPU; apps see only [`RenderSettings`],
//! the setup/frame contexts and the [`FrameLoop`] state.

mod app;
mod ctx;
mod frame;
mod settings;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, SetupCtx};
pub use frame::{CloseReason, FrameLoop, FramePass, FrameStart, FrameState};
pub use settings::{RenderSettings, SettingsEvent};
