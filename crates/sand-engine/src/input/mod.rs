//! Input subsystem.
//!
//! Public types are platform-agnostic. `platform::winit` translates window
//! events; `InputTable` keeps per-code "down" and "consumed" flags.

pub mod platform;
mod state;
mod types;

pub use state::InputTable;
pub use types::{ButtonState, InputCode, InputEvent, Key, MouseButton, INPUT_CODE_COUNT};
