//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single window, and wires them to the
//! GPU layer, the settings object and the frame loop.

mod pass;
mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
