//! Sand engine crate.
//!
//! Owns the window, GPU and sprite rendering runtime used by the sandbox app.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
