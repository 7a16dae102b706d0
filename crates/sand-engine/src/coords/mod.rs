//! Coordinate spaces.
//!
//! CPU space is framebuffer pixels: origin top-left, +X right, +Y down.
//! The GPU expects NDC: origin center, +Y up, both axes in [-1, 1].

mod ndc;
mod viewport;

pub use ndc::{pixel_extent_to_ndc, pixel_to_ndc};
pub use viewport::Viewport;
