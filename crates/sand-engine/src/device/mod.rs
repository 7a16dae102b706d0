//! GPU device + surface management.
//!
//! Owns the wgpu Instance/Adapter/Device/Queue, the window surface and its
//! configuration, and hands out one encoder + view per frame.

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
