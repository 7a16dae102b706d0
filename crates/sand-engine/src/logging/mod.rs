//! Logging setup.
//!
//! The engine only talks to the `log` facade; `env_logger` is installed here
//! so binaries get stderr output with one call.

mod init;

pub use init::{init_logging, LoggingConfig};
