//! Logging setup.
//!
//! Library code logs through the `log` facade only. Binaries call
//! [`init_logging`] to install `env_logger` as the backend.

mod init;

pub use init::{LoggingConfig, init_logging};
