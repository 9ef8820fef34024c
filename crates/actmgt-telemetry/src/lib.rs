//! Telemetry primitives shared across the action management workspace.
//!
//! This crate centralises logging setup so every binary installs the same
//! subscriber and records the same build metadata.

pub mod error;
pub mod init;

pub use error::{Result, TelemetryError};
pub use init::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, build_sha, init_logging};
