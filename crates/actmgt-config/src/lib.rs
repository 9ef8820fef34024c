#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Environment-driven configuration for the action API.
//!
//! Layout: `model.rs` (typed config), `loader.rs` (environment lookup),
//! `validate.rs` (value parsing), `defaults.rs` (defaults and variable names).

pub mod defaults;
pub mod error;
mod loader;
pub mod model;
mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{ActionApiConfig, LoggingSettings};
pub use validate::parse_log_level;
