//! Configuration library for Marquee.
//!
//! Settings are layered from a `.env` file, an optional `marquee.toml`, and
//! the process environment (environment wins over the file, the file wins
//! over built-in defaults). Non-fatal problems are collected as
//! [`ConfigWarnings`] for the caller to report.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{Config, ConfigMetadata, ImageConfig};
pub use validation::{ConfigWarning, ConfigWarnings};
