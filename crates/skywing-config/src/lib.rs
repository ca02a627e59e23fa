//! Configuration for the SkyWing geometry kernel.
//!
//! Holds the tolerances passed to the kernel's epsilon-aware queries and the
//! debug log level, persisted to disk as a RON file with hot-reload
//! detection and forward/backward compatible serialization.

mod config;
mod error;

pub use config::{Config, DebugConfig, GeometryConfig, default_config_dir};
pub use error::ConfigError;
