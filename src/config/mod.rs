//! Configuration file management and CLI override resolution.

mod manager;

pub use manager::{ConfigFile, ConfigManager, ResolveOptions, TurengConfig, resolve_config};
