//! XDG-style path resolution for the configuration file.

use std::path::PathBuf;

/// Returns the configuration directory for tureng.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tureng` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/tureng` otherwise
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
pub fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME").map_or_else(
        |_| {
            dirs::home_dir()
                .expect("Failed to determine home directory")
                .join(".config")
                .join("tureng")
        },
        |xdg| PathBuf::from(xdg).join("tureng"),
    )
}
