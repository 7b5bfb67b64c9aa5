//! Filesystem path resolution for client configuration.

use std::path::PathBuf;

/// Returns the default configuration file path.
///
/// Resolves to `<config dir>/marquee/config.toml`, e.g.
/// `~/.config/marquee/config.toml` on Linux. Returns `None` when the platform
/// has no conventional config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("marquee").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_crate_config_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("marquee/config.toml"));
        }
    }
}
